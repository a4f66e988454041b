//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new rocket entered the field.
    RocketSpawned {
        rocket_id: EntityId,
        target_kind: TargetKind,
        target_id: EntityId,
    },
    /// A battery fired.
    InterceptorLaunched {
        battery_id: EntityId,
        interceptor_id: EntityId,
    },
    /// A launch was requested but no battery could fire.
    LaunchRefused,
    /// A rocket reached its target point.
    RocketImpact { rocket_id: EntityId, position: Position },
    /// An interceptor met a rocket.
    RocketIntercepted {
        rocket_id: EntityId,
        interceptor_id: EntityId,
        position: Position,
    },
    /// A rocket flew into an active explosion.
    BlastKill {
        rocket_id: EntityId,
        explosion_id: EntityId,
        position: Position,
    },
    CityDestroyed { city_id: EntityId },
    BatteryDamaged {
        battery_id: EntityId,
        remaining_health: u32,
    },
    BatteryDestroyed { battery_id: EntityId },
    /// The level reached a terminal status.
    LevelStatusChanged { status: LevelStatus, tick: u64 },
}
