//! Entity records stored in the hecs world.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Every entity also carries
//! an `EntityId` and a `Position`; interceptors additionally carry a `Velocity`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position};

/// Enemy rocket falling toward a fixed target point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Point the rocket is heading for.
    pub target: Position,
    /// Which structure was picked as the target when spawned.
    pub target_kind: TargetKind,
    pub target_id: EntityId,
    /// Pixels travelled per tick.
    pub speed: f64,
    pub destroyed: bool,
}

/// Player interceptor flying on a fixed velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interceptor {
    /// Muzzle point it was launched from.
    pub origin: Position,
    /// Commanded aim point.
    pub target: Position,
    /// Battery that fired it.
    pub battery_id: EntityId,
    pub exploded: bool,
}

/// Transient blast zone. Kills every live rocket inside its current radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    pub max_radius: f64,
    pub growth_rate: f64,
    pub phase: ExplosionPhase,
    pub source: BlastSource,
}

/// Player launch site with finite ammo and health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    pub ammo: u32,
    pub max_ammo: u32,
    pub health: u32,
    pub max_health: u32,
    pub destroyed: bool,
}

/// Defended city. Binary state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct City {
    pub destroyed: bool,
}
