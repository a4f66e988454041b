//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at spawn-time within the next tick,
//! before any projectile moves.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Position};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire from the eligible battery nearest to `origin`, aimed at `target`.
    LaunchInterceptor { origin: Position, target: Position },
    /// Freeze the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
}

/// Outcome of a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LaunchResult {
    Launched {
        battery_id: EntityId,
        interceptor_id: EntityId,
    },
    /// No battery is both standing and loaded. Nothing was mutated.
    NoEligibleBattery,
}

impl LaunchResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, LaunchResult::Launched { .. })
    }

    pub fn battery_id(&self) -> Option<EntityId> {
        match self {
            LaunchResult::Launched { battery_id, .. } => Some(*battery_id),
            LaunchResult::NoEligibleBattery => None,
        }
    }

    pub fn interceptor_id(&self) -> Option<EntityId> {
        match self {
            LaunchResult::Launched { interceptor_id, .. } => Some(*interceptor_id),
            LaunchResult::NoEligibleBattery => None,
        }
    }
}
