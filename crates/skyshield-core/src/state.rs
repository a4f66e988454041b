//! Game state snapshot: the complete visible state handed to the renderer each tick.
//!
//! Views are owned copies; nothing here refers back into the live store.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityId, Position, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub tick: u64,
    pub level: u32,
    pub status: LevelStatus,
    pub paused: bool,
    pub rockets: Vec<RocketView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
    pub batteries: Vec<BatteryView>,
    pub cities: Vec<CityView>,
    pub score: u64,
    /// Rockets still to be spawned this level.
    pub rockets_remaining: u32,
    pub time_remaining_secs: f64,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub id: EntityId,
    pub position: Position,
    pub target: Position,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: EntityId,
    pub position: Position,
    pub origin: Position,
    pub target: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: EntityId,
    pub position: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub phase: ExplosionPhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub id: EntityId,
    pub position: Position,
    pub ammo: u32,
    pub max_ammo: u32,
    pub health: u32,
    pub max_health: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: EntityId,
    pub position: Position,
    pub destroyed: bool,
}
