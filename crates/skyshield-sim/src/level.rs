//! Level configurator. Maps a level index to its quota, ammo and layout.
//!
//! Pure functions of the config; no state, no failure modes.

use serde::{Deserialize, Serialize};

use skyshield_core::config::GameConfig;
use skyshield_core::types::Position;

use crate::store::EntityStore;

/// Everything needed to populate a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSetup {
    /// Level index after clamping into [1, total_levels].
    pub level: u32,
    pub rocket_quota: u32,
    /// Ammo per battery: left outer, center, right outer.
    pub battery_allocations: [u32; 3],
    pub battery_positions: [Position; 3],
    pub city_positions: Vec<Position>,
}

impl LevelSetup {
    pub fn total_ammo(&self) -> u32 {
        self.battery_allocations.iter().sum()
    }
}

/// Clamp a requested level into the playable range. Level 0 maps to 1;
/// anything past the total plays at maximum difficulty.
pub fn clamp_level(config: &GameConfig, level: u32) -> u32 {
    level.clamp(1, config.level.total_levels.max(1))
}

/// Rocket quota for a level: linear from the first-level count to the
/// final-level count over `total_levels`, clamped at the final count.
pub fn rocket_quota(config: &GameConfig, level: u32) -> u32 {
    let l = &config.level;
    let level = clamp_level(config, level);
    if l.total_levels <= 1 {
        return l.rockets_final_level;
    }
    let span = u64::from(l.rockets_final_level.saturating_sub(l.rockets_first_level));
    let step = u64::from(level - 1);
    let steps = u64::from(l.total_levels - 1);
    l.rockets_first_level + (span * step / steps) as u32
}

/// Split floor(quota * multiplier) across the three batteries. Each outer
/// battery gets the floored share, the center takes the remainder.
pub fn battery_allocations(config: &GameConfig, rocket_quota: u32) -> [u32; 3] {
    let l = &config.level;
    let total = (f64::from(rocket_quota) * l.ammo_multiplier).floor() as u32;
    let share = l.outer_battery_ammo_share.clamp(0.0, 0.5);
    let outer = (f64::from(total) * share).floor() as u32;
    [outer, total - 2 * outer, outer]
}

/// Build the full setup for a level index.
pub fn configure(config: &GameConfig, level: u32) -> LevelSetup {
    let level = clamp_level(config, level);
    let rocket_quota = rocket_quota(config, level);
    let field = &config.field;

    let battery_positions = field
        .battery_x_fractions
        .map(|fx| Position::new(fx * field.width, field.ground_y));
    let city_positions = field
        .city_x_fractions
        .iter()
        .map(|fx| Position::new(fx * field.width, field.ground_y))
        .collect();

    LevelSetup {
        level,
        rocket_quota,
        battery_allocations: battery_allocations(config, rocket_quota),
        battery_positions,
        city_positions,
    }
}

/// Spawn the batteries and cities of a setup into a fresh store.
pub fn populate(store: &mut EntityStore, config: &GameConfig, setup: &LevelSetup) {
    for (position, ammo) in setup
        .battery_positions
        .iter()
        .zip(setup.battery_allocations)
    {
        store.spawn_battery(*position, ammo, config.batteries.max_health);
    }
    for position in &setup.city_positions {
        store.spawn_city(*position);
    }
}
