//! Runtime configuration.
//!
//! `GameConfig` carries every tunable the engine reads. Defaults come from
//! `constants`; a TOML file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values that parse but cannot drive a simulation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub level: LevelConfig,
    pub rockets: RocketConfig,
    pub interceptors: InterceptorConfig,
    pub batteries: BatteryConfig,
    pub explosions: ExplosionConfig,
    pub scoring: ScoringConfig,
}

/// Play field geometry and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
    pub ground_y: f64,
    pub out_of_bounds_margin: f64,
    pub battery_x_fractions: [f64; 3],
    pub city_x_fractions: Vec<f64>,
}

/// Level progression and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub tick_rate: u32,
    pub total_levels: u32,
    pub duration_secs: f64,
    pub rockets_first_level: u32,
    pub rockets_final_level: u32,
    pub ammo_multiplier: f64,
    pub outer_battery_ammo_share: f64,
    pub spawn_weight_base: f64,
    pub spawn_weight_ramp: f64,
}

/// Enemy rocket parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub speed_min: f64,
    pub speed_max: f64,
    pub collision_radius: f64,
    pub intercept_proximity_factor: f64,
}

/// Player interceptor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorConfig {
    pub speed: f64,
    pub muzzle_offset: f64,
}

/// Battery and city durability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    pub max_health: u32,
    pub battery_hit_tolerance: f64,
    pub city_hit_tolerance: f64,
}

/// Explosion sizes and rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub initial_radius: f64,
    pub max_radius: f64,
    pub growth_rate: f64,
    pub shrink_factor: f64,
    pub intercept_radius_factor: f64,
    pub intercept_growth_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_per_kill: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_y: GROUND_Y,
            out_of_bounds_margin: OUT_OF_BOUNDS_MARGIN,
            battery_x_fractions: BATTERY_X_FRACTIONS,
            city_x_fractions: CITY_X_FRACTIONS.to_vec(),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            total_levels: TOTAL_LEVELS,
            duration_secs: LEVEL_DURATION_SECS,
            rockets_first_level: ROCKETS_FIRST_LEVEL,
            rockets_final_level: ROCKETS_FINAL_LEVEL,
            ammo_multiplier: AMMO_MULTIPLIER,
            outer_battery_ammo_share: OUTER_BATTERY_AMMO_SHARE,
            spawn_weight_base: SPAWN_WEIGHT_BASE,
            spawn_weight_ramp: SPAWN_WEIGHT_RAMP,
        }
    }
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            speed_min: ROCKET_SPEED_MIN,
            speed_max: ROCKET_SPEED_MAX,
            collision_radius: ROCKET_COLLISION_RADIUS,
            intercept_proximity_factor: INTERCEPT_PROXIMITY_FACTOR,
        }
    }
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            speed: INTERCEPTOR_SPEED,
            muzzle_offset: MUZZLE_OFFSET,
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            max_health: BATTERY_MAX_HEALTH,
            battery_hit_tolerance: BATTERY_HIT_TOLERANCE,
            city_hit_tolerance: CITY_HIT_TOLERANCE,
        }
    }
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            initial_radius: EXPLOSION_INITIAL_RADIUS,
            max_radius: EXPLOSION_MAX_RADIUS,
            growth_rate: EXPLOSION_GROWTH_RATE,
            shrink_factor: EXPLOSION_SHRINK_FACTOR,
            intercept_radius_factor: INTERCEPT_BLAST_RADIUS_FACTOR,
            intercept_growth_factor: INTERCEPT_BLAST_GROWTH_FACTOR,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_kill: POINTS_PER_KILL,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let f = &self.field;
        if f.width <= 0.0 || f.height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        if !(0.0..=f.height).contains(&f.ground_y) {
            return invalid("ground_y must lie inside the field");
        }
        if f.city_x_fractions.is_empty() {
            return invalid("at least one city is required");
        }

        let l = &self.level;
        if l.tick_rate == 0 {
            return invalid("tick_rate must be non-zero");
        }
        if l.total_levels == 0 {
            return invalid("total_levels must be non-zero");
        }
        if l.duration_secs <= 0.0 {
            return invalid("duration_secs must be positive");
        }
        if l.rockets_first_level > l.rockets_final_level {
            return invalid("rockets_first_level exceeds rockets_final_level");
        }
        if l.ammo_multiplier < 0.0 {
            return invalid("ammo_multiplier must not be negative");
        }
        if !(0.0..=0.5).contains(&l.outer_battery_ammo_share) {
            return invalid("outer_battery_ammo_share must be within [0, 0.5]");
        }

        let r = &self.rockets;
        if r.speed_min <= 0.0 || r.speed_min > r.speed_max {
            return invalid("rocket speed range must be positive and ordered");
        }
        if r.collision_radius <= 0.0 {
            return invalid("rocket collision_radius must be positive");
        }

        if self.interceptors.speed <= 0.0 {
            return invalid("interceptor speed must be positive");
        }
        if self.batteries.max_health == 0 {
            return invalid("battery max_health must be non-zero");
        }

        let e = &self.explosions;
        if e.growth_rate <= 0.0 || e.shrink_factor <= 0.0 {
            return invalid("explosion rates must be positive");
        }
        if e.initial_radius < 0.0 || e.max_radius <= 0.0 || e.initial_radius > e.max_radius {
            return invalid("explosion radii must satisfy 0 <= initial <= max");
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
