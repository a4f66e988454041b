//! Default tuning parameters.
//!
//! These seed `GameConfig::default()`; the engine only ever reads the
//! values through a `GameConfig`, so every one of them can be overridden.

/// Simulation tick rate (Hz), aligned to the display frame cadence.
pub const TICK_RATE: u32 = 60;

// --- Field ---

/// Play field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Play field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Y coordinate of the ground line cities and batteries stand on.
pub const GROUND_Y: f64 = 560.0;

/// Distance beyond the visible field after which interceptors are discarded.
pub const OUT_OF_BOUNDS_MARGIN: f64 = 50.0;

/// Horizontal placement of the three batteries as fractions of field width
/// (left outer, center, right outer).
pub const BATTERY_X_FRACTIONS: [f64; 3] = [0.1, 0.5, 0.9];

/// Horizontal placement of the six cities as fractions of field width.
pub const CITY_X_FRACTIONS: [f64; 6] = [0.2, 0.3, 0.4, 0.6, 0.7, 0.8];

// --- Levels ---

/// Number of levels in a campaign.
pub const TOTAL_LEVELS: u32 = 100;

/// Nominal level length (seconds).
pub const LEVEL_DURATION_SECS: f64 = 60.0;

/// Rocket quota on level 1.
pub const ROCKETS_FIRST_LEVEL: u32 = 50;

/// Rocket quota on the final level and beyond.
pub const ROCKETS_FINAL_LEVEL: u32 = 400;

/// Total ammo per level = floor(quota * multiplier).
pub const AMMO_MULTIPLIER: f64 = 1.5;

/// Share of total ammo given to each outer battery (floored).
pub const OUTER_BATTERY_AMMO_SHARE: f64 = 0.25;

// --- Spawn curve ---

/// Spawn weight at the start of a level.
pub const SPAWN_WEIGHT_BASE: f64 = 0.4;

/// Weight added by the end of the level (0.4 -> 1.6).
pub const SPAWN_WEIGHT_RAMP: f64 = 1.2;

// --- Rockets ---

/// Slowest rocket speed (pixels per tick).
pub const ROCKET_SPEED_MIN: f64 = 0.6;

/// Fastest rocket speed (pixels per tick).
pub const ROCKET_SPEED_MAX: f64 = 1.4;

/// Base collision radius of a rocket (pixels).
pub const ROCKET_COLLISION_RADIUS: f64 = 4.0;

/// Interceptor kill distance as a multiple of the rocket collision radius.
pub const INTERCEPT_PROXIMITY_FACTOR: f64 = 3.0;

// --- Interceptors ---

/// Interceptor speed (pixels per tick).
pub const INTERCEPTOR_SPEED: f64 = 8.0;

/// Height of the muzzle point above a battery's position.
pub const MUZZLE_OFFSET: f64 = 12.0;

// --- Batteries and cities ---

/// Hits a battery absorbs before it is destroyed.
pub const BATTERY_MAX_HEALTH: u32 = 3;

/// Axis-aligned tolerance for a rocket impact to count against a city.
pub const CITY_HIT_TOLERANCE: f64 = 15.0;

/// Axis-aligned tolerance for a rocket impact to count against a battery.
pub const BATTERY_HIT_TOLERANCE: f64 = 20.0;

// --- Explosions ---

/// Radius a new explosion starts with.
pub const EXPLOSION_INITIAL_RADIUS: f64 = 2.0;

/// Maximum radius of a standard explosion.
pub const EXPLOSION_MAX_RADIUS: f64 = 40.0;

/// Radius growth per tick of a standard explosion.
pub const EXPLOSION_GROWTH_RATE: f64 = 1.5;

/// Shrink rate as a fraction of the growth rate.
pub const EXPLOSION_SHRINK_FACTOR: f64 = 0.5;

/// Max radius multiplier for explosions caused by an interceptor kill.
pub const INTERCEPT_BLAST_RADIUS_FACTOR: f64 = 3.0;

/// Growth rate multiplier for explosions caused by an interceptor kill.
pub const INTERCEPT_BLAST_GROWTH_FACTOR: f64 = 2.0;

// --- Scoring ---

/// Points per rocket destroyed by the defense.
pub const POINTS_PER_KILL: u64 = 100;
