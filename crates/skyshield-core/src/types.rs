//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the play field (pixels).
/// x grows to the right, y grows downward; rockets enter at y = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Stable identifier handed out by the entity store, unique within a level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Level clock. Counts ticks and converts them into elapsed/remaining seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimClock {
    /// Ticks elapsed since the level started.
    pub tick: u64,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Nominal level length in seconds. Advisory only: it shapes the spawn
    /// curve and the displayed countdown but never ends a level.
    pub duration_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Axis-aligned proximity: both |dx| and |dy| strictly below `tolerance`.
    pub fn within_box(&self, other: &Position, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f64 {
        self.as_vec().length()
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimClock {
    pub fn new(tick_rate: u32, duration_secs: f64) -> Self {
        Self {
            tick: 0,
            tick_rate,
            duration_secs,
        }
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.tick as f64 / self.tick_rate as f64
    }

    /// Seconds left on the level countdown, floored at zero.
    pub fn remaining_secs(&self) -> f64 {
        (self.duration_secs - self.elapsed_secs()).max(0.0)
    }

    /// Fraction of the level duration already elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs() / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs() <= 0.0
    }
}
