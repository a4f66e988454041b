//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Status of the level currently being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Rockets are still inbound or still to be spawned.
    #[default]
    Active,
    /// Every city has been destroyed. Terminal.
    Lost,
    /// Quota exhausted and no rocket left alive. Terminal.
    LevelComplete,
}

impl LevelStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LevelStatus::Active)
    }
}

/// Explosion lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionPhase {
    /// Radius grows by `growth_rate` per tick up to `max_radius`.
    #[default]
    Growing,
    /// Radius shrinks by `growth_rate * shrink_factor` per tick down to 0.
    Shrinking,
    /// Radius reached 0 while shrinking. Removed at the end of the tick.
    Finished,
}

/// What set off an explosion. Decides whether the rockets it catches score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastSource {
    /// A rocket reaching its target (or a chain started by one).
    Ground,
    /// An interceptor kill (or a chain started by one).
    Defensive,
}

impl BlastSource {
    pub fn awards_points(self) -> bool {
        matches!(self, BlastSource::Defensive)
    }
}

/// Kind of structure a rocket is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    City,
    Battery,
}

/// Campaign-level progress across levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    #[default]
    InProgress,
    /// The final level was completed.
    Victory,
}
