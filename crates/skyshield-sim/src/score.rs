//! Running score state tracked by the engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points accumulated, including any carried in from earlier levels.
    pub points: u64,
    /// Rockets destroyed by the defense (intercepts and blasts).
    pub rockets_destroyed: u32,
    /// Rockets that reached their target.
    pub rockets_impacted: u32,
    pub interceptors_fired: u32,
}

impl ScoreState {
    pub fn with_points(points: u64) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }
}
