//! Win/loss evaluation after all mutations of a tick.

use skyshield_core::enums::LevelStatus;

use crate::store::EntityStore;

/// Status the level is in after this tick. Losing every city takes priority
/// over an exhausted quota.
pub fn evaluate(store: &EntityStore, rockets_remaining: u32) -> LevelStatus {
    if store.cities_standing() == 0 {
        return LevelStatus::Lost;
    }
    if rockets_remaining == 0 && store.live_rocket_count() == 0 {
        return LevelStatus::LevelComplete;
    }
    LevelStatus::Active
}
