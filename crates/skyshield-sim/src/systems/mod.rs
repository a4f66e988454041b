//! Systems that operate on the entity store each tick.
//!
//! Systems are free functions over `&mut EntityStore` (or `&EntityStore` for
//! read-only work). They do not own state; everything lives in components
//! or is passed in by the engine.

pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod launch;
pub mod movement;
pub mod outcome;
pub mod snapshot;
pub mod spawn_scheduler;
