//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs world for one level, runs systems once per tick, and
//! produces GameStateSnapshots for whatever host renders them.

pub mod campaign;
pub mod engine;
pub mod input;
pub mod level;
pub mod score;
pub mod store;
pub mod systems;

pub use campaign::Campaign;
pub use engine::{SimConfig, SimulationEngine};
pub use skyshield_core as core;

#[cfg(test)]
mod proptest_invariants;
