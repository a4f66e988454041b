//! Spawn scheduler: probabilistic rocket spawning tied to the level clock.
//!
//! Expected spawns track the remaining quota over the remaining time, with a
//! weight that ramps from 0.4x to 1.6x so pressure builds toward the end.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::config::GameConfig;
use skyshield_core::events::SimEvent;
use skyshield_core::types::{EntityId, Position, SimClock};

use crate::store::EntityStore;

/// Per-tick spawn probability.
///
/// Once the countdown has run out the scheduler spawns every tick so the
/// quota always drains and the level can still complete.
pub fn spawn_probability(config: &GameConfig, clock: &SimClock, rockets_remaining: u32) -> f64 {
    if rockets_remaining == 0 {
        return 0.0;
    }
    let remaining_secs = clock.remaining_secs();
    if remaining_secs <= 0.0 {
        return 1.0;
    }
    let l = &config.level;
    let base_rate = f64::from(rockets_remaining) / (remaining_secs * f64::from(clock.tick_rate));
    let weight = l.spawn_weight_base + l.spawn_weight_ramp * clock.progress();
    base_rate * weight
}

/// Roll for a spawn this tick. Returns the new rocket's id when one spawned.
///
/// Exactly one uniform sample decides whether to spawn. With no live target
/// the spawn is skipped and the quota kept.
pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    clock: &SimClock,
    rockets_remaining: &mut u32,
    events: &mut Vec<SimEvent>,
) -> Option<EntityId> {
    if *rockets_remaining == 0 {
        return None;
    }

    let probability = spawn_probability(config, clock, *rockets_remaining);
    let roll: f64 = rng.gen();
    if roll >= probability {
        return None;
    }

    let targets = store.live_targets();
    if targets.is_empty() {
        return None;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    let x: f64 = rng.gen_range(0.0..=config.field.width);
    let speed: f64 = rng.gen_range(config.rockets.speed_min..=config.rockets.speed_max);

    let rocket_id = store.spawn_rocket(Position::new(x, 0.0), target, speed);
    *rockets_remaining -= 1;

    log::trace!(
        "rocket {:?} spawned at x={x:.1} toward {:?} {:?} (speed {speed:.2}, {} left)",
        rocket_id,
        target.kind,
        target.id,
        *rockets_remaining
    );
    events.push(SimEvent::RocketSpawned {
        rocket_id,
        target_kind: target.kind,
        target_id: target.id,
    });

    Some(rocket_id)
}
