//! Snapshot system: queries the store and builds a complete GameStateSnapshot.
//!
//! Read-only: it never modifies the world. Every list is
//! sorted by id so snapshots are stable for rendering and comparison.

use skyshield_core::components::*;
use skyshield_core::enums::LevelStatus;
use skyshield_core::events::SimEvent;
use skyshield_core::state::*;
use skyshield_core::types::{EntityId, Position, SimClock, Velocity};

use crate::store::EntityStore;

/// Level-wide values that live outside the store.
pub struct SnapshotContext<'a> {
    pub clock: &'a SimClock,
    pub level: u32,
    pub status: LevelStatus,
    pub paused: bool,
    pub score: u64,
    pub rockets_remaining: u32,
}

/// Build a complete GameStateSnapshot from the current store.
pub fn build_snapshot(
    store: &EntityStore,
    ctx: SnapshotContext<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        tick: ctx.clock.tick,
        level: ctx.level,
        status: ctx.status,
        paused: ctx.paused,
        rockets: build_rockets(store),
        interceptors: build_interceptors(store),
        explosions: build_explosions(store),
        batteries: build_batteries(store),
        cities: build_cities(store),
        score: ctx.score,
        rockets_remaining: ctx.rockets_remaining,
        time_remaining_secs: ctx.clock.remaining_secs(),
        events,
    }
}

fn build_rockets(store: &EntityStore) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = store
        .world()
        .query::<(&EntityId, &Position, &Rocket)>()
        .iter()
        .filter(|(_, (_, _, rocket))| !rocket.destroyed)
        .map(|(_, (id, pos, rocket))| RocketView {
            id: *id,
            position: *pos,
            target: rocket.target,
            speed: rocket.speed,
        })
        .collect();

    rockets.sort_by_key(|r| r.id);
    rockets
}

fn build_interceptors(store: &EntityStore) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = store
        .world()
        .query::<(&EntityId, &Position, &Velocity, &Interceptor)>()
        .iter()
        .filter(|(_, (_, _, _, interceptor))| !interceptor.exploded)
        .map(|(_, (id, pos, vel, interceptor))| InterceptorView {
            id: *id,
            position: *pos,
            origin: interceptor.origin,
            target: interceptor.target,
            velocity: *vel,
        })
        .collect();

    interceptors.sort_by_key(|i| i.id);
    interceptors
}

fn build_explosions(store: &EntityStore) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = store
        .world()
        .query::<(&EntityId, &Position, &Explosion)>()
        .iter()
        .map(|(_, (id, pos, boom))| ExplosionView {
            id: *id,
            position: *pos,
            radius: boom.radius,
            max_radius: boom.max_radius,
            phase: boom.phase,
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}

fn build_batteries(store: &EntityStore) -> Vec<BatteryView> {
    let mut batteries: Vec<BatteryView> = store
        .world()
        .query::<(&EntityId, &Position, &Battery)>()
        .iter()
        .map(|(_, (id, pos, battery))| BatteryView {
            id: *id,
            position: *pos,
            ammo: battery.ammo,
            max_ammo: battery.max_ammo,
            health: battery.health,
            max_health: battery.max_health,
            destroyed: battery.destroyed,
        })
        .collect();

    batteries.sort_by_key(|b| b.id);
    batteries
}

fn build_cities(store: &EntityStore) -> Vec<CityView> {
    let mut cities: Vec<CityView> = store
        .world()
        .query::<(&EntityId, &Position, &City)>()
        .iter()
        .map(|(_, (id, pos, city))| CityView {
            id: *id,
            position: *pos,
            destroyed: city.destroyed,
        })
        .collect();

    cities.sort_by_key(|c| c.id);
    cities
}
