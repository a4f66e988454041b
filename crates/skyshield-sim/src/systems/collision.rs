//! Collision resolution, run after kinematics in a fixed order:
//!
//! 1. Rocket impact: a rocket closer to its target than one tick of travel
//!    has arrived. It blows up and damages the structure it was aimed at.
//! 2. Interceptor proximity: an interceptor within 3x the rocket collision
//!    radius of a rocket destroys it and leaves an enlarged explosion.
//! 3. Blast radius: any rocket inside an explosion's *current* radius dies
//!    and sets off a standard explosion of its own.
//! 4. Interceptors outside the field (plus margin) are discarded, no blast.
//!
//! The `destroyed` / `exploded` flags keep every rocket and interceptor to a
//! single kill per tick. Cleanup removes flagged entities afterwards.

use hecs::Entity;

use skyshield_core::components::{Battery, City, Explosion, Interceptor, Rocket};
use skyshield_core::config::GameConfig;
use skyshield_core::enums::{BlastSource, ExplosionPhase};
use skyshield_core::events::SimEvent;
use skyshield_core::types::{EntityId, Position};

use crate::score::ScoreState;
use crate::store::EntityStore;
use crate::systems::explosion;

/// Run all collision passes for one tick.
pub fn run(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    resolve_impacts(store, config, score, events);
    resolve_intercepts(store, config, score, events);
    resolve_blasts(store, config, score, events);
    mark_out_of_bounds(store, config);
}

/// Pass 1: rockets arriving at their target this tick.
pub fn resolve_impacts(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    let mut impacts: Vec<(EntityId, Position, Position)> = Vec::new();

    for (_entity, (id, pos, rocket)) in store
        .world_mut()
        .query_mut::<(&EntityId, &Position, &mut Rocket)>()
    {
        if rocket.destroyed {
            continue;
        }
        // Strict: a rocket exactly one step away moves onto the target and
        // lands at distance 0 on that tick.
        if pos.range_to(&rocket.target) < rocket.speed {
            rocket.destroyed = true;
            impacts.push((*id, *pos, rocket.target));
        }
    }
    impacts.sort_by_key(|(id, _, _)| *id);

    for (rocket_id, position, target) in impacts {
        score.rockets_impacted += 1;
        log::debug!("rocket {:?} impacted at ({:.1}, {:.1})", rocket_id, position.x, position.y);
        events.push(SimEvent::RocketImpact {
            rocket_id,
            position,
        });
        explosion::spawn_standard(store, config, position, BlastSource::Ground);
        apply_impact_damage(store, config, &target, events);
    }
}

/// Damage whatever structure sits at an impact's target point. Uses the
/// axis-aligned tolerances from the config, not a circular radius.
fn apply_impact_damage(
    store: &mut EntityStore,
    config: &GameConfig,
    target: &Position,
    events: &mut Vec<SimEvent>,
) {
    let world = store.world_mut();
    let city_tolerance = config.batteries.city_hit_tolerance;
    let battery_tolerance = config.batteries.battery_hit_tolerance;

    for (_entity, (id, pos, city)) in world.query_mut::<(&EntityId, &Position, &mut City)>() {
        if !city.destroyed && target.within_box(pos, city_tolerance) {
            city.destroyed = true;
            log::debug!("city {:?} destroyed", id);
            events.push(SimEvent::CityDestroyed { city_id: *id });
        }
    }

    for (_entity, (id, pos, battery)) in world.query_mut::<(&EntityId, &Position, &mut Battery)>()
    {
        if battery.destroyed || !target.within_box(pos, battery_tolerance) {
            continue;
        }
        battery.health = battery.health.saturating_sub(1);
        if battery.health == 0 {
            battery.destroyed = true;
            log::debug!("battery {:?} destroyed", id);
            events.push(SimEvent::BatteryDestroyed { battery_id: *id });
        } else {
            events.push(SimEvent::BatteryDamaged {
                battery_id: *id,
                remaining_health: battery.health,
            });
        }
    }
}

/// Pass 2: interceptors meeting rockets. Each interceptor takes at most one
/// rocket; interceptors are visited in id order, rockets likewise.
pub fn resolve_intercepts(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    let kill_distance = config.rockets.collision_radius * config.rockets.intercept_proximity_factor;

    let mut interceptors: Vec<(EntityId, Entity, Position)> = store
        .world()
        .query::<(&EntityId, &Position, &Interceptor)>()
        .iter()
        .filter(|(_, (_, _, interceptor))| !interceptor.exploded)
        .map(|(entity, (id, pos, _))| (*id, entity, *pos))
        .collect();
    interceptors.sort_by_key(|(id, _, _)| *id);

    let rockets = live_rockets(store);
    let mut taken = vec![false; rockets.len()];
    let mut hits: Vec<(EntityId, Entity, Position, EntityId, Entity)> = Vec::new();

    for (interceptor_id, interceptor_entity, interceptor_pos) in &interceptors {
        let hit = rockets.iter().enumerate().find(|(i, (_, _, rocket_pos))| {
            !taken[*i] && interceptor_pos.range_to(rocket_pos) < kill_distance
        });
        if let Some((i, (rocket_id, rocket_entity, _))) = hit {
            taken[i] = true;
            hits.push((
                *interceptor_id,
                *interceptor_entity,
                *interceptor_pos,
                *rocket_id,
                *rocket_entity,
            ));
        }
    }

    for (interceptor_id, interceptor_entity, position, rocket_id, rocket_entity) in hits {
        {
            let world = store.world();
            if let Ok(mut interceptor) = world.get::<&mut Interceptor>(interceptor_entity) {
                interceptor.exploded = true;
            }
            if let Ok(mut rocket) = world.get::<&mut Rocket>(rocket_entity) {
                rocket.destroyed = true;
            }
        }

        score.rockets_destroyed += 1;
        score.points += config.scoring.points_per_kill;
        events.push(SimEvent::RocketIntercepted {
            rocket_id,
            interceptor_id,
            position,
        });
        explosion::spawn_intercept(store, config, position);
    }
}

/// Pass 3: rockets caught inside an active explosion. Only explosions that
/// existed when the pass started are considered; chains join next tick.
pub fn resolve_blasts(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    let mut blasts: Vec<(EntityId, Position, f64, BlastSource)> = store
        .world()
        .query::<(&EntityId, &Position, &Explosion)>()
        .iter()
        .filter(|(_, (_, _, boom))| boom.phase != ExplosionPhase::Finished && boom.radius > 0.0)
        .map(|(_, (id, pos, boom))| (*id, *pos, boom.radius, boom.source))
        .collect();
    blasts.sort_by_key(|(id, _, _, _)| *id);

    let mut kills: Vec<(EntityId, Entity, Position, EntityId, BlastSource)> = Vec::new();
    for (rocket_id, rocket_entity, rocket_pos) in live_rockets(store) {
        let caught = blasts
            .iter()
            .find(|(_, center, radius, _)| rocket_pos.range_to(center) < *radius);
        if let Some((explosion_id, _, _, source)) = caught {
            kills.push((rocket_id, rocket_entity, rocket_pos, *explosion_id, *source));
        }
    }

    for (rocket_id, rocket_entity, position, explosion_id, source) in kills {
        if let Ok(mut rocket) = store.world().get::<&mut Rocket>(rocket_entity) {
            rocket.destroyed = true;
        }

        score.rockets_destroyed += 1;
        if source.awards_points() {
            score.points += config.scoring.points_per_kill;
        }
        events.push(SimEvent::BlastKill {
            rocket_id,
            explosion_id,
            position,
        });
        explosion::spawn_standard(store, config, position, source);
    }
}

/// Pass 4: flag interceptors that have left the field. No blast.
pub fn mark_out_of_bounds(store: &mut EntityStore, config: &GameConfig) {
    let field = &config.field;
    let margin = field.out_of_bounds_margin;

    for (_entity, (pos, interceptor)) in store
        .world_mut()
        .query_mut::<(&Position, &mut Interceptor)>()
    {
        if pos.x < -margin
            || pos.x > field.width + margin
            || pos.y < -margin
            || pos.y > field.height + margin
        {
            interceptor.exploded = true;
        }
    }
}

/// Live rockets in id order.
fn live_rockets(store: &EntityStore) -> Vec<(EntityId, Entity, Position)> {
    let mut rockets: Vec<(EntityId, Entity, Position)> = store
        .world()
        .query::<(&EntityId, &Position, &Rocket)>()
        .iter()
        .filter(|(_, (_, _, rocket))| !rocket.destroyed)
        .map(|(entity, (id, pos, _))| (*id, entity, *pos))
        .collect();
    rockets.sort_by_key(|(id, _, _)| *id);
    rockets
}
