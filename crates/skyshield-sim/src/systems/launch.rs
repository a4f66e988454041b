//! Launch command: fire an interceptor from the nearest eligible battery.

use glam::DVec2;
use hecs::Entity;

use skyshield_core::commands::LaunchResult;
use skyshield_core::components::Battery;
use skyshield_core::config::GameConfig;
use skyshield_core::events::SimEvent;
use skyshield_core::types::{EntityId, Position, Velocity};

use crate::score::ScoreState;
use crate::store::EntityStore;

/// Launch toward `target` from the standing, loaded battery nearest to
/// `origin`. Ties go to the lower id. With no such battery nothing is
/// mutated and `NoEligibleBattery` is returned.
pub fn launch_interceptor(
    store: &mut EntityStore,
    config: &GameConfig,
    origin: Position,
    target: Position,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) -> LaunchResult {
    let Some((battery_entity, battery_id, battery_pos)) = nearest_eligible_battery(store, &origin)
    else {
        log::debug!(
            "launch refused: no loaded battery (aim {:.1}, {:.1})",
            target.x,
            target.y
        );
        events.push(SimEvent::LaunchRefused);
        return LaunchResult::NoEligibleBattery;
    };

    if let Ok(mut battery) = store.world().get::<&mut Battery>(battery_entity) {
        battery.ammo -= 1;
    }

    let muzzle = battery_pos.as_vec() - DVec2::new(0.0, config.interceptors.muzzle_offset);
    // Aiming at the muzzle itself fires straight up.
    let direction = (target.as_vec() - muzzle)
        .try_normalize()
        .unwrap_or(DVec2::NEG_Y);
    let velocity = Velocity::from(direction * config.interceptors.speed);

    let interceptor_id =
        store.spawn_interceptor(Position::from(muzzle), target, velocity, battery_id);
    score.interceptors_fired += 1;

    log::debug!(
        "battery {:?} launched interceptor {:?} toward ({:.1}, {:.1})",
        battery_id,
        interceptor_id,
        target.x,
        target.y
    );
    events.push(SimEvent::InterceptorLaunched {
        battery_id,
        interceptor_id,
    });

    LaunchResult::Launched {
        battery_id,
        interceptor_id,
    }
}

fn nearest_eligible_battery(
    store: &EntityStore,
    origin: &Position,
) -> Option<(Entity, EntityId, Position)> {
    let mut best: Option<(f64, EntityId, Entity, Position)> = None;

    for (entity, (id, pos, battery)) in store
        .world()
        .query::<(&EntityId, &Position, &Battery)>()
        .iter()
    {
        if battery.destroyed || battery.ammo == 0 {
            continue;
        }
        let distance = origin.range_to(pos);
        let closer = match best {
            None => true,
            Some((best_distance, best_id, _, _)) => {
                distance < best_distance || (distance == best_distance && *id < best_id)
            }
        };
        if closer {
            best = Some((distance, *id, entity, *pos));
        }
    }

    best.map(|(_, id, entity, pos)| (entity, id, pos))
}
