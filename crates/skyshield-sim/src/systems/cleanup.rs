//! Cleanup system: removes destroyed rockets, exploded interceptors and
//! finished explosions at the end of the tick that flagged them.
//!
//! Batteries and cities stay in the store for the whole level; their
//! `destroyed` flag is part of the rendered state.

use skyshield_core::components::{Explosion, Interceptor, Rocket};
use skyshield_core::enums::ExplosionPhase;

use crate::store::EntityStore;

/// Despawn every flagged transient entity.
/// Uses the store's pre-allocated buffer to avoid per-tick allocation.
pub fn run(store: &mut EntityStore) {
    let (world, despawn_buffer) = store.world_and_buffer();
    despawn_buffer.clear();

    for (entity, rocket) in world.query_mut::<&Rocket>() {
        if rocket.destroyed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, interceptor) in world.query_mut::<&Interceptor>() {
        if interceptor.exploded {
            despawn_buffer.push(entity);
        }
    }

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.phase == ExplosionPhase::Finished {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
