//! Kinematic integration system.
//!
//! Rockets step toward their fixed target at constant speed; interceptors
//! add their launch-time velocity. No acceleration, no drag.

use skyshield_core::components::{Interceptor, Rocket};
use skyshield_core::types::{Position, Velocity};

use crate::store::EntityStore;

/// Advance every live rocket and interceptor by one tick.
pub fn run(store: &mut EntityStore) {
    let world = store.world_mut();

    for (_entity, (pos, rocket)) in world.query_mut::<(&mut Position, &Rocket)>() {
        if rocket.destroyed {
            continue;
        }
        // Direction is recomputed from the current position every tick.
        let to_target = rocket.target.as_vec() - pos.as_vec();
        let step = to_target.normalize_or_zero() * rocket.speed;
        *pos = Position::from(pos.as_vec() + step);
    }

    for (_entity, (pos, vel, interceptor)) in
        world.query_mut::<(&mut Position, &Velocity, &Interceptor)>()
    {
        if interceptor.exploded {
            continue;
        }
        *pos = Position::from(pos.as_vec() + vel.as_vec());
    }
}
