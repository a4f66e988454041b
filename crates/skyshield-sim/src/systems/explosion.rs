//! Explosion lifecycle: grow to max radius, then shrink at a reduced rate.
//!
//! Growing: radius += growth_rate until it reaches max_radius.
//! Shrinking: radius -= growth_rate * shrink_factor until it reaches 0.
//! Finished: terminal, removed by cleanup in the same tick.

use skyshield_core::components::Explosion;
use skyshield_core::config::GameConfig;
use skyshield_core::enums::{BlastSource, ExplosionPhase};
use skyshield_core::types::{EntityId, Position};

use crate::store::EntityStore;

/// Advance a single explosion by one tick.
pub fn step(explosion: &mut Explosion, shrink_factor: f64) {
    match explosion.phase {
        ExplosionPhase::Growing => {
            explosion.radius = (explosion.radius + explosion.growth_rate).min(explosion.max_radius);
            if explosion.radius >= explosion.max_radius {
                explosion.phase = ExplosionPhase::Shrinking;
            }
        }
        ExplosionPhase::Shrinking => {
            explosion.radius -= explosion.growth_rate * shrink_factor;
            if explosion.radius <= 0.0 {
                explosion.radius = 0.0;
                explosion.phase = ExplosionPhase::Finished;
            }
        }
        ExplosionPhase::Finished => {}
    }
}

/// Advance every explosion in the store.
pub fn run(store: &mut EntityStore, config: &GameConfig) {
    let shrink_factor = config.explosions.shrink_factor;
    for (_entity, explosion) in store.world_mut().query_mut::<&mut Explosion>() {
        step(explosion, shrink_factor);
    }
}

/// Spawn a standard explosion (rocket impact or chain kill).
pub fn spawn_standard(
    store: &mut EntityStore,
    config: &GameConfig,
    position: Position,
    source: BlastSource,
) -> EntityId {
    let e = &config.explosions;
    store.spawn_explosion(position, e.initial_radius, e.max_radius, e.growth_rate, source)
}

/// Spawn the enlarged explosion left by an interceptor kill.
pub fn spawn_intercept(store: &mut EntityStore, config: &GameConfig, position: Position) -> EntityId {
    let e = &config.explosions;
    store.spawn_explosion(
        position,
        e.initial_radius,
        e.max_radius * e.intercept_radius_factor,
        e.growth_rate * e.intercept_growth_factor,
        BlastSource::Defensive,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Explosion {
        Explosion {
            radius: 2.0,
            max_radius: 40.0,
            growth_rate: 1.5,
            phase: ExplosionPhase::Growing,
            source: BlastSource::Ground,
        }
    }

    #[test]
    fn standard_explosion_timing() {
        let mut boom = standard();

        let grow_ticks = ((40.0_f64 - 2.0) / 1.5).ceil() as u32;
        for tick in 1..=grow_ticks {
            step(&mut boom, 0.5);
            if tick < grow_ticks {
                assert_eq!(boom.phase, ExplosionPhase::Growing, "tick {tick}");
                assert!(boom.radius < 40.0);
            }
        }
        assert_eq!(boom.radius, 40.0);
        assert_eq!(boom.phase, ExplosionPhase::Shrinking);

        let shrink_ticks = (40.0_f64 / 0.75).ceil() as u32;
        for tick in 1..=shrink_ticks {
            step(&mut boom, 0.5);
            if tick < shrink_ticks {
                assert_eq!(boom.phase, ExplosionPhase::Shrinking, "tick {tick}");
                assert!(boom.radius > 0.0);
            }
        }
        assert_eq!(boom.radius, 0.0);
        assert_eq!(boom.phase, ExplosionPhase::Finished);
    }

    #[test]
    fn finished_is_terminal() {
        let mut boom = standard();
        boom.phase = ExplosionPhase::Finished;
        boom.radius = 0.0;
        step(&mut boom, 0.5);
        assert_eq!(boom.phase, ExplosionPhase::Finished);
        assert_eq!(boom.radius, 0.0);
    }

    #[test]
    fn intercept_explosion_is_enlarged() {
        let config = GameConfig::default();
        let mut store = EntityStore::new();
        spawn_intercept(&mut store, &config, Position::new(10.0, 10.0));
        let mut q = store.world().query::<&Explosion>();
        let (_, boom) = q.iter().next().unwrap();
        assert_eq!(boom.max_radius, 120.0);
        assert_eq!(boom.growth_rate, 3.0);
        assert_eq!(boom.source, BlastSource::Defensive);
    }
}
