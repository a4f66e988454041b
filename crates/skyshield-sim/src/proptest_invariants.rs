//! Property-based tests for the level configurator and the battery and
//! explosion invariants.

use proptest::prelude::*;

use skyshield_core::components::Explosion;
use skyshield_core::config::GameConfig;
use skyshield_core::enums::{BlastSource, ExplosionPhase};
use skyshield_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::level;
use crate::systems::explosion;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Quota never decreases with level and stays between the endpoints.
    #[test]
    fn prop_quota_monotonic(a in 0u32..200, b in 0u32..200) {
        let config = GameConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let q_lo = level::rocket_quota(&config, lo);
        let q_hi = level::rocket_quota(&config, hi);

        prop_assert!(q_lo <= q_hi, "quota({lo}) = {q_lo} > quota({hi}) = {q_hi}");
        prop_assert!((50..=400).contains(&q_lo));
        prop_assert!((50..=400).contains(&q_hi));
    }

    /// Ammo split always sums to floor(quota * multiplier), outer batteries equal.
    /// The center keeps the largest share while each outer share is at most a third.
    #[test]
    fn prop_allocations_sum(
        quota in 0u32..20_000,
        multiplier in 0.0f64..4.0,
        share in 0.0f64..=0.5,
    ) {
        let mut config = GameConfig::default();
        config.level.ammo_multiplier = multiplier;
        config.level.outer_battery_ammo_share = share;

        let [left, center, right] = level::battery_allocations(&config, quota);
        let expected = (f64::from(quota) * multiplier).floor() as u32;

        prop_assert_eq!(left + center + right, expected);
        prop_assert_eq!(left, right);
        // Past a third the outer batteries out-stock the center.
        if share <= 1.0 / 3.0 {
            prop_assert!(center >= left);
        }
    }

    /// Radius rises to the max, then falls to zero; never outside [0, max].
    #[test]
    fn prop_explosion_unimodal(
        initial in 0.0f64..10.0,
        extra in 1.0f64..150.0,
        growth in 0.1f64..6.0,
        shrink in 0.1f64..1.0,
    ) {
        let max_radius = initial + extra;
        let mut boom = Explosion {
            radius: initial,
            max_radius,
            growth_rate: growth,
            phase: ExplosionPhase::Growing,
            source: BlastSource::Ground,
        };

        let mut peaked = false;
        let mut previous = boom.radius;
        let mut steps = 0u32;
        while boom.phase != ExplosionPhase::Finished {
            explosion::step(&mut boom, shrink);
            steps += 1;
            prop_assert!(steps < 100_000, "explosion never finished");
            prop_assert!(boom.radius >= 0.0 && boom.radius <= max_radius);

            if boom.radius < previous {
                peaked = true;
            } else {
                prop_assert!(!peaked, "radius grew again after shrinking");
            }
            previous = boom.radius;
        }
        prop_assert_eq!(boom.radius, 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Over arbitrary launch sequences: ammo only drops by successful launches,
    /// health stays in range, and a battery is destroyed exactly when its
    /// health is gone.
    #[test]
    fn prop_battery_invariants(
        seed in any::<u64>(),
        aims in prop::collection::vec((0.0f64..800.0, 0.0f64..560.0), 0..80),
    ) {
        let mut engine = SimulationEngine::new(
            GameConfig::default(),
            SimConfig { seed, ..Default::default() },
        );
        let starting_ammo = engine.setup().total_ammo();
        let mut launched = 0u32;
        let mut last_score = 0u64;

        for (x, y) in aims {
            let aim = Position::new(x, y);
            if engine.launch_interceptor(aim, aim).is_ok() {
                launched += 1;
            }
            for _ in 0..10 {
                engine.tick();
            }

            let snap = engine.snapshot();
            let ammo: u32 = snap.batteries.iter().map(|b| b.ammo).sum();
            prop_assert_eq!(ammo, starting_ammo - launched);
            for battery in &snap.batteries {
                prop_assert!(battery.ammo <= battery.max_ammo);
                prop_assert!(battery.health <= battery.max_health);
                prop_assert_eq!(battery.destroyed, battery.health == 0);
            }
            prop_assert!(snap.score >= last_score);
            last_score = snap.score;
        }
    }
}
