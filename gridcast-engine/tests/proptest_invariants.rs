//! Property tests for the allocation laws: trial sums, calibration sums,
//! permutation sampling, and multi-year capacity depletion.

use proptest::prelude::*;

use gridcast_core::config::DownscaleConfig;
use gridcast_core::types::{LoadProjection, LoadSchedule, SiteId, SiteRecord, SiteTable};
use gridcast_engine::aggregate::calibrate;
use gridcast_engine::allocate::allocate_trial;
use gridcast_engine::sampler::{sample_order, trial_seed};
use gridcast_engine::Downscaler;

const TOL: f64 = 1e-9;

fn sum_tol(target: f64) -> f64 {
    TOL.max(TOL * target.abs())
}

/// Capacities with a target guaranteed feasible (a fraction of the total).
fn feasible_case() -> impl Strategy<Value = (Vec<f64>, f64)> {
    (
        prop::collection::vec(0.1f64..100.0, 1..20),
        0.0f64..0.95,
    )
        .prop_map(|(capacities, fraction)| {
            let total: f64 = capacities.iter().sum();
            (capacities, total * fraction)
        })
}

proptest! {
    #[test]
    fn trial_allocations_sum_to_the_target(
        (capacities, target) in feasible_case(),
        seed in any::<u64>(),
    ) {
        let order = sample_order(&vec![1.0; capacities.len()], seed);
        let alloc = allocate_trial(&order, &capacities, target, TOL, 2025, 0).unwrap();

        let sum: f64 = alloc.iter().sum();
        prop_assert!((sum - target).abs() <= sum_tol(target));
        for (a, cap) in alloc.iter().zip(&capacities) {
            prop_assert!(*a >= 0.0);
            prop_assert!(*a <= cap + TOL);
        }
    }

    #[test]
    fn calibrated_allocations_sum_to_the_target(
        (capacities, target) in feasible_case(),
        n_trials in 1u32..30,
        base_seed in any::<u64>(),
    ) {
        let weights = vec![1.0; capacities.len()];
        let trials: Vec<Vec<f64>> = (0..n_trials)
            .map(|trial| {
                let order = sample_order(&weights, trial_seed(base_seed, 2025, trial));
                allocate_trial(&order, &capacities, target, TOL, 2025, trial).unwrap()
            })
            .collect();

        let calibrated = calibrate(&trials, target, TOL, 2025).unwrap();

        let sum: f64 = calibrated.iter().sum();
        prop_assert!((sum - target).abs() <= sum_tol(target));
        for value in &calibrated {
            prop_assert!(*value >= 0.0, "calibrated allocation went negative: {value}");
        }
    }

    #[test]
    fn sampled_order_is_always_a_permutation(
        weights in prop::collection::vec(0.001f64..1000.0, 1..50),
        seed in any::<u64>(),
    ) {
        let order = sample_order(&weights, seed);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..weights.len()).collect::<Vec<_>>());
    }

    #[test]
    fn multi_year_runs_only_deplete_capacity(
        capacities in prop::collection::vec(1.0f64..50.0, 2..8),
        fractions in prop::collection::vec(0.05f64..0.25, 1..4),
        base_seed in any::<u64>(),
    ) {
        let sites: Vec<SiteRecord> = capacities
            .iter()
            .enumerate()
            .map(|(idx, &capacity)| SiteRecord {
                site_id: SiteId::new(idx as u32),
                priority: 1.0 + idx as f64,
                baseline_load: 0.0,
                developable_capacity: capacity,
            })
            .collect();
        let table = SiteTable::new(sites).unwrap();

        // Each year's target is a small share of total capacity; the shares
        // sum below 1 so every year stays feasible.
        let total: f64 = capacities.iter().sum();
        let projections = fractions
            .iter()
            .enumerate()
            .map(|(idx, &fraction)| LoadProjection {
                year: 2025 + idx as i32,
                target: total * fraction,
            })
            .collect();
        let schedule = LoadSchedule::new(2020, projections).unwrap();

        let config = DownscaleConfig {
            baseline_year: 2020,
            n_trials: 20,
            base_seed,
            ..Default::default()
        };
        let result = Downscaler::new(config).unwrap().run(&table, &schedule).unwrap();

        for (target, snap) in fractions
            .iter()
            .map(|&f| total * f)
            .zip(&result.snapshots()[1..])
        {
            let sum: f64 = snap.sites.iter().map(|s| s.new_load).sum();
            prop_assert!((sum - target).abs() <= sum_tol(target));
        }
        for pair in result.snapshots().windows(2) {
            for (before, after) in pair[0].sites.iter().zip(&pair[1].sites) {
                prop_assert!(after.developable_capacity <= before.developable_capacity + TOL);
                prop_assert!(after.developable_capacity >= 0.0);
                prop_assert!(after.total_load + TOL >= before.total_load);
            }
        }
    }
}
