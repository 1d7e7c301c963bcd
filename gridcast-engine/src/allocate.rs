//! Greedy allocator: fills capacity along a sampled order until a year's
//! target is met.

use gridcast_core::errors::DownscaleError;

use crate::numeric::approx_eq;

/// Allocate one trial's target along `order`.
///
/// Walks the order accumulating remaining capacities. Sites before the
/// terminal position take their full remaining capacity, the terminal site
/// takes the exact remainder needed to reach the target, and later sites
/// take zero. A target exactly equal to the aggregate remaining capacity is
/// feasible: the final site takes its full capacity.
///
/// Feasibility is checked explicitly before the walk — a boolean search for
/// the terminal index cannot distinguish "first site exceeds the target"
/// from "no site ever does".
///
/// `year` and `trial` are error context only.
pub fn allocate_trial(
    order: &[usize],
    capacities: &[f64],
    target: f64,
    tolerance: f64,
    year: i32,
    trial: u32,
) -> Result<Vec<f64>, DownscaleError> {
    let mut allocation = vec![0.0; capacities.len()];

    if target <= tolerance {
        return Ok(allocation);
    }

    let available: f64 = order.iter().map(|&idx| capacities[idx]).sum();
    if available < target - tolerance {
        return Err(DownscaleError::InsufficientCapacity {
            year,
            target,
            available,
        });
    }

    let mut filled = 0.0;
    for &idx in order {
        let capacity = capacities[idx];
        if filled + capacity >= target {
            allocation[idx] = target - filled;
            filled = target;
            break;
        }
        allocation[idx] = capacity;
        filled += capacity;
    }

    let sum: f64 = allocation.iter().sum();
    if !approx_eq(sum, target, tolerance) {
        return Err(DownscaleError::TrialSumMismatch {
            year,
            trial,
            expected: target,
            actual: sum,
        });
    }

    Ok(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn first_site_takes_whole_target_when_it_fits() {
        let alloc = allocate_trial(&[1, 0, 2], &[10.0, 10.0, 10.0], 5.0, TOL, 2030, 0).unwrap();
        assert_eq!(alloc, vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn remainder_falls_on_the_terminal_site() {
        let alloc = allocate_trial(&[0, 1, 2], &[3.0, 3.0, 3.0], 7.0, TOL, 2030, 0).unwrap();
        assert_eq!(alloc, vec![3.0, 3.0, 1.0]);
    }

    #[test]
    fn target_equal_to_total_capacity_is_feasible() {
        let alloc = allocate_trial(&[0], &[10.0], 10.0, TOL, 2030, 0).unwrap();
        assert_eq!(alloc, vec![10.0]);
    }

    #[test]
    fn target_beyond_total_capacity_is_infeasible() {
        let err = allocate_trial(&[0], &[10.0], 10.0001, TOL, 2030, 3).unwrap_err();
        match err {
            DownscaleError::InsufficientCapacity {
                year,
                target,
                available,
            } => {
                assert_eq!(year, 2030);
                assert_eq!(target, 10.0001);
                assert_eq!(available, 10.0);
            }
            other => panic!("expected InsufficientCapacity, got {other}"),
        }
    }

    #[test]
    fn zero_target_allocates_nothing() {
        let alloc = allocate_trial(&[0, 1], &[10.0, 10.0], 0.0, TOL, 2030, 0).unwrap();
        assert_eq!(alloc, vec![0.0, 0.0]);
    }

    #[test]
    fn depleted_sites_contribute_zero_and_pass_through() {
        let alloc = allocate_trial(&[0, 1, 2], &[0.0, 0.0, 8.0], 5.0, TOL, 2030, 0).unwrap();
        assert_eq!(alloc, vec![0.0, 0.0, 5.0]);
    }

    #[test]
    fn trial_sum_matches_target() {
        let capacities = [2.5, 0.1, 7.75, 4.0, 0.0, 3.25];
        let order = [5, 2, 0, 4, 1, 3];
        let target = 11.3;
        let alloc = allocate_trial(&order, &capacities, target, TOL, 2030, 0).unwrap();
        let sum: f64 = alloc.iter().sum();
        assert!((sum - target).abs() <= TOL);
    }
}
