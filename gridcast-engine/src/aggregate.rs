//! Trial aggregator: median across trials, then exact calibration.

use gridcast_core::errors::DownscaleError;

use crate::numeric::approx_eq;

/// Collapse per-trial allocations into one calibrated allocation vector.
///
/// Per site, takes the median across trials (median, not mean — each trial
/// has a single skewed "remainder" site). Each trial sums exactly to the
/// target, but the per-site median breaks that property, so medians are
/// rescaled by proportion to hit the target exactly. If every median is
/// zero (a zero-target year), every calibrated allocation is zero.
pub fn calibrate(
    trials: &[Vec<f64>],
    target: f64,
    tolerance: f64,
    year: i32,
) -> Result<Vec<f64>, DownscaleError> {
    let n_sites = trials.first().map_or(0, Vec::len);
    let mut medians = vec![0.0; n_sites];
    let mut column = vec![0.0; trials.len()];

    for site in 0..n_sites {
        for (t, trial) in trials.iter().enumerate() {
            column[t] = trial[site];
        }
        medians[site] = median_in_place(&mut column);
    }

    let median_sum: f64 = medians.iter().sum();
    let calibrated: Vec<f64> = if median_sum <= 0.0 {
        vec![0.0; n_sites]
    } else {
        medians.iter().map(|m| m / median_sum * target).collect()
    };

    let sum: f64 = calibrated.iter().sum();
    if !approx_eq(sum, target, tolerance) {
        return Err(DownscaleError::CalibrationMismatch {
            year,
            expected: target,
            actual: sum,
        });
    }

    Ok(calibrated)
}

/// Median of a slice; even counts average the two middle order statistics.
fn median_in_place(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        0.5 * (values[n / 2 - 1] + values[n / 2])
    }
}
