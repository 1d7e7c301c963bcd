//! Downscaling run errors.

use super::config_error::ConfigError;
use super::input_error::InputError;

/// Errors raised while executing a downscaling run.
///
/// `InsufficientCapacity` is an infeasibility condition raised at the year in
/// which it first occurs. The remaining variants signal internal-consistency
/// violations: an algorithm or numerical-tolerance bug, never swallowed or
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum DownscaleError {
    #[error("Insufficient capacity in year {year}: target {target} exceeds available {available}")]
    InsufficientCapacity {
        year: i32,
        target: f64,
        available: f64,
    },

    #[error("Trial {trial} in year {year} allocated {actual}, expected {expected}")]
    TrialSumMismatch {
        year: i32,
        trial: u32,
        expected: f64,
        actual: f64,
    },

    #[error("Calibrated allocation in year {year} sums to {actual}, expected {expected}")]
    CalibrationMismatch {
        year: i32,
        expected: f64,
        actual: f64,
    },

    #[error("Negative calibrated allocation for site {site_id} in year {year}: {value}")]
    NegativeAllocation { site_id: u32, year: i32, value: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}
