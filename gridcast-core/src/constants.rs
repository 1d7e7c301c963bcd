//! Engine-wide default values.

/// Exponent applied to site priority scores when deriving sampling weights.
pub const DEFAULT_PRIORITY_EXPONENT: f64 = 3.0;

/// Monte Carlo trials per projection year.
pub const DEFAULT_N_TRIALS: u32 = 10_000;

/// Base seed for the run-scoped trial seed derivation.
pub const DEFAULT_BASE_SEED: u64 = 0;

/// Absolute/relative tolerance for the trial-sum and calibration checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Tolerance for the sum-to-one check on region apportionment weights.
pub const REGION_WEIGHT_TOLERANCE: f64 = 1e-10;
