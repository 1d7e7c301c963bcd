//! Small numeric helpers shared across the engine.

/// Combined absolute/relative closeness check against an expected value.
pub(crate) fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance.max(tolerance * expected.abs())
}
