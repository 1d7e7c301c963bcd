//! Load-growth schedule: one aggregate-demand target per projection year.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// One `(year, target)` row of the load projection table.
///
/// `target` is the increment of aggregate demand to place in that year, not
/// a cumulative total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadProjection {
    pub year: i32,
    pub target: f64,
}

/// Validated, ascending sequence of load projections.
///
/// Years are unique and strictly after the baseline year; targets are finite
/// and non-negative. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSchedule {
    baseline_year: i32,
    projections: Vec<LoadProjection>,
}

impl LoadSchedule {
    /// Validate and build a schedule. Input rows may arrive in any order;
    /// they are sorted ascending by year.
    pub fn new(baseline_year: i32, mut projections: Vec<LoadProjection>) -> Result<Self, InputError> {
        for proj in &projections {
            if !proj.target.is_finite() {
                return Err(InputError::NonFiniteTarget {
                    year: proj.year,
                    value: proj.target,
                });
            }
            if proj.target < 0.0 {
                return Err(InputError::NegativeTarget {
                    year: proj.year,
                    value: proj.target,
                });
            }
            if proj.year <= baseline_year {
                return Err(InputError::YearNotAfterBaseline {
                    year: proj.year,
                    baseline_year,
                });
            }
        }

        projections.sort_by_key(|p| p.year);
        for pair in projections.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(InputError::DuplicateYear { year: pair[0].year });
            }
        }

        Ok(Self {
            baseline_year,
            projections,
        })
    }

    /// The year carrying the pre-existing baseline load.
    pub fn baseline_year(&self) -> i32 {
        self.baseline_year
    }

    /// Projections in ascending year order.
    pub fn projections(&self) -> &[LoadProjection] {
        &self.projections
    }

    /// Number of projection years (excluding the baseline year).
    pub fn len(&self) -> usize {
        self.projections.len()
    }

    /// Whether the schedule has no projection years.
    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}
