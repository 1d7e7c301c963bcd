//! Per-year state snapshots, the run's output collection.

use serde::{Deserialize, Serialize};

use super::site::SiteId;

/// Post-commit state of one site at the end of a recorded year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteYearState {
    pub site_id: SiteId,
    /// Calibrated allocation placed in this year (zero at the baseline year).
    pub new_load: f64,
    /// Cumulative load including the baseline load.
    pub total_load: f64,
    /// Remaining capacity after this year's commit.
    pub developable_capacity: f64,
}

/// Calibrated per-site allocation for one year plus the post-update totals.
///
/// Snapshots are appended monotonically by the orchestrator and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub year: i32,
    /// One entry per site, in site-table order.
    pub sites: Vec<SiteYearState>,
}
