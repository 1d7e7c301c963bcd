//! Output table assembly: snapshots flattened to `(site_id, year)` rows.

use serde::{Deserialize, Serialize};

use gridcast_core::config::OutputValues;
use gridcast_core::types::{SiteId, YearSnapshot};

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRow {
    pub site_id: SiteId,
    pub year: i32,
    /// Load placed in this year (zero at the baseline year).
    pub new_load: f64,
    /// Cumulative load including the baseline load.
    pub total_load: f64,
}

/// Flattened run output, one row per site per recorded year, suitable for
/// joining back onto the spatial grid downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTable {
    rows: Vec<LoadRow>,
}

impl LoadTable {
    /// Flatten snapshots in year order, sites in table order within a year.
    pub fn from_snapshots(snapshots: &[YearSnapshot]) -> Self {
        let rows = snapshots
            .iter()
            .flat_map(|snap| {
                snap.sites.iter().map(|state| LoadRow {
                    site_id: state.site_id,
                    year: snap.year,
                    new_load: state.new_load,
                    total_load: state.total_load,
                })
            })
            .collect();
        Self { rows }
    }

    /// All rows.
    pub fn rows(&self) -> &[LoadRow] {
        &self.rows
    }

    /// The configured value column: per-year increments or cumulative
    /// totals. Both columns are always materialized on the rows; this only
    /// selects the exported one.
    pub fn values(&self, output: OutputValues) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| match output {
                OutputValues::Incremental => row.new_load,
                OutputValues::Cumulative => row.total_load,
            })
            .collect()
    }
}
