//! Site table: one row per spatial unit, externally supplied.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Unique site key. Wraps the grid cell id so a site id cannot be confused
/// with an ordinary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u32);

impl SiteId {
    /// Create a new site id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner id.
    pub fn inner(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One externally supplied site row.
///
/// `priority` drives sampling probability only; it is independent of
/// available capacity. `developable_capacity` seeds the engine's running
/// capacity state, which is depleted monotonically across years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// Unique site key.
    pub site_id: SiteId,
    /// Non-negative priority score.
    pub priority: f64,
    /// Pre-existing load at the baseline year.
    pub baseline_load: f64,
    /// Allocatable capacity at run start.
    pub developable_capacity: f64,
}

/// Validated collection of site rows.
///
/// Construction checks the whole table up front so the engine never sees a
/// NaN, a negative priority, or a duplicate key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteTable {
    records: Vec<SiteRecord>,
}

impl SiteTable {
    /// Validate and build a site table.
    pub fn new(records: Vec<SiteRecord>) -> Result<Self, InputError> {
        if records.is_empty() {
            return Err(InputError::EmptyTable);
        }

        let mut seen = FxHashSet::default();
        for rec in &records {
            if !seen.insert(rec.site_id) {
                return Err(InputError::DuplicateSiteId {
                    site_id: rec.site_id.inner(),
                });
            }

            for (column, value) in [
                ("priority", rec.priority),
                ("baseline_load", rec.baseline_load),
                ("developable_capacity", rec.developable_capacity),
            ] {
                if !value.is_finite() {
                    return Err(InputError::NonNumericValue {
                        column: column.to_string(),
                        value: value.to_string(),
                    });
                }
            }

            if rec.priority < 0.0 {
                return Err(InputError::NegativePriority {
                    site_id: rec.site_id.inner(),
                    value: rec.priority,
                });
            }
            for (column, value) in [
                ("baseline_load", rec.baseline_load),
                ("developable_capacity", rec.developable_capacity),
            ] {
                if value < 0.0 {
                    return Err(InputError::NegativeValue {
                        site_id: rec.site_id.inner(),
                        column: column.to_string(),
                        value,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// All rows, in input order.
    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows. Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
