//! Weighting stage: converts priority scores into sampling weights.

use gridcast_core::errors::InputError;
use gridcast_core::types::SiteTable;

/// The eligible-site subset with its sampling weights.
///
/// `indices` point into the site table; `weights` are aligned with
/// `indices`. Fixed once at run start — a site drawn after its capacity
/// depletes simply contributes zero allocation.
#[derive(Debug, Clone)]
pub struct EligibleSet {
    /// Positions of eligible sites within the site table.
    pub indices: Vec<usize>,
    /// `priority^exponent` per eligible site.
    pub weights: Vec<f64>,
}

impl EligibleSet {
    /// Number of eligible sites.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set is empty. Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Build the eligible set for a run.
///
/// Sites with zero priority are excluded from sampling and from receiving
/// allocation for the whole run; negative priorities are rejected earlier by
/// `SiteTable`.
pub fn eligible_set(sites: &SiteTable, exponent: f64) -> Result<EligibleSet, InputError> {
    let mut indices = Vec::new();
    let mut weights = Vec::new();

    for (idx, rec) in sites.records().iter().enumerate() {
        if rec.priority > 0.0 {
            let weight = rec.priority.powf(exponent);
            if !weight.is_finite() || weight <= 0.0 {
                return Err(InputError::NonFiniteWeight {
                    site_id: rec.site_id.inner(),
                    priority: rec.priority,
                    exponent,
                });
            }
            indices.push(idx);
            weights.push(weight);
        }
    }

    if indices.is_empty() {
        return Err(InputError::NoEligibleSites);
    }

    Ok(EligibleSet { indices, weights })
}
