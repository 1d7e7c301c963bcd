//! A priori regional apportionment of aggregate load projections.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use gridcast_core::constants::REGION_WEIGHT_TOLERANCE;
use gridcast_core::errors::InputError;
use gridcast_core::types::LoadSchedule;

/// One region's share of a year's aggregate target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalLoad {
    pub year: i32,
    pub region: String,
    pub value: f64,
}

/// Apportion each year's aggregate target across named regions by a priori
/// weights.
///
/// Weights must each be finite and in `(0, 1]`, and must sum to 1 within
/// tolerance. Output rows are year-major with regions in input order. This
/// feeds reporting only; it does not drive the (unsupported) regional
/// downscale path.
pub fn apportion_to_regions(
    schedule: &LoadSchedule,
    region_weights: &[(String, f64)],
) -> Result<Vec<RegionalLoad>, InputError> {
    if region_weights.is_empty() {
        return Err(InputError::EmptyRegionWeights);
    }

    let mut seen = FxHashSet::default();
    for (region, weight) in region_weights {
        if !seen.insert(region.as_str()) {
            return Err(InputError::DuplicateRegion {
                region: region.clone(),
            });
        }
        if !weight.is_finite() || *weight <= 0.0 || *weight > 1.0 {
            return Err(InputError::InvalidRegionWeight {
                region: region.clone(),
                value: *weight,
            });
        }
    }

    let sum: f64 = region_weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > REGION_WEIGHT_TOLERANCE {
        return Err(InputError::RegionWeightSum { sum });
    }

    let mut rows = Vec::with_capacity(schedule.len() * region_weights.len());
    for proj in schedule.projections() {
        for (region, weight) in region_weights {
            rows.push(RegionalLoad {
                year: proj.year,
                region: region.clone(),
                value: proj.target * weight,
            });
        }
    }

    Ok(rows)
}
