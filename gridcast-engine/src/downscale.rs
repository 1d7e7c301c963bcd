//! Multi-year orchestrator.
//!
//! Years run strictly in sequence: each year's trials read the year-start
//! capacity snapshot, and capacity/total-load state is mutated only at the
//! single commit point between years. Trials within a year are independent
//! and fan out across the rayon pool; aggregation is a hard join barrier.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use gridcast_core::config::{DownscaleConfig, ProjectionResolution};
use gridcast_core::errors::DownscaleError;
use gridcast_core::types::{LoadSchedule, SiteTable, SiteYearState, YearSnapshot};

use crate::aggregate::calibrate;
use crate::allocate::allocate_trial;
use crate::output::LoadTable;
use crate::sampler::{sample_order, trial_seed};
use crate::weights::eligible_set;

/// Downscaling engine configured for one run.
pub struct Downscaler {
    config: DownscaleConfig,
}

/// Ordered sequence of per-year snapshots produced by a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct DownscaleResult {
    snapshots: Vec<YearSnapshot>,
}

impl DownscaleResult {
    /// Snapshots in year order, baseline year first.
    pub fn snapshots(&self) -> &[YearSnapshot] {
        &self.snapshots
    }

    /// Flatten into a `(site_id, year)`-keyed output table.
    pub fn table(&self) -> LoadTable {
        LoadTable::from_snapshots(&self.snapshots)
    }
}

impl Downscaler {
    /// Create a downscaler, validating the config.
    pub fn new(config: DownscaleConfig) -> Result<Self, DownscaleError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The run's configuration.
    pub fn config(&self) -> &DownscaleConfig {
        &self.config
    }

    /// Run the full multi-year downscale.
    ///
    /// Processes projection years in ascending order, carrying forward
    /// depleted capacity and cumulative load. Any fatal error aborts the
    /// run with no partial output.
    pub fn run(
        &self,
        sites: &SiteTable,
        schedule: &LoadSchedule,
    ) -> Result<DownscaleResult, DownscaleError> {
        if self.config.projection_resolution == ProjectionResolution::Regional {
            return Err(gridcast_core::errors::ConfigError::UnsupportedResolution {
                resolution: ProjectionResolution::Regional.name().to_string(),
            }
            .into());
        }

        let eligible = eligible_set(sites, self.config.priority_exponent)?;
        info!(
            sites = sites.len(),
            eligible = eligible.len(),
            years = schedule.len(),
            trials_per_year = self.config.n_trials,
            "starting downscale run"
        );

        let mut total_load: Vec<f64> = sites.records().iter().map(|r| r.baseline_load).collect();
        let mut capacity: Vec<f64> = sites
            .records()
            .iter()
            .map(|r| r.developable_capacity)
            .collect();

        let mut snapshots = Vec::with_capacity(schedule.len() + 1);
        snapshots.push(snapshot(
            schedule.baseline_year(),
            sites,
            &vec![0.0; sites.len()],
            &total_load,
            &capacity,
        ));

        for proj in schedule.projections() {
            let year = proj.year;
            let target = proj.target;
            info!(year, target, "downscaling year");

            // Year-start capacity snapshot, read-only for every trial.
            let eligible_capacity: Vec<f64> =
                eligible.indices.iter().map(|&idx| capacity[idx]).collect();

            let trials: Vec<Vec<f64>> = (0..self.config.n_trials)
                .into_par_iter()
                .map(|trial| {
                    let seed = trial_seed(self.config.base_seed, year, trial);
                    let order = sample_order(&eligible.weights, seed);
                    allocate_trial(
                        &order,
                        &eligible_capacity,
                        target,
                        self.config.tolerance,
                        year,
                        trial,
                    )
                })
                .collect::<Result<_, _>>()?;
            debug!(year, trials = trials.len(), "trials complete");

            let calibrated = calibrate(&trials, target, self.config.tolerance, year)?;

            // Commit: the only point where capacity and total load mutate.
            let mut new_load = vec![0.0; sites.len()];
            for (pos, &site_idx) in eligible.indices.iter().enumerate() {
                let alloc = calibrated[pos];
                if alloc < -self.config.tolerance {
                    return Err(DownscaleError::NegativeAllocation {
                        site_id: sites.records()[site_idx].site_id.inner(),
                        year,
                        value: alloc,
                    });
                }
                let remaining = capacity[site_idx] - alloc;
                if remaining < -self.config.tolerance {
                    // Calibration can overshoot a site's remaining capacity
                    // slightly; a soft guarantee, not a hard constraint.
                    warn!(
                        site_id = sites.records()[site_idx].site_id.inner(),
                        year,
                        allocation = alloc,
                        capacity = capacity[site_idx],
                        "calibrated allocation exceeds remaining capacity"
                    );
                }
                new_load[site_idx] = alloc;
                total_load[site_idx] += alloc;
                capacity[site_idx] = remaining.max(0.0);
            }

            snapshots.push(snapshot(year, sites, &new_load, &total_load, &capacity));
        }

        info!(snapshots = snapshots.len(), "downscale run complete");
        Ok(DownscaleResult { snapshots })
    }
}

fn snapshot(
    year: i32,
    sites: &SiteTable,
    new_load: &[f64],
    total_load: &[f64],
    capacity: &[f64],
) -> YearSnapshot {
    let states = sites
        .records()
        .iter()
        .enumerate()
        .map(|(idx, rec)| SiteYearState {
            site_id: rec.site_id,
            new_load: new_load[idx],
            total_load: total_load[idx],
            developable_capacity: capacity[idx],
        })
        .collect();
    YearSnapshot { year, sites: states }
}
