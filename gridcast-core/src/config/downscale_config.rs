//! Downscale run configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_BASE_SEED, DEFAULT_N_TRIALS, DEFAULT_PRIORITY_EXPONENT, DEFAULT_TOLERANCE,
};
use crate::errors::ConfigError;

/// Spatial resolution of the input load projections.
///
/// Only `Total` is executable; `Regional` parses for config compatibility
/// but is rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ProjectionResolution {
    Total,
    Regional,
}

impl ProjectionResolution {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Regional => "regional",
        }
    }
}

impl FromStr for ProjectionResolution {
    type Err = ConfigError;

    // Case-insensitive, matching the original config surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "total" => Ok(Self::Total),
            "regional" => Ok(Self::Regional),
            other => Err(ConfigError::InvalidValue {
                field: "projection_resolution".to_string(),
                message: format!("'{other}' is not one of: total, regional"),
            }),
        }
    }
}

impl TryFrom<String> for ProjectionResolution {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ProjectionResolution> for String {
    fn from(value: ProjectionResolution) -> Self {
        value.name().to_string()
    }
}

impl std::fmt::Display for ProjectionResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which column the compact value export reports.
///
/// Snapshots always materialize both the per-year increment and the
/// cumulative total; this only selects the exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OutputValues {
    Incremental,
    Cumulative,
}

impl OutputValues {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Incremental => "incremental",
            Self::Cumulative => "cumulative",
        }
    }
}

impl FromStr for OutputValues {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "incremental" => Ok(Self::Incremental),
            "cumulative" => Ok(Self::Cumulative),
            other => Err(ConfigError::InvalidValue {
                field: "output_values".to_string(),
                message: format!("'{other}' is not one of: incremental, cumulative"),
            }),
        }
    }
}

impl TryFrom<String> for OutputValues {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OutputValues> for String {
    fn from(value: OutputValues) -> Self {
        value.name().to_string()
    }
}

impl std::fmt::Display for OutputValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a downscaling run.
///
/// Column-name fields map caller-supplied tables onto the engine's data
/// model; the remaining fields are engine tunables. Unknown fields are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DownscaleConfig {
    /// Column holding the unique site key.
    pub grid_site_id: String,
    /// Column holding the site priority score.
    pub grid_priority: String,
    /// Column holding the pre-existing load at the baseline year.
    pub grid_baseline_load: String,
    /// Column holding the developable capacity.
    pub grid_capacity: String,
    /// Year carrying the baseline load, before any allocation.
    pub baseline_year: i32,
    /// Column holding projected load values.
    pub load_value: String,
    /// Column holding projection years.
    pub load_year: String,
    /// Spatial resolution of the projections. Default: total.
    pub projection_resolution: ProjectionResolution,
    /// Exported value column. Default: incremental.
    pub output_values: OutputValues,
    /// Exponent applied to priorities for sampling weights. Default: 3.
    pub priority_exponent: f64,
    /// Monte Carlo trials per year. Default: 10,000.
    pub n_trials: u32,
    /// Base seed for per-trial seed derivation. Default: 0.
    pub base_seed: u64,
    /// Tolerance for the trial-sum and calibration checks. Default: 1e-9.
    pub tolerance: f64,
}

impl Default for DownscaleConfig {
    fn default() -> Self {
        Self {
            grid_site_id: "site_id".to_string(),
            grid_priority: "priority".to_string(),
            grid_baseline_load: "baseline_load".to_string(),
            grid_capacity: "developable_capacity".to_string(),
            baseline_year: 0,
            load_value: "load".to_string(),
            load_year: "year".to_string(),
            projection_resolution: ProjectionResolution::Total,
            output_values: OutputValues::Incremental,
            priority_exponent: DEFAULT_PRIORITY_EXPONENT,
            n_trials: DEFAULT_N_TRIALS,
            base_seed: DEFAULT_BASE_SEED,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DownscaleConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded downscale config");
        Ok(config)
    }

    /// Check field constraints. Runs before any simulation work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("grid_site_id", &self.grid_site_id),
            ("grid_priority", &self.grid_priority),
            ("grid_baseline_load", &self.grid_baseline_load),
            ("grid_capacity", &self.grid_capacity),
            ("load_value", &self.load_value),
            ("load_year", &self.load_year),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "column name must not be empty".to_string(),
                });
            }
        }

        if !self.priority_exponent.is_finite() || self.priority_exponent <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "priority_exponent".to_string(),
                message: format!("must be finite and > 0, got {}", self.priority_exponent),
            });
        }

        if self.n_trials == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "n_trials".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "tolerance".to_string(),
                message: format!("must be finite and > 0, got {}", self.tolerance),
            });
        }

        Ok(())
    }
}
