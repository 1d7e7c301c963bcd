//! Input-shape errors.
//!
//! Raised while constructing the site table, load schedule, or region
//! weights, before any simulation work begins.

/// Errors describing malformed external input tables.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Non-numeric value in column '{column}': {value}")]
    NonNumericValue { column: String, value: String },

    #[error("Site table is empty")]
    EmptyTable,

    #[error("Duplicate site id: {site_id}")]
    DuplicateSiteId { site_id: u32 },

    #[error("Site {site_id} has negative priority: {value}")]
    NegativePriority { site_id: u32, value: f64 },

    #[error("Site {site_id} has negative value in column '{column}': {value}")]
    NegativeValue {
        site_id: u32,
        column: String,
        value: f64,
    },

    #[error("No eligible sites: every site has zero priority")]
    NoEligibleSites,

    #[error("Sampling weight for site {site_id} is not finite (priority {priority}, exponent {exponent})")]
    NonFiniteWeight {
        site_id: u32,
        priority: f64,
        exponent: f64,
    },

    #[error("Duplicate year in load projections: {year}")]
    DuplicateYear { year: i32 },

    #[error("Projection year {year} is not after baseline year {baseline_year}")]
    YearNotAfterBaseline { year: i32, baseline_year: i32 },

    #[error("Load target for year {year} is negative: {value}")]
    NegativeTarget { year: i32, value: f64 },

    #[error("Non-finite load target for year {year}: {value}")]
    NonFiniteTarget { year: i32, value: f64 },

    #[error("No region weights provided")]
    EmptyRegionWeights,

    #[error("Duplicate region: {region}")]
    DuplicateRegion { region: String },

    #[error("Invalid weight for region {region}: {value}")]
    InvalidRegionWeight { region: String, value: f64 },

    #[error("Region weights must sum to 1, got {sum}")]
    RegionWeightSum { sum: f64 },
}
