//! Configuration surface for downscaling runs.

pub mod downscale_config;

pub use downscale_config::{DownscaleConfig, OutputValues, ProjectionResolution};
