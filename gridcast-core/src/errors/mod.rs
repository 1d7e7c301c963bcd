//! Error taxonomy for gridcast.
//!
//! Three per-concern enums, all fatal: a run either completes every year or
//! aborts on the first error with no partial output.

pub mod config_error;
pub mod downscale_error;
pub mod input_error;

pub use config_error::ConfigError;
pub use downscale_error::DownscaleError;
pub use input_error::InputError;
