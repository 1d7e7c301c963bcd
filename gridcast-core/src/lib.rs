//! Core types, configuration, and error taxonomy for gridcast.
//!
//! gridcast apportions multi-year aggregate load-growth targets onto a fixed
//! population of grid sites. This crate holds everything the engine and its
//! callers share: the site and load-schedule data model, the downscale
//! configuration surface, the error enums, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
