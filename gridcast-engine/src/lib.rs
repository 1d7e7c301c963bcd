//! Downscaling engine: apportions multi-year aggregate load-growth targets
//! onto discrete grid sites.
//!
//! Per year, the engine runs many Monte Carlo trials in parallel. Each trial
//! draws a weighted random ordering of the eligible sites and greedily fills
//! remaining capacity until the year's target is met. Per-site allocations
//! are aggregated across trials by median, then rescaled so the year's total
//! matches the target exactly. Capacity state carries forward across years;
//! years run strictly in sequence.

pub mod aggregate;
pub mod allocate;
pub mod downscale;
pub mod loader;
mod numeric;
pub mod output;
pub mod regions;
pub mod sampler;
pub mod weights;

pub use downscale::{DownscaleResult, Downscaler};
pub use output::{LoadRow, LoadTable};
pub use regions::{apportion_to_regions, RegionalLoad};
