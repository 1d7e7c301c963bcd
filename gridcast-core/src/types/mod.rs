//! Shared data model: sites, load schedules, and per-year snapshots.

pub mod schedule;
pub mod site;
pub mod snapshot;

pub use schedule::{LoadProjection, LoadSchedule};
pub use site::{SiteId, SiteRecord, SiteTable};
pub use snapshot::{SiteYearState, YearSnapshot};
