//! JSON loaders mapping caller-named columns onto the engine's data model.
//!
//! Inputs are arrays of flat records; the config supplies the column names.
//! Shape problems (missing columns, non-numeric values) surface as
//! `InputError` before any simulation work begins.

use std::path::Path;

use serde_json::{Map, Value};

use gridcast_core::config::DownscaleConfig;
use gridcast_core::errors::InputError;
use gridcast_core::types::{LoadProjection, LoadSchedule, SiteId, SiteRecord, SiteTable};

/// Load a site table from a JSON array of records.
pub fn load_sites_json(path: &Path, config: &DownscaleConfig) -> Result<SiteTable, InputError> {
    let records = read_records(path)?;

    let mut sites = Vec::with_capacity(records.len());
    for record in &records {
        let site_id = integer_field(record, &config.grid_site_id)?;
        let priority = numeric_field(record, &config.grid_priority)?;
        let baseline_load = numeric_field(record, &config.grid_baseline_load)?;
        let developable_capacity = numeric_field(record, &config.grid_capacity)?;
        sites.push(SiteRecord {
            site_id: SiteId::new(site_id),
            priority,
            baseline_load,
            developable_capacity,
        });
    }

    SiteTable::new(sites)
}

/// Load a load-growth schedule from a JSON array of records.
pub fn load_projections_json(
    path: &Path,
    config: &DownscaleConfig,
) -> Result<LoadSchedule, InputError> {
    let records = read_records(path)?;

    let mut projections = Vec::with_capacity(records.len());
    for record in &records {
        let year = integer_field(record, &config.load_year)? as i32;
        let target = numeric_field(record, &config.load_value)?;
        projections.push(LoadProjection { year, target });
    }

    LoadSchedule::new(config.baseline_year, projections)
}

fn read_records(path: &Path) -> Result<Vec<Map<String, Value>>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| InputError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn numeric_field(record: &Map<String, Value>, column: &str) -> Result<f64, InputError> {
    match record.get(column) {
        None | Some(Value::Null) => Err(InputError::MissingColumn {
            column: column.to_string(),
        }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| InputError::NonNumericValue {
            column: column.to_string(),
            value: n.to_string(),
        }),
        Some(other) => Err(InputError::NonNumericValue {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

fn integer_field(record: &Map<String, Value>, column: &str) -> Result<u32, InputError> {
    match record.get(column) {
        None | Some(Value::Null) => Err(InputError::MissingColumn {
            column: column.to_string(),
        }),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| InputError::NonNumericValue {
                column: column.to_string(),
                value: n.to_string(),
            }),
        Some(other) => Err(InputError::NonNumericValue {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}
