//! Tests for the shared data model.

use gridcast_core::types::{LoadProjection, LoadSchedule, SiteId, SiteRecord, SiteTable};

fn record(id: u32, priority: f64, baseline_load: f64, capacity: f64) -> SiteRecord {
    SiteRecord {
        site_id: SiteId::new(id),
        priority,
        baseline_load,
        developable_capacity: capacity,
    }
}

#[test]
fn site_table_preserves_input_order() {
    let table = SiteTable::new(vec![
        record(5, 1.0, 0.0, 10.0),
        record(2, 2.0, 1.0, 20.0),
        record(9, 0.0, 0.0, 5.0),
    ])
    .expect("valid table");

    let ids: Vec<u32> = table.records().iter().map(|r| r.site_id.inner()).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[test]
fn site_id_is_serde_transparent() {
    let id = SiteId::new(42);
    let json = serde_json::to_string(&id).expect("serialize");
    assert_eq!(json, "42");
    let back: SiteId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, id);
}

#[test]
fn site_record_round_trips_through_json() {
    let rec = record(7, 1.5, 2.0, 30.0);
    let json = serde_json::to_string(&rec).expect("serialize");
    let back: SiteRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, rec);
}

#[test]
fn schedule_exposes_baseline_and_sorted_projections() {
    let schedule = LoadSchedule::new(
        2020,
        vec![
            LoadProjection {
                year: 2040,
                target: 8.0,
            },
            LoadProjection {
                year: 2030,
                target: 4.0,
            },
        ],
    )
    .expect("valid schedule");

    assert_eq!(schedule.baseline_year(), 2020);
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.projections()[0].year, 2030);
    assert_eq!(schedule.projections()[1].year, 2040);
}
