//! End-to-end catalog behavior: admission, statistics, filtering, export.

use chrono::{TimeZone, Utc};
use landmarks_catalog::dataset::{load_landmarks, sample_landmarks};
use landmarks_catalog::{Catalog, FixedClock, Landmark, Statistics};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn catalog_in(year: i32) -> Catalog {
    let at = Utc.with_ymd_and_hms(year, 7, 1, 9, 0, 0).unwrap();
    Catalog::with_clock(Arc::new(FixedClock::new(at)))
}

#[test]
fn test_sample_pipeline() {
    let mut catalog = catalog_in(2024);
    assert_eq!(catalog.extend(sample_landmarks()), 3);

    let Statistics::Populated(summary) = catalog.statistics() else {
        panic!("expected populated statistics");
    };
    assert_eq!(summary.average_importance, 4.67);
    assert_eq!(summary.earliest_discovery, 1775);
    assert_eq!(summary.latest_discovery, 1925);
    assert_eq!(summary.discovery_types_distribution.values().sum::<usize>(), 3);

    let monuments = catalog.by_type("monument");
    assert_eq!(monuments.len(), 1);
    assert_eq!(monuments[0].id(), "land_001");
}

#[test]
fn test_empty_catalog_statistics() {
    let catalog = Catalog::new();
    let stats = catalog.statistics();
    assert_eq!(stats.total(), 0);
    assert!(stats.summary().is_none());
}

#[test]
fn test_rejections_leave_accepted_untouched() {
    let mut catalog = catalog_in(2024);
    catalog.extend(sample_landmarks());
    let before = catalog.statistics();

    let rejected = [
        Landmark::new("bad_1", "Polar", 95.0, 0.0, 1900, "analysis", 3),
        Landmark::new("bad_2", "Antimeridian", 0.0, 180.5, 1900, "analysis", 3),
        Landmark::new("bad_3", "Overrated", 0.0, 0.0, 1900, "analysis", 7),
        Landmark::new("bad_4", "Future", 0.0, 0.0, 2030, "analysis", 3),
    ];
    for (i, landmark) in rejected.into_iter().enumerate() {
        assert!(!catalog.add(landmark));
        assert_eq!(catalog.errors().len(), i + 1);
    }

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.statistics(), before);
    assert_eq!(
        catalog.errors(),
        [
            "Error for Polar: Invalid latitude: 95.0",
            "Error for Antimeridian: Invalid longitude: 180.5",
            "Error for Overrated: Invalid importance level: 7",
            "Error for Future: Invalid year: 2030",
        ]
    );
}

#[test]
fn test_year_bound_moves_with_clock() {
    let landmark = Landmark::new("x", "Recent", 0.0, 0.0, 2026, "synthesis", 2);
    assert!(!catalog_in(2025).add(landmark.clone()));
    assert!(catalog_in(2026).add(landmark));
}

#[test]
fn test_export_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("landmarks_export.json");

    let mut catalog = catalog_in(2024);
    catalog.extend(sample_landmarks());
    assert!(catalog.export_json(&path));
    assert!(catalog.errors().is_empty());

    let reloaded = load_landmarks(&path).unwrap();
    assert_eq!(reloaded, catalog.landmarks());

    let mut copy = catalog_in(2024);
    copy.extend(reloaded);
    assert_eq!(copy.statistics(), catalog.statistics());
}

#[test]
fn test_export_failure_is_logged() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let mut catalog = catalog_in(2024);
    catalog.extend(sample_landmarks());
    assert!(!catalog.export_json(&blocker.join("out.json")));

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.errors().len(), 1);
    assert!(catalog.errors()[0].starts_with("Export error: "));
}

#[test]
fn test_empty_export_writes_sentinel_statistics() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");

    let mut catalog = catalog_in(2024);
    assert!(catalog.export_json(&path));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["landmarks"], serde_json::json!([]));
    assert_eq!(value["statistics"]["total"], 0);
}
