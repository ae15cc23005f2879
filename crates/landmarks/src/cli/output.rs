//! Output formatting utilities for CLI commands

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use landmarks_catalog::{Landmark, NearbyLandmark};

/// Table of landmarks in the order given.
pub fn landmark_table<'a>(landmarks: impl IntoIterator<Item = &'a Landmark>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec![
            "ID", "Name", "Type", "Year", "Importance", "Latitude", "Longitude", "Scientists",
        ]);

    for lm in landmarks {
        table.add_row(vec![
            Cell::new(lm.id()),
            Cell::new(lm.name()),
            Cell::new(lm.discovery_type()),
            Cell::new(lm.year_discovered()),
            Cell::new(importance_stars(lm.importance_level())),
            Cell::new(format!("{:.4}", lm.latitude())),
            Cell::new(format!("{:.4}", lm.longitude())),
            Cell::new(lm.scientists().join(", ")),
        ]);
    }
    table
}

/// Table of radius-search results.
pub fn nearby_table(found: &[NearbyLandmark]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Name", "Distance"]);
    for item in found {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(format_distance(item.distance_km)),
        ]);
    }
    table
}

/// Render importance 1-5 as filled/empty stars, e.g. 3 -> "★★★☆☆".
pub fn importance_stars(level: i32) -> String {
    let filled = level.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Format a distance, switching to meters below one kilometer.
///
/// Examples:
/// - 0.25 -> "250 m"
/// - 2.848 -> "2.85 km"
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.2} km", km)
    }
}
