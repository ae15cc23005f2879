//! Plain-text catalog report.

use crate::catalog::Catalog;
use crate::stats::Statistics;

/// Returned instead of a report when the catalog holds no landmarks.
pub const NO_DATA_LINE: &str = "No landmarks in database";

/// Render a multi-line summary of `catalog`.
///
/// Output format:
/// ```text
/// === LANDMARKS REPORT ===
///
/// Total landmarks: 3
/// Average importance: 4.67/5
/// Discovery range: 1775-1925
///
/// Discovery types: discovery: 1, monument: 1, synthesis: 1
///
/// Top 3 most important landmarks:
///   1. Mendeleev Memorial
///   2. Academy of Sciences
///   3. Science Laboratory
/// ```
pub fn render(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return NO_DATA_LINE.to_string();
    }

    let summary = match catalog.statistics() {
        Statistics::Populated(summary) => summary,
        Statistics::Empty { .. } => return NO_DATA_LINE.to_string(),
    };

    let types = summary
        .discovery_types_distribution
        .iter()
        .map(|(kind, count)| format!("{}: {}", kind, count))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        "=== LANDMARKS REPORT ===".to_string(),
        String::new(),
        format!("Total landmarks: {}", summary.total_landmarks),
        format!("Average importance: {:.2}/5", summary.average_importance),
        format!(
            "Discovery range: {}-{}",
            summary.earliest_discovery, summary.latest_discovery
        ),
        String::new(),
        format!("Discovery types: {}", types),
        String::new(),
        format!(
            "Top {} most important landmarks:",
            summary.most_important_landmarks.len()
        ),
    ];
    for (i, name) in summary.most_important_landmarks.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, name));
    }

    lines.join("\n")
}
