//! Statistics derived from a catalog's accepted landmarks.
//!
//! Always recomputed from the records; nothing here is cached.

use crate::record::Landmark;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of names reported in `most_important_landmarks`.
pub const TOP_IMPORTANCE_COUNT: usize = 3;

const EMPTY_MESSAGE: &str = "No data";

/// Aggregate view of a catalog.
///
/// Check [`total`](Self::total) or match on the variant before reading the
/// summary: an empty catalog has no averages or ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Statistics {
    Populated(StatisticsSummary),
    Empty { total: usize, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_landmarks: usize,
    /// Mean importance, rounded to 2 decimals half away from zero, so a tie
    /// such as 4.125 becomes 4.13 (half-to-even would give 4.12).
    pub average_importance: f64,
    pub earliest_discovery: i32,
    pub latest_discovery: i32,
    pub discovery_types_distribution: BTreeMap<String, usize>,
    /// Up to three names, highest importance first, ties in arrival order
    pub most_important_landmarks: Vec<String>,
}

impl Statistics {
    pub fn empty() -> Self {
        Statistics::Empty {
            total: 0,
            message: EMPTY_MESSAGE.to_string(),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Statistics::Populated(summary) => summary.total_landmarks,
            Statistics::Empty { total, .. } => *total,
        }
    }

    pub fn summary(&self) -> Option<&StatisticsSummary> {
        match self {
            Statistics::Populated(summary) => Some(summary),
            Statistics::Empty { .. } => None,
        }
    }
}

/// Compute statistics over `landmarks`, taken in arrival order.
pub fn compute(landmarks: &[Landmark]) -> Statistics {
    if landmarks.is_empty() {
        return Statistics::empty();
    }

    let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut importance_sum: i64 = 0;
    let mut earliest = i32::MAX;
    let mut latest = i32::MIN;

    for landmark in landmarks {
        *distribution
            .entry(landmark.discovery_type().to_string())
            .or_default() += 1;
        importance_sum += i64::from(landmark.importance_level());
        earliest = earliest.min(landmark.year_discovered());
        latest = latest.max(landmark.year_discovered());
    }

    let average = importance_sum as f64 / landmarks.len() as f64;

    Statistics::Populated(StatisticsSummary {
        total_landmarks: landmarks.len(),
        average_importance: round_2(average),
        earliest_discovery: earliest,
        latest_discovery: latest,
        discovery_types_distribution: distribution,
        most_important_landmarks: most_important(landmarks, TOP_IMPORTANCE_COUNT),
    })
}

/// Names of the `count` most important landmarks.
///
/// `sort_by` is stable, so equal importance keeps arrival order.
fn most_important(landmarks: &[Landmark], count: usize) -> Vec<String> {
    let mut ranked: Vec<&Landmark> = landmarks.iter().collect();
    ranked.sort_by(|a, b| b.importance_level().cmp(&a.importance_level()));
    ranked
        .into_iter()
        .take(count)
        .map(|lm| lm.name().to_string())
        .collect()
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(name: &str, year: i32, kind: &str, importance: i32) -> Landmark {
        Landmark::new(name.to_lowercase(), name, 59.93, 30.36, year, kind, importance)
    }

    #[test]
    fn test_empty_statistics() {
        let stats = compute(&[]);
        assert_eq!(stats.total(), 0);
        assert!(stats.summary().is_none());
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            serde_json::json!({"total": 0, "message": "No data"})
        );
    }

    #[test]
    fn test_reference_scenario() {
        let landmarks = vec![
            lm("Mendeleev Memorial", 1834, "monument", 5),
            lm("Science Laboratory", 1925, "synthesis", 4),
            lm("Academy of Sciences", 1775, "discovery", 5),
        ];
        let stats = compute(&landmarks);
        let summary = stats.summary().expect("populated statistics");

        assert_eq!(summary.total_landmarks, 3);
        assert_eq!(summary.average_importance, 4.67);
        assert_eq!(summary.earliest_discovery, 1775);
        assert_eq!(summary.latest_discovery, 1925);
        assert_eq!(summary.discovery_types_distribution.values().sum::<usize>(), 3);
        assert_eq!(
            summary.most_important_landmarks,
            ["Mendeleev Memorial", "Academy of Sciences", "Science Laboratory"]
        );
    }

    #[test]
    fn test_top_three_is_stable() {
        let landmarks = vec![
            lm("A", 1900, "monument", 5),
            lm("B", 1900, "monument", 5),
            lm("C", 1900, "monument", 3),
        ];
        let stats = compute(&landmarks);
        assert_eq!(stats.summary().unwrap().most_important_landmarks, ["A", "B", "C"]);
    }

    #[test]
    fn test_top_three_truncates() {
        let landmarks = vec![
            lm("Low", 1900, "analysis", 1),
            lm("Mid", 1900, "analysis", 3),
            lm("High", 1900, "analysis", 5),
            lm("Mid2", 1900, "analysis", 3),
            lm("High2", 1900, "analysis", 5),
        ];
        let stats = compute(&landmarks);
        assert_eq!(
            stats.summary().unwrap().most_important_landmarks,
            ["High", "High2", "Mid"]
        );
    }

    #[test]
    fn test_fewer_than_three() {
        let landmarks = vec![lm("Only", 1900, "analysis", 2), lm("Other", 1901, "analysis", 4)];
        let stats = compute(&landmarks);
        assert_eq!(stats.summary().unwrap().most_important_landmarks, ["Other", "Only"]);
    }

    #[test]
    fn test_distribution_counts() {
        let landmarks = vec![
            lm("A", 1900, "monument", 1),
            lm("B", 1900, "synthesis", 1),
            lm("C", 1900, "monument", 1),
        ];
        let stats = compute(&landmarks);
        let dist = &stats.summary().unwrap().discovery_types_distribution;
        assert_eq!(dist.len(), 2);
        assert_eq!(dist["monument"], 2);
        assert_eq!(dist["synthesis"], 1);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_2(4.666_666), 4.67);
        assert_eq!(round_2(3.333_333), 3.33);
        assert_eq!(round_2(2.5), 2.5);
        assert_eq!(round_2(5.0), 5.0);
    }

    #[test]
    fn test_average_tie_rounds_away_from_zero() {
        // 33 / 8 = 4.125 exactly
        let landmarks: Vec<Landmark> = [5, 5, 5, 5, 5, 4, 2, 2]
            .iter()
            .enumerate()
            .map(|(i, &importance)| lm(&format!("Site {}", i), 1900, "analysis", importance))
            .collect();
        let stats = compute(&landmarks);
        assert_eq!(stats.summary().unwrap().average_importance, 4.13);
    }

    #[test]
    fn test_populated_round_trips_through_json() {
        let stats = compute(&[lm("A", 1900, "monument", 4)]);
        let json = serde_json::to_string(&stats).unwrap();
        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
