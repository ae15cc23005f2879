//! The landmark catalog: accepted records plus a log of rejections.

use crate::clock::{Clock, SystemClock};
use crate::export::{self, ExportSnapshot};
use crate::geo::{self, NearbyLandmark};
use crate::record::Landmark;
use crate::report;
use crate::stats::{self, Statistics};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns every accepted landmark, in arrival order, and one error message
/// per failed insertion or export.
///
/// There is no removal. Statistics are recomputed on each call.
#[derive(Debug, Clone)]
pub struct Catalog {
    landmarks: Vec<Landmark>,
    errors: Vec<String>,
    clock: Arc<dyn Clock>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            landmarks: Vec::new(),
            errors: Vec::new(),
            clock,
        }
    }

    /// Validate and admit a landmark.
    ///
    /// Returns false and appends `"Error for <name>: <reason>"` to the error
    /// log when validation fails. Exactly one of the two lists grows.
    pub fn add(&mut self, landmark: Landmark) -> bool {
        match landmark.validate(self.clock.as_ref()) {
            Ok(()) => {
                debug!(id = landmark.id(), name = landmark.name(), "landmark accepted");
                self.landmarks.push(landmark);
                true
            }
            Err(failure) => {
                warn!(
                    id = landmark.id(),
                    field = failure.field(),
                    "landmark rejected: {}",
                    failure
                );
                self.errors
                    .push(format!("Error for {}: {}", landmark.name(), failure));
                false
            }
        }
    }

    /// Offer every landmark in order. Returns how many were accepted.
    pub fn extend(&mut self, landmarks: impl IntoIterator<Item = Landmark>) -> usize {
        landmarks
            .into_iter()
            .map(|lm| self.add(lm))
            .filter(|accepted| *accepted)
            .count()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn statistics(&self) -> Statistics {
        stats::compute(&self.landmarks)
    }

    /// Landmarks whose `discovery_type` equals `discovery_type` exactly
    /// (case-sensitive), in arrival order.
    pub fn by_type(&self, discovery_type: &str) -> Vec<&Landmark> {
        self.landmarks
            .iter()
            .filter(|lm| lm.discovery_type() == discovery_type)
            .collect()
    }

    /// Landmarks within `radius_km` of `center`, nearest first.
    pub fn nearby(&self, center: (f64, f64), radius_km: f64) -> Vec<NearbyLandmark> {
        geo::find_nearest(&self.landmarks, center, radius_km)
    }

    /// Human-readable summary. See [`report::render`].
    pub fn report(&self) -> String {
        report::render(self)
    }

    /// Records, statistics, and the clock's current time.
    pub fn snapshot(&self) -> ExportSnapshot {
        ExportSnapshot {
            landmarks: self.landmarks.clone(),
            statistics: self.statistics(),
            export_date: self.clock.now(),
        }
    }

    /// Write a JSON snapshot to `path`.
    ///
    /// On failure the error is appended to the error log as
    /// `"Export error: <detail>"` and false is returned. Accepted records
    /// are untouched either way.
    pub fn export_json(&mut self, path: &Path) -> bool {
        match export::write_snapshot(path, &self.snapshot()) {
            Ok(()) => {
                info!(path = %path.display(), landmarks = self.landmarks.len(), "catalog exported");
                true
            }
            Err(err) => {
                warn!(path = %path.display(), "catalog export failed: {}", err);
                self.errors.push(format!("Export error: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn catalog() -> Catalog {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        Catalog::with_clock(Arc::new(FixedClock::new(at)))
    }

    fn valid(name: &str, kind: &str, importance: i32) -> Landmark {
        Landmark::new(name.to_lowercase(), name, 59.93, 30.36, 1900, kind, importance)
    }

    #[test]
    fn test_add_valid() {
        let mut catalog = catalog();
        assert!(catalog.add(valid("Lab", "synthesis", 4)));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.errors().is_empty());
    }

    #[test]
    fn test_reject_latitude() {
        let mut catalog = catalog();
        catalog.add(valid("Lab", "synthesis", 4));

        let polar = Landmark::new("p", "Polar Station", 95.0, 0.0, 1900, "analysis", 3);
        assert!(!catalog.add(polar));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.errors(), ["Error for Polar Station: Invalid latitude: 95.0"]);
    }

    #[test]
    fn test_reject_importance_names_record_and_field() {
        let mut catalog = catalog();
        assert!(!catalog.add(valid("Overrated", "monument", 7)));
        assert_eq!(catalog.errors().len(), 1);
        let message = &catalog.errors()[0];
        assert!(message.contains("Overrated"));
        assert!(message.contains("importance level: 7"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_extend_counts_accepted() {
        let mut catalog = catalog();
        let accepted = catalog.extend(vec![
            valid("A", "monument", 5),
            valid("B", "monument", 0),
            valid("C", "analysis", 2),
        ]);
        assert_eq!(accepted, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.errors().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut catalog = catalog();
        assert!(catalog.add(valid("Twin", "monument", 3)));
        assert!(catalog.add(valid("Twin", "monument", 3)));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_by_type() {
        let mut catalog = catalog();
        catalog.add(valid("Memorial", "monument", 5));
        catalog.add(valid("Lab", "synthesis", 4));

        let monuments = catalog.by_type("monument");
        assert_eq!(monuments.len(), 1);
        assert_eq!(monuments[0].name(), "Memorial");

        assert!(catalog.by_type("Monument").is_empty());
        assert!(catalog.by_type("analysis").is_empty());
        assert!(Catalog::new().by_type("monument").is_empty());
    }

    #[test]
    fn test_statistics_idempotent() {
        let mut catalog = catalog();
        catalog.add(valid("A", "monument", 5));
        catalog.add(valid("B", "analysis", 2));
        assert_eq!(catalog.statistics(), catalog.statistics());
    }

    #[test]
    fn test_statistics_follow_adds() {
        let mut catalog = catalog();
        assert_eq!(catalog.statistics().total(), 0);
        catalog.add(valid("A", "monument", 5));
        assert_eq!(catalog.statistics().total(), 1);
        catalog.add(valid("B", "analysis", 2));
        assert_eq!(catalog.statistics().total(), 2);
    }

    #[test]
    fn test_snapshot_uses_clock() {
        let mut catalog = catalog();
        catalog.add(valid("A", "monument", 5));
        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.export_date, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(snapshot.landmarks.len(), 1);
        assert_eq!(snapshot.statistics.total(), 1);
    }
}
