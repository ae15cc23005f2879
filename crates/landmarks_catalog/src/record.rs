//! Landmark record type.
//!
//! A landmark is write-once: fields are set at construction and only read
//! afterwards, so a record admitted to a catalog stays valid for its lifetime.

use crate::clock::Clock;
use crate::error::ValidationFailure;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const IMPORTANCE_RANGE: RangeInclusive<i32> = 1..=5;
/// Earliest accepted discovery year. The upper bound is the clock's current year.
pub const EARLIEST_YEAR: i32 = 1600;

/// Message returned by [`Landmark::check`] for a valid record.
pub const VALID_MESSAGE: &str = "Data is valid";

/// A geo-tagged landmark.
///
/// Serializes with one JSON key per field, using the field names below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Opaque identifier. Uniqueness is the caller's concern.
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    year_discovered: i32,
    #[serde(default)]
    description: String,
    /// Order is preserved but carries no meaning
    #[serde(default)]
    scientists: Vec<String>,
    /// Free-form tag, e.g. "synthesis", "analysis", "discovery", "monument"
    discovery_type: String,
    /// 1 (lowest) to 5 (highest)
    importance_level: i32,
}

impl Landmark {
    /// Create a landmark with an empty description and no scientists.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        year_discovered: i32,
        discovery_type: impl Into<String>,
        importance_level: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            year_discovered,
            description: String::new(),
            scientists: Vec::new(),
            discovery_type: discovery_type.into(),
            importance_level,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_scientists(mut self, scientists: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scientists = scientists.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// (latitude, longitude) in degrees
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn year_discovered(&self) -> i32 {
        self.year_discovered
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scientists(&self) -> &[String] {
        &self.scientists
    }

    pub fn discovery_type(&self) -> &str {
        &self.discovery_type
    }

    pub fn importance_level(&self) -> i32 {
        self.importance_level
    }

    /// Check every field against its domain.
    ///
    /// Order is fixed: latitude, longitude, importance, year. Only the first
    /// failure is reported. NaN coordinates are out of range.
    pub fn validate(&self, clock: &dyn Clock) -> Result<(), ValidationFailure> {
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(ValidationFailure::Latitude(self.latitude));
        }
        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(ValidationFailure::Longitude(self.longitude));
        }
        if !IMPORTANCE_RANGE.contains(&self.importance_level) {
            return Err(ValidationFailure::Importance(self.importance_level));
        }
        if self.year_discovered < EARLIEST_YEAR || self.year_discovered > clock.current_year() {
            return Err(ValidationFailure::Year(self.year_discovered));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) as a `(is_valid, message)` pair.
    pub fn check(&self, clock: &dyn Clock) -> (bool, String) {
        match self.validate(clock) {
            Ok(()) => (true, VALID_MESSAGE.to_string()),
            Err(failure) => (false, failure.to_string()),
        }
    }
}
