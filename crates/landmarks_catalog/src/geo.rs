//! Great-circle distance and radius search.

use crate::record::Landmark;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius used when a search does not specify one.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// A landmark found by [`find_nearest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyLandmark {
    pub name: String,
    pub distance_km: f64,
}

/// Calculate the great-circle distance between two positions.
///
/// Uses the haversine formula.
///
/// # Arguments
///
/// * `from` - First position as (latitude, longitude) in degrees
/// * `to` - Second position as (latitude, longitude) in degrees
///
/// # Returns
///
/// Distance in kilometers.
///
/// # Example
///
/// ```
/// use landmarks_catalog::geo::distance_km;
///
/// // One degree of latitude along a meridian
/// let dist = distance_km((0.0, 0.0), (1.0, 0.0));
/// assert!((dist - 111.19).abs() < 0.01);
/// ```
pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Every landmark within `radius_km` of `center` (inclusive), nearest first.
///
/// Landmarks at equal distance keep their input order.
pub fn find_nearest<'a>(
    landmarks: impl IntoIterator<Item = &'a Landmark>,
    center: (f64, f64),
    radius_km: f64,
) -> Vec<NearbyLandmark> {
    let mut nearby: Vec<NearbyLandmark> = landmarks
        .into_iter()
        .filter_map(|lm| {
            let distance = distance_km(center, lm.position());
            (distance <= radius_km).then(|| NearbyLandmark {
                name: lm.name().to_string(),
                distance_km: distance,
            })
        })
        .collect();
    nearby.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spb() -> Vec<Landmark> {
        vec![
            Landmark::new("land_001", "Mendeleev Memorial", 59.9311, 30.3644, 1834, "monument", 5),
            Landmark::new("land_002", "Science Laboratory", 59.9395, 30.3161, 1925, "synthesis", 4),
            Landmark::new("land_003", "Academy of Sciences", 59.9311, 30.3850, 1775, "discovery", 5),
        ]
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(distance_km((59.9311, 30.3644), (59.9311, 30.3644)), 0.0);
    }

    #[test]
    fn test_short_city_distance() {
        let dist = distance_km((59.9311, 30.3609), (59.9250, 30.3650));
        assert!((dist - 0.7157).abs() < 0.001, "got {}", dist);
    }

    #[test]
    fn test_symmetric() {
        let a = (48.8566, 2.3522);
        let b = (51.5074, -0.1278);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
        assert!((distance_km(a, b) - 343.5).abs() < 1.0);
    }

    #[test]
    fn test_find_nearest_sorted_by_distance() {
        let landmarks = spb();
        let found = find_nearest(&landmarks, (59.9311, 30.3644), DEFAULT_RADIUS_KM);
        let names: Vec<_> = found.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Mendeleev Memorial", "Academy of Sciences", "Science Laboratory"]);
        assert_eq!(found[0].distance_km, 0.0);
    }

    #[test]
    fn test_find_nearest_respects_radius() {
        let landmarks = spb();
        let found = find_nearest(&landmarks, (59.9311, 30.3644), 2.0);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|n| n.distance_km <= 2.0));

        assert!(find_nearest(&landmarks, (0.0, 0.0), DEFAULT_RADIUS_KM).is_empty());
    }
}
