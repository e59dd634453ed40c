//! Great-circle distance helpers.
//!
//! All distances are kilometers. Probe radii sent to the places API are
//! meters; callers convert with `/ 1000.0` before comparing against these.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance assigned to a place whose coordinate could not be resolved.
///
/// `f64::INFINITY <= x` is false for every finite cutoff, so an unresolved
/// place can never pass a radius filter.
pub const UNREACHABLE_KM: f64 = f64::INFINITY;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Haversine distance in kilometers between two coordinates.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Like [`distance_km`], but returns [`UNREACHABLE_KM`] when either side is
/// unresolved.
#[must_use]
pub fn distance_between(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => distance_km(a, b),
        _ => UNREACHABLE_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Coordinate = Coordinate::new(0.0, 0.0);

    #[test]
    fn distance_to_self_is_zero() {
        let minneapolis = Coordinate::new(44.977_8, -93.265_0);
        assert!(distance_km(minneapolis, minneapolis).abs() < f64::EPSILON);
        assert!(distance_km(ORIGIN, ORIGIN).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(40.712_8, -74.006_0);
        let b = Coordinate::new(34.052_2, -118.243_7);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn new_york_to_los_angeles_matches_known_distance() {
        let nyc = Coordinate::new(40.712_8, -74.006_0);
        let la = Coordinate::new(34.052_2, -118.243_7);
        let d = distance_km(nyc, la);
        assert!((d - 3935.7).abs() < 5.0, "got {d}");
    }

    #[test]
    fn one_thousandth_degree_of_latitude_is_about_111_meters() {
        let d = distance_km(ORIGIN, Coordinate::new(0.001, 0.0));
        assert!((d - 0.111_19).abs() < 0.001, "got {d}");
    }

    #[test]
    fn unresolved_side_is_unreachable() {
        assert!(distance_between(Some(ORIGIN), None).is_infinite());
        assert!(distance_between(None, Some(ORIGIN)).is_infinite());
        assert!(distance_between(None, None).is_infinite());
    }

    #[test]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn unreachable_never_satisfies_a_cutoff() {
        let d = distance_between(Some(ORIGIN), None);
        assert!(!(d <= 1.0e12));
        assert!(!(d <= f64::MAX));
    }

    #[test]
    fn resolved_sides_delegate_to_haversine() {
        let b = Coordinate::new(0.0027, 0.0);
        assert!((distance_between(Some(ORIGIN), Some(b)) - distance_km(ORIGIN, b)).abs() < 1e-12);
    }
}
