use nosite_core::{distance_between, Business, Coordinate, NOT_AVAILABLE};

use super::enrich::ResolvedPlace;
use super::links::{maps_app_url, profile_url};

/// Distance in km when `place` qualifies, `None` otherwise.
///
/// A place qualifies when it lists no website and lies within
/// `max_radius_km` of `origin`. Unresolved coordinates never qualify.
#[must_use]
pub fn qualify(place: &ResolvedPlace, origin: Coordinate, max_radius_km: f64) -> Option<f64> {
    if place.has_website() {
        return None;
    }
    let distance = distance_between(Some(origin), place.coordinate);
    (distance <= max_radius_km).then_some(distance)
}

impl ResolvedPlace {
    /// Final record for a qualifying place.
    #[must_use]
    pub fn into_business(self, distance_km: f64) -> Business {
        let profile_url = profile_url(&self.place_id);
        let maps_app_url = maps_app_url(self.name.as_deref(), &self.place_id);
        Business {
            name: self.name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            phone: self.phone.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            address: self.address.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            category: self.category,
            distance_km,
            place_id: self.place_id,
            profile_url,
            maps_app_url,
        }
    }
}
