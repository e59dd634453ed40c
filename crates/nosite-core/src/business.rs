use serde::{Deserialize, Serialize};

use crate::{Category, Coordinate};

/// Placeholder shown for a missing phone number or address.
pub const NOT_AVAILABLE: &str = "N/A";

/// A qualifying business: no website, within the requested radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    /// Formatted phone number or [`NOT_AVAILABLE`].
    pub phone: String,
    /// Formatted address (or vicinity) or [`NOT_AVAILABLE`].
    pub address: String,
    /// The category probe that first surfaced this place.
    pub category: Category,
    pub distance_km: f64,
    pub place_id: String,
    /// Web profile link keyed by place id.
    pub profile_url: String,
    /// Search deep link that the maps app opens when installed.
    pub maps_app_url: String,
}

/// The outcome of one completed search, owned by whoever ran it.
///
/// `businesses` is sorted by `distance_km` ascending and holds each place id
/// at most once. Presentation code reads it and never re-filters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub origin: Coordinate,
    pub max_radius_m: f64,
    pub categories: Vec<Category>,
    pub businesses: Vec<Business>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.businesses.len()
    }
}
