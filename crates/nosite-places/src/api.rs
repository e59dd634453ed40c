//! The places capability consumed by the discovery engine.
//!
//! [`PlacesClient`](crate::PlacesClient) implements it over HTTP; tests supply
//! in-memory implementations. Implementations return the raw upstream
//! envelopes and leave status interpretation to the caller.

use std::future::Future;

use nosite_core::{Category, Coordinate};

use crate::error::PlacesError;
use crate::types::{GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse};

/// Detail fields requested for every place.
pub const DETAIL_FIELDS: &str = "name,formatted_phone_number,website,formatted_address,geometry";

pub trait PlacesApi: Send + Sync {
    /// Resolve a free-text address.
    fn geocode_lookup(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodeResponse, PlacesError>> + Send;

    /// One probe: places of `category` within `radius_m` meters of `origin`.
    fn nearby_search(
        &self,
        origin: Coordinate,
        radius_m: f64,
        category: Category,
    ) -> impl Future<Output = Result<NearbySearchResponse, PlacesError>> + Send;

    /// Full details for one place id, restricted to [`DETAIL_FIELDS`].
    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceDetailsResponse, PlacesError>> + Send;
}
