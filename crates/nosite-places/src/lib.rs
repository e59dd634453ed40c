pub mod api;
pub mod client;
pub mod discovery;
pub mod error;
pub(crate) mod retry;
pub mod types;

pub use api::{PlacesApi, DETAIL_FIELDS};
pub use client::{PlacesClient, DEFAULT_BASE_URL};
pub use discovery::{
    aggregate, enrich, geocode, maps_app_url, profile_url, qualify, run_search, search,
    search_nearby, Enrichment, ProbeOutcome, ResolvedPlace, SearchOptions, SearchOrigin,
};
pub use error::{PlacesError, SearchError};
pub use types::{
    ApiStatus, GeocodeResponse, NearbySearchResponse, PlaceCandidate, PlaceDetail,
    PlaceDetailsResponse,
};
