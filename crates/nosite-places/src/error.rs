use thiserror::Error;

/// Errors returned by the places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered 429; the quota is exhausted for now.
    #[error("rate limited by places API (HTTP 429)")]
    RateLimited,

    /// Any other non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid places base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Fatal errors that abort a whole search.
///
/// Everything downstream of a resolved origin is absorbed by the discovery
/// engine and never surfaces here.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location must not be blank")]
    EmptyLocation,

    /// The geocoder reported no usable result for the query.
    #[error("Location not found: {status}")]
    LocationNotFound { query: String, status: String },

    /// The geocode request itself failed, so no origin exists.
    #[error("geocoding request failed: {0}")]
    Transport(#[source] PlacesError),

    #[error(transparent)]
    InvalidQuery(#[from] nosite_core::CoreError),
}
