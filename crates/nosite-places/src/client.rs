//! HTTP client for the places web service.
//!
//! Wraps `reqwest` with API key injection, retry on transient failures, and
//! typed response deserialization. Upstream `"status"` values are returned as
//! data; classifying them is the discovery engine's job.

use std::time::Duration;

use nosite_core::{AppConfig, Category, Coordinate};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::{PlacesApi, DETAIL_FIELDS};
use crate::error::PlacesError;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const GEOCODE_ENDPOINT: &str = "geocode/json";
const NEARBY_ENDPOINT: &str = "place/nearbysearch/json";
const DETAILS_ENDPOINT: &str = "place/details/json";

/// Client for the geocoding, nearby-search and place-details endpoints.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    retry: RetryPolicy,
}

impl PlacesClient {
    /// Creates a client pointed at the production API with retries disabled.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a client from the application config with its retry policy.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::with_base_url`].
    pub fn from_app_config(api_key: &str, config: &AppConfig) -> Result<Self, PlacesError> {
        Ok(Self::with_base_url(
            api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )?
        .with_retry_policy(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Enables retry with exponential back-off for nearby-search and details
    /// calls. Geocoding is always single-shot.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.retry = RetryPolicy::new(max_retries, backoff_base_ms);
        self
    }

    /// Builds the full request URL: base + endpoint, then `params`, then the
    /// API key, all percent-encoded.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(endpoint)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET and parses the JSON body.
    ///
    /// Error contexts name the endpoint only; the full URL carries the key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: Url,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimited);
        }
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

impl PlacesApi for PlacesClient {
    async fn geocode_lookup(&self, address: &str) -> Result<GeocodeResponse, PlacesError> {
        let url = self.build_url(GEOCODE_ENDPOINT, &[("address", address)]);
        tracing::debug!(address, "geocoding location");
        self.request_json(GEOCODE_ENDPOINT, url).await
    }

    async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_m: f64,
        category: Category,
    ) -> Result<NearbySearchResponse, PlacesError> {
        let location = origin.to_string();
        let radius = radius_m.to_string();
        let url = self.build_url(
            NEARBY_ENDPOINT,
            &[
                ("location", &location),
                ("radius", &radius),
                ("type", category.as_str()),
            ],
        );

        retry_with_backoff(self.retry, NEARBY_ENDPOINT, || {
            self.request_json(NEARBY_ENDPOINT, url.clone())
        })
        .await
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, PlacesError> {
        let url = self.build_url(
            DETAILS_ENDPOINT,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        );

        retry_with_backoff(self.retry, DETAILS_ENDPOINT, || {
            self.request_json(DETAILS_ENDPOINT, url.clone())
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
