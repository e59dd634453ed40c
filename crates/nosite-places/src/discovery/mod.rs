//! Cumulative multi-radius discovery.
//!
//! A search resolves its origin, plans a probe sequence, then walks every
//! (category, radius) probe. Each place id is claimed once per search: the
//! first probe to surface it enriches and qualifies it, later sightings are
//! ignored. Only a failed origin aborts a search; probe and enrichment
//! failures are logged and absorbed.

mod enrich;
mod geocode;
mod links;
mod probe;
mod qualify;

use std::collections::HashSet;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use nosite_core::{
    plan_radii, AppConfig, Business, Category, Coordinate, RadiusPlan, SearchQuery, SearchResults,
};
use tokio::sync::Mutex;

use crate::api::PlacesApi;
use crate::error::SearchError;

pub use enrich::{enrich, Enrichment, ResolvedPlace};
pub use geocode::geocode;
pub use links::{maps_app_url, profile_url};
pub use probe::{search_nearby, ProbeOutcome};
pub use qualify::qualify;

/// Where a search is centred.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOrigin {
    /// Free text, resolved through the geocoder.
    Address(String),
    /// Already resolved; no geocode request is made.
    Coordinate(Coordinate),
}

impl From<&str> for SearchOrigin {
    fn from(value: &str) -> Self {
        Self::Address(value.to_string())
    }
}

impl From<Coordinate> for SearchOrigin {
    fn from(value: Coordinate) -> Self {
        Self::Coordinate(value)
    }
}

/// Pacing knobs for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Categories probed at the same time. Radii within a category always run
    /// in order.
    pub max_concurrent_categories: usize,
    /// Pause before every nearby-search and details request.
    pub inter_request_delay: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_concurrent_categories: 1,
            inter_request_delay: Duration::ZERO,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_concurrent_categories: config.max_concurrent_categories.max(1),
            inter_request_delay: Duration::from_millis(config.inter_request_delay_ms),
        }
    }
}

/// Run a complete search: resolve the origin, then [`search`].
///
/// The radius is validated before any request is made.
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] for a bad radius, or any error from
/// [`geocode`] when the origin cannot be resolved.
pub async fn run_search<P: PlacesApi>(
    api: &P,
    origin: SearchOrigin,
    max_radius_m: f64,
    categories: &[Category],
    options: SearchOptions,
) -> Result<SearchResults, SearchError> {
    SearchQuery::validate_radius(max_radius_m)?;

    let origin = match origin {
        SearchOrigin::Address(address) => geocode(api, &address).await?,
        SearchOrigin::Coordinate(coordinate) => coordinate,
    };
    let query = SearchQuery::new(origin, max_radius_m, categories.iter().copied())?;

    Ok(search(api, &query, options).await)
}

/// Discover every qualifying business for an already-resolved query.
///
/// Never fails: upstream trouble only shrinks the result.
pub async fn search<P: PlacesApi>(
    api: &P,
    query: &SearchQuery,
    options: SearchOptions,
) -> SearchResults {
    let plan = plan_radii(query.max_radius_m());
    tracing::info!(
        origin = %query.origin(),
        max_radius_m = query.max_radius_m(),
        radii = ?plan.as_slice(),
        categories = query.categories().len(),
        "starting search"
    );

    let businesses = aggregate(api, query, &plan, options).await;

    tracing::info!(found = businesses.len(), "search complete");
    SearchResults {
        origin: query.origin(),
        max_radius_m: query.max_radius_m(),
        categories: query.categories().to_vec(),
        businesses,
    }
}

/// Walk every probe and return qualifying businesses sorted by distance.
///
/// Ties keep discovery order: category order, then radius order, then the
/// order the upstream listed them.
pub async fn aggregate<P: PlacesApi>(
    api: &P,
    query: &SearchQuery,
    plan: &RadiusPlan,
    options: SearchOptions,
) -> Vec<Business> {
    let seen = Mutex::new(HashSet::new());

    let per_category: Vec<_> = query
        .categories()
        .iter()
        .map(|&category| search_category(api, query, plan, category, &seen, options))
        .collect();

    let mut businesses: Vec<Business> = stream::iter(per_category)
        .buffered(options.max_concurrent_categories.max(1))
        .collect::<Vec<Vec<Business>>>()
        .await
        .into_iter()
        .flatten()
        .collect();

    businesses.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    businesses
}

async fn search_category<P: PlacesApi>(
    api: &P,
    query: &SearchQuery,
    plan: &RadiusPlan,
    category: Category,
    seen: &Mutex<HashSet<String>>,
    options: SearchOptions,
) -> Vec<Business> {
    let mut found = Vec::new();

    for radius_m in plan.iter() {
        pace(options.inter_request_delay).await;
        let candidates = match search_nearby(api, query.origin(), radius_m, category).await {
            ProbeOutcome::Found(candidates) => candidates,
            ProbeOutcome::Empty | ProbeOutcome::SoftFailure(_) => continue,
        };

        for candidate in candidates {
            if !seen.lock().await.insert(candidate.place_id.clone()) {
                continue;
            }

            pace(options.inter_request_delay).await;
            let enrichment = enrich(api, &candidate).await;
            let place = ResolvedPlace::new(candidate, enrichment);

            match qualify(&place, query.origin(), query.max_radius_km()) {
                Some(distance_km) => found.push(place.into_business(distance_km)),
                None => tracing::debug!(
                    place_id = %place.place_id,
                    has_website = place.has_website(),
                    "place did not qualify"
                ),
            }
        }
    }

    tracing::debug!(%category, qualifying = found.len(), "category complete");
    found
}

async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
