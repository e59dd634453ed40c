use nosite_core::{Category, Coordinate};

use crate::api::PlacesApi;
use crate::types::{ApiStatus, PlaceCandidate};

/// Result of one (radius, category) nearby-search probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// `"OK"`: zero or more candidates.
    Found(Vec<PlaceCandidate>),
    /// `"ZERO_RESULTS"`: nothing here, not an error.
    Empty,
    /// Any other status, or a transport/decoding failure. Affects this probe only.
    SoftFailure(String),
}

/// Issue one probe and classify the response. Never fails.
pub async fn search_nearby<P: PlacesApi>(
    api: &P,
    origin: Coordinate,
    radius_m: f64,
    category: Category,
) -> ProbeOutcome {
    let response = match api.nearby_search(origin, radius_m, category).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(
                %category,
                radius_m,
                error = %e,
                "nearby search request failed, skipping probe"
            );
            return ProbeOutcome::SoftFailure(e.to_string());
        }
    };

    match response.status {
        ApiStatus::Ok => {
            tracing::debug!(
                %category,
                radius_m,
                count = response.results.len(),
                "nearby search returned places"
            );
            ProbeOutcome::Found(
                response
                    .results
                    .into_iter()
                    .map(|place| PlaceCandidate::from_nearby(place, category))
                    .collect(),
            )
        }
        ApiStatus::ZeroResults => {
            tracing::debug!(%category, radius_m, "no places in probe");
            ProbeOutcome::Empty
        }
        ApiStatus::Other(status) => {
            tracing::warn!(
                %category,
                radius_m,
                %status,
                message = response.error_message.as_deref().unwrap_or_default(),
                "nearby search returned non-success status, skipping probe"
            );
            ProbeOutcome::SoftFailure(status)
        }
    }
}
