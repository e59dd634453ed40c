use nosite_core::{Category, Coordinate};

use crate::api::PlacesApi;
use crate::types::{ApiStatus, PlaceCandidate, PlaceDetail};

/// Outcome of fetching details for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    Enriched(PlaceDetail),
    /// Details were unavailable; the candidate's coarse fields stand in and
    /// the place is treated as having no website.
    Fallback { reason: String },
}

/// Fetch details for `candidate`. Failures become [`Enrichment::Fallback`].
pub async fn enrich<P: PlacesApi>(api: &P, candidate: &PlaceCandidate) -> Enrichment {
    let place_id = candidate.place_id.as_str();
    let reason = match api.place_details(place_id).await {
        Ok(response) => match (response.status, response.result) {
            (ApiStatus::Ok, Some(result)) => {
                return Enrichment::Enriched(PlaceDetail::from_result(place_id, result));
            }
            (ApiStatus::Ok, None) => "details response had no result".to_string(),
            (status, _) => format!("details status {status}"),
        },
        Err(e) => e.to_string(),
    };

    tracing::warn!(place_id, %reason, "place details unavailable, using search fields");
    Enrichment::Fallback { reason }
}

/// A candidate merged with whatever its enrichment produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    /// Precise coordinate when details had one, else the approximate one.
    pub coordinate: Option<Coordinate>,
    pub category: Category,
}

impl ResolvedPlace {
    #[must_use]
    pub fn new(candidate: PlaceCandidate, enrichment: Enrichment) -> Self {
        match enrichment {
            Enrichment::Enriched(detail) => Self {
                place_id: candidate.place_id,
                name: detail.name.or(candidate.name),
                phone: detail.phone,
                address: detail.formatted_address,
                website: detail.website,
                coordinate: detail.precise.or(candidate.approximate),
                category: candidate.category,
            },
            Enrichment::Fallback { .. } => Self {
                place_id: candidate.place_id,
                name: candidate.name,
                phone: None,
                address: candidate.vicinity,
                website: None,
                coordinate: candidate.approximate,
                category: candidate.category,
            },
        }
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }
}
