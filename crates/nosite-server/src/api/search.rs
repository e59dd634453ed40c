use axum::{
    extract::{Query, State},
    Extension, Json,
};
use nosite_core::{Category, SearchResults, DEFAULT_RADIUS_KM};
use nosite_places::{run_search, SearchError, SearchOptions, SearchOrigin};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{missing_api_key, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub location: Option<String>,
    /// Kept as text so a malformed number gets the same error envelope.
    pub radius_km: Option<String>,
    /// Comma-separated category tokens; all categories when absent.
    pub categories: Option<String>,
}

fn parse_radius_km(raw: Option<&str>) -> Result<f64, String> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(DEFAULT_RADIUS_KM),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("radius_km must be a number, got '{raw}'")),
    }
}

fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    match error {
        SearchError::EmptyLocation | SearchError::InvalidQuery(_) => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        SearchError::LocationNotFound { .. } => {
            ApiError::new(request_id, "location_not_found", error.to_string())
        }
        SearchError::Transport(source) => {
            tracing::error!(error = %source, "geocoding request failed");
            ApiError::new(request_id, "upstream_error", "geocoding request failed")
        }
    }
}

pub(super) async fn search_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let location = params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "validation_error", "location is required"))?;

    let radius_km = parse_radius_km(params.radius_km.as_deref())
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let categories = match params.categories.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Category::parse_list(raw)
            .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?,
        _ => Category::ALL.to_vec(),
    };

    let Some(places) = state.places.as_deref() else {
        return Err(missing_api_key(req_id.0));
    };

    let results = run_search(
        places,
        SearchOrigin::from(location),
        radius_km * 1000.0,
        &categories,
        SearchOptions::from_config(&state.config),
    )
    .await
    .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    }))
}
