use nosite_core::Coordinate;

use crate::api::PlacesApi;
use crate::error::SearchError;

/// Resolve a free-text location to the search origin.
///
/// # Errors
///
/// - [`SearchError::EmptyLocation`] for a blank query, before any request.
/// - [`SearchError::Transport`] when the geocode request itself fails.
/// - [`SearchError::LocationNotFound`] for any status other than `"OK"` or an
///   `"OK"` envelope without a usable first result. The upstream status is
///   carried verbatim.
pub async fn geocode<P: PlacesApi>(api: &P, query: &str) -> Result<Coordinate, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyLocation);
    }

    let response = api
        .geocode_lookup(query)
        .await
        .map_err(SearchError::Transport)?;

    match response.first_coordinate() {
        Some(origin) => {
            tracing::info!(query, %origin, "location resolved");
            Ok(origin)
        }
        None => {
            tracing::warn!(
                query,
                status = %response.status,
                message = response.error_message.as_deref().unwrap_or_default(),
                "location not found"
            );
            Err(SearchError::LocationNotFound {
                query: query.to_string(),
                status: response.status.as_str().to_string(),
            })
        }
    }
}
