//! Pass-through to the upstream places host for browser clients.
//!
//! The browser never holds the key: the server appends it before forwarding.
//! Only URLs under the configured places base URL are forwarded.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use reqwest::Url;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{missing_api_key, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ProxyQuery {
    pub url: Option<String>,
}

/// Validate `raw` against the upstream base and append the key if absent.
pub(super) fn upstream_url(base_url: &str, raw: &str, api_key: &str) -> Result<Url, &'static str> {
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
        .map_err(|_| "proxy upstream is misconfigured")?;
    let mut target = Url::parse(raw).map_err(|_| "url must be an absolute URL")?;

    let same_origin = target.scheme() == base.scheme()
        && target.host_str() == base.host_str()
        && target.port_or_known_default() == base.port_or_known_default();
    if !same_origin || !target.path().starts_with(base.path()) {
        return Err("url must point at the places API");
    }

    if !target.query_pairs().any(|(k, _)| k == "key") {
        target.query_pairs_mut().append_pair("key", api_key);
    }
    Ok(target)
}

pub(super) async fn google_proxy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response, ApiError> {
    let raw = query
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "bad_request", "URL parameter is required"))?;

    let Some(api_key) = state.config.places_api_key.as_deref() else {
        return Err(missing_api_key(req_id.0));
    };

    let target = upstream_url(&state.config.places_base_url, &raw, api_key)
        .map_err(|message| ApiError::new(req_id.0.clone(), "bad_request", message))?;
    let upstream_path = target.path().to_string();
    tracing::debug!(path = %upstream_path, "proxying places request");

    let upstream_failed = |e: reqwest::Error| {
        tracing::warn!(path = %upstream_path, error = %e.without_url(), "places proxy request failed");
        ApiError::new(
            req_id.0.clone(),
            "upstream_error",
            "failed to fetch from places API",
        )
    };

    let response = state
        .http
        .get(target)
        .send()
        .await
        .map_err(&upstream_failed)?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| header::HeaderValue::from_static("application/json"));
    let body = response.bytes().await.map_err(&upstream_failed)?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
