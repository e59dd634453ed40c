mod proxy;
mod search;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use nosite_core::AppConfig;
use nosite_places::PlacesClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no API key is configured; search and proxy routes refuse.
    pub places: Option<Arc<PlacesClient>>,
    /// Plain client used by the proxy route.
    pub http: reqwest::Client,
}

impl AppState {
    /// Builds the shared clients from config.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed or the
    /// places base URL is invalid.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let places = config
            .places_api_key
            .as_deref()
            .map(|key| PlacesClient::from_app_config(key, &config))
            .transpose()?
            .map(Arc::new);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            places,
            http,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    places_api: &'static str,
}

/// What the browser front end may know about server configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig {
    has_api_key: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" | "location_not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Refusal shared by every route that needs the upstream key.
pub(super) fn missing_api_key(request_id: String) -> ApiError {
    ApiError::new(request_id, "not_configured", "API key not configured")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

/// Routes that spend upstream quota.
fn guarded_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/search", get(search::search_businesses))
        .route("/api/google-proxy", get(proxy::google_proxy))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/config", get(client_config));

    Router::new()
        .merge(public_routes)
        .merge(guarded_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let places_api = if state.places.is_some() {
        "configured"
    } else {
        "unconfigured"
    };
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            places_api,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        has_api_key: state.config.places_api_key.is_some(),
    })
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}
