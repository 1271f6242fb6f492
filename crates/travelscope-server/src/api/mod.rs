mod advisory;
mod health_advisory;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use travelscope_scraper::{AdvisoryError, AdvisoryResolver, HealthResolver};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState};

#[derive(Clone)]
pub struct AppState {
    pub advisory: AdvisoryResolver,
    pub health: HealthResolver,
}

/// Error body returned by advisory routes.
///
/// Not-found responses carry the requested `slug`; internal failures carry a
/// short `details` string and never the underlying error chain.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn not_found(error: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: error.into(),
            slug: Some(slug.into()),
            details: None,
        }
    }

    pub fn internal(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
            slug: None,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

pub(super) fn map_resolver_error(request_id: &str, message: &str, error: &AdvisoryError) -> ApiError {
    tracing::error!(request_id, error = %error, "{message}");
    let details = match error {
        AdvisoryError::InvalidSlug { .. } => "invalid location slug",
        AdvisoryError::Http(_) => "upstream client unavailable",
    };
    ApiError::internal(message, Some(details.to_string()))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn advisory_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/advisory/{slug}", get(advisory::get_advisory))
        .route(
            "/health-advisory/{slug}",
            get(health_advisory::get_health_advisory),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(advisory_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
