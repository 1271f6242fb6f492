use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::ServiceExt;
use travelscope_scraper::PageFetcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn app_for(upstream: &MockServer, rate_limit: RateLimitState) -> Router {
    let fetcher = PageFetcher::new(5, "travelscope-test/0.1").expect("fetcher");
    let state = AppState {
        advisory: AdvisoryResolver::new(fetcher.clone(), upstream.uri()),
        health: HealthResolver::new(fetcher, upstream.uri()),
    };
    build_app(state, rate_limit)
}

fn generous_limit() -> RateLimitState {
    RateLimitState::new(1_000, Duration::from_secs(60))
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json body");
    (status, headers, json)
}

#[test]
fn api_error_not_found_maps_to_404() {
    let response = ApiError::not_found("missing", "x").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn api_error_internal_omits_slug() {
    let error = ApiError::internal("boom", None);
    let json = serde_json::to_value(&error).expect("serialize");
    assert_eq!(json, serde_json::json!({ "error": "boom" }));
}

#[tokio::test]
async fn liveness_endpoint_reports_ok() {
    let upstream = MockServer::start().await;
    let (status, headers, json) = get(app_for(&upstream, generous_limit()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn advisory_route_returns_fallback_record() {
    let upstream = MockServer::start().await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/advisory/afghanistan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["slugUsed"], "afghanistan");
    assert_eq!(json["data"]["status"], "alert");
    assert_eq!(json["data"]["message"], "Level 4: Do not travel");
    assert_eq!(json["data"]["emoji"], "🚫");
}

#[tokio::test]
async fn advisory_route_returns_live_record() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/content/travel/en/traveladvisories/traveladvisories/portugal-travel-advisory.html",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<h1>Portugal Travel Advisory</h1><p>Level 1: Exercise Normal Precautions</p>",
        ))
        .mount(&upstream)
        .await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/advisory/portugal").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "travel_advisory");
    assert_eq!(json["data"]["status"], "safe");
    assert!(json["url"]
        .as_str()
        .expect("url")
        .ends_with("/portugal-travel-advisory.html"));
}

#[tokio::test]
async fn advisory_route_returns_404_when_exhausted() {
    let upstream = MockServer::start().await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/advisory/nowhereland").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["slug"], "nowhereland");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn advisory_route_returns_500_for_malformed_slug() {
    let upstream = MockServer::start().await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/advisory/bad%20slug").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to resolve travel advisory");
    assert_eq!(json["details"], "invalid location slug");
}

#[tokio::test]
async fn health_route_returns_report() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel/destinations/traveler/none/kenya"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<title>Kenya - Traveler view</title><main><h3>Travel Health Notices</h3>\
             <p>Level 1 - Practice Usual Precautions: Measles</p></main>",
        ))
        .mount(&upstream)
        .await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/health-advisory/kenya").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "cdc_destination");
    assert_eq!(json["slugUsed"], "kenya");
    assert_eq!(json["data"]["title"], "Kenya - Traveler view");
    assert_eq!(json["data"]["hasNoticeSection"], true);
    assert_eq!(json["data"]["notices"][0]["level"], 1);
}

#[tokio::test]
async fn health_route_returns_404_for_unknown_destination() {
    let upstream = MockServer::start().await;

    let (status, _, json) = get(app_for(&upstream, generous_limit()), "/health-advisory/atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["slug"], "atlantis");
}

#[tokio::test]
async fn request_id_header_is_propagated() {
    let upstream = MockServer::start().await;
    let response = app_for(&upstream, generous_limit())
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
}

#[tokio::test]
async fn advisory_routes_are_rate_limited() {
    let upstream = MockServer::start().await;
    let app = app_for(&upstream, RateLimitState::new(1, Duration::from_secs(60)));

    let (first, _, _) = get(app.clone(), "/advisory/afghanistan").await;
    let (second, _, json) = get(app.clone(), "/advisory/afghanistan").await;
    let (liveness, _, _) = get(app, "/api/v1/health").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], "rate limit exceeded");
    assert_eq!(liveness, StatusCode::OK, "liveness is not rate limited");
}
