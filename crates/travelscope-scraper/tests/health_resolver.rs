//! Integration tests for `HealthResolver::resolve`.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use travelscope_core::HealthLevel;
use travelscope_scraper::{AdvisoryError, HealthResolution, HealthResolver, PageFetcher};

fn resolver_for(base_url: &str) -> HealthResolver {
    let fetcher = PageFetcher::new(5, "travelscope-test/0.1").expect("failed to build fetcher");
    HealthResolver::new(fetcher, base_url)
}

const BURMA_PAGE: &str = "<html><head><title>Burma (Myanmar) - Traveler view</title></head>\
    <body><main><h1>Health Information for Travelers to Burma (Myanmar)</h1>\
    <h3>Travel Health Notices</h3>\
    <p>Level 3 - Reconsider Nonessential Travel: Outbreak response ongoing</p>\
    <h2>Vaccines and Medicines</h2></main></body></html>";

#[tokio::test]
async fn destination_page_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel/destinations/traveler/none/burma"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BURMA_PAGE))
        .mount(&server)
        .await;

    let resolution = resolver_for(&server.uri()).resolve("myanmar").await.unwrap();

    let HealthResolution::Found(found) = resolution else {
        panic!("expected Found, got {resolution:?}");
    };
    assert_eq!(found.source, "cdc_destination");
    assert_eq!(found.slug_used, "burma");
    assert!(found.url.ends_with("/travel/destinations/traveler/none/burma"));
    assert!(found.data.has_vaccine_section);
    assert!(found.data.has_notice_section);
    assert_eq!(found.data.notices.len(), 1);
    assert_eq!(
        found.data.notices[0].level,
        HealthLevel::ReconsiderNonessentialTravel
    );

    let json = serde_json::to_value(&found).expect("serialize");
    assert_eq!(json["slugUsed"], "burma");
    assert_eq!(json["data"]["summary"]["status"], "warning");
}

#[tokio::test]
async fn missing_destination_is_not_found() {
    let server = MockServer::start().await;

    let resolution = resolver_for(&server.uri()).resolve("atlantis").await.unwrap();

    assert_eq!(
        resolution,
        HealthResolution::NotFound {
            slug: "atlantis".to_string()
        }
    );
}

#[tokio::test]
async fn invalid_slug_is_rejected() {
    let server = MockServer::start().await;

    let result = resolver_for(&server.uri()).resolve("").await;

    assert!(matches!(result, Err(AdvisoryError::InvalidSlug { .. })));
}
