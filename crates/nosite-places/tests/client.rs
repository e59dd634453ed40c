//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use nosite_core::{Category, Coordinate};
use nosite_places::{ApiStatus, PlacesApi, PlacesClient, PlacesError, DETAIL_FIELDS};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "nosite-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn geocode_lookup_returns_first_coordinate() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "Springfield, IL, USA",
                "geometry": { "location": { "lat": 39.7817, "lng": -89.6501 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Springfield, IL"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .geocode_lookup("Springfield, IL")
        .await
        .expect("should parse geocode response");

    assert_eq!(response.status, ApiStatus::Ok);
    assert_eq!(
        response.first_coordinate(),
        Some(Coordinate::new(39.7817, -89.6501))
    );
}

#[tokio::test]
async fn geocode_lookup_passes_zero_results_through_as_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .geocode_lookup("Nowhereville123")
        .await
        .expect("a ZERO_RESULTS envelope is not a transport error");

    assert_eq!(response.status, ApiStatus::ZeroResults);
    assert_eq!(response.first_coordinate(), None);
}

#[tokio::test]
async fn nearby_search_sends_location_radius_and_type() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "p-1",
                "name": "Rosie's Bakery",
                "vicinity": "1 Main St",
                "geometry": { "location": { "lat": 40.001, "lng": -75.0 } }
            },
            { "place_id": "p-2" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "40,-75"))
        .and(query_param("radius", "1000"))
        .and(query_param("type", "bakery"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .nearby_search(Coordinate::new(40.0, -75.0), 1000.0, Category::Bakery)
        .await
        .expect("should parse nearby results");

    assert_eq!(response.status, ApiStatus::Ok);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].name.as_deref(), Some("Rosie's Bakery"));
    assert!(response.results[1].geometry.is_none());
}

#[tokio::test]
async fn place_details_requests_fixed_field_list() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Rosie's Bakery",
            "formatted_phone_number": "(555) 010-0100",
            "formatted_address": "1 Main St, Springfield",
            "geometry": { "location": { "lat": 40.001, "lng": -75.0 } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "p-1"))
        .and(query_param("fields", DETAIL_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .place_details("p-1")
        .await
        .expect("should parse details");

    let result = response.result.expect("result present");
    assert_eq!(result.formatted_phone_number.as_deref(), Some("(555) 010-0100"));
    assert!(result.website.is_none());
}

#[tokio::test]
async fn http_429_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .place_details("p-1")
        .await
        .expect_err("429 should be an error");

    assert!(matches!(err, PlacesError::RateLimited), "got {err:?}");
}

#[tokio::test]
async fn non_success_status_names_endpoint_without_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .geocode_lookup("Springfield")
        .await
        .expect_err("403 should be an error");

    match &err {
        PlacesError::UnexpectedStatus { status, endpoint } => {
            assert_eq!(*status, 403);
            assert_eq!(endpoint, "geocode/json");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(Coordinate::new(0.0, 0.0), 500.0, Category::Cafe)
        .await
        .expect_err("html body should not parse");

    assert!(matches!(err, PlacesError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn details_retries_server_errors_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_retry_policy(2, 0);
    let response = client
        .place_details("gone")
        .await
        .expect("second attempt should succeed");

    assert_eq!(response.status, ApiStatus::Other("NOT_FOUND".to_string()));
    assert!(response.result.is_none());
}

#[tokio::test]
async fn geocode_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_retry_policy(3, 0);
    let err = client
        .geocode_lookup("Springfield")
        .await
        .expect_err("500 should be an error");

    assert!(matches!(
        err,
        PlacesError::UnexpectedStatus { status: 500, .. }
    ));
}
