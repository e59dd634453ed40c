use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "nosite-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_joins_endpoint_and_appends_key() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client.build_url(GEOCODE_ENDPOINT, &[("address", "Springfield")]);
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/geocode/json?address=Springfield&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client.build_url(DETAILS_ENDPOINT, &[("place_id", "abc")]);
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?place_id=abc&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client.build_url(GEOCODE_ENDPOINT, &[("address", "Main St & 5th, Town")]);
    assert!(
        url.as_str().contains("Main+St+%26+5th%2C+Town"),
        "address should be form-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 5, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn retry_policy_is_opt_in() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    assert_eq!(client.retry, RetryPolicy::default());
    let client = client.with_retry_policy(3, 100);
    assert_eq!(client.retry, RetryPolicy::new(3, 100));
}

#[test]
fn from_app_config_applies_base_url_and_retry_policy() {
    let config = nosite_core::AppConfig {
        env: nosite_core::Environment::Test,
        bind_addr: "127.0.0.1:3000".parse().expect("valid addr"),
        log_level: "info".to_string(),
        places_api_key: Some("cfg-key".to_string()),
        places_base_url: "http://127.0.0.1:9999/maps/api".to_string(),
        request_timeout_secs: 5,
        user_agent: "nosite-test/0.1".to_string(),
        max_retries: 4,
        retry_backoff_base_ms: 250,
        inter_request_delay_ms: 0,
        max_concurrent_categories: 1,
        state_path: std::path::PathBuf::from("unused.json"),
    };

    let client = PlacesClient::from_app_config("cfg-key", &config).expect("client from config");
    assert_eq!(client.retry, RetryPolicy::new(4, 250));
    assert_eq!(
        client.build_url(NEARBY_ENDPOINT, &[]).as_str(),
        "http://127.0.0.1:9999/maps/api/place/nearbysearch/json?key=cfg-key"
    );
}
