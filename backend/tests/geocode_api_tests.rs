//! Geocoding endpoint integration tests
//!
//! The geocoding contract degrades by provider status: 401 answers from the
//! static city table, other non-success statuses propagate, and transport
//! failures become a 500.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use skyview_backend::{
    config::{Config, GeocodeConfig, ServerConfig, WeatherConfig},
    create_app, AppState,
};

fn test_app(weather_url: &str, geocode_url: &str) -> Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: weather_url.to_string(),
            api_key: "test-key".to_string(),
        },
        geocode: GeocodeConfig {
            api_endpoint: geocode_url.to_string(),
            api_key: "test-key".to_string(),
        },
    };
    create_app(AppState::new(config))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn dead_upstream() -> String {
    // `MockServer::start()` hands out a pooled server that keeps listening
    // after drop, so bind a raw listener and release its port instead.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn app_with_geocode_status(status: u16) -> (Router, MockServer) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    let app = test_app(&server.uri(), &server.uri());
    (app, server)
}

#[tokio::test]
async fn missing_city_parameter_yields_400() {
    let upstream = dead_upstream().await;
    let app = test_app(&upstream, &upstream);

    let (status, body) = get_json(app, "/api/geocode").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("City parameter is required"));
}

#[tokio::test]
async fn unauthorized_provider_serves_known_city_from_static_table() {
    let (app, _server) = app_with_geocode_status(401).await;

    let (status, body) = get_json(app, "/api/geocode?city=london").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], json!("London"));
    assert_eq!(results[0]["lat"], json!(51.5085));
    assert_eq!(results[0]["lon"], json!(-0.1257));
    assert_eq!(results[0]["country"], json!("GB"));
}

#[tokio::test]
async fn unauthorized_provider_serves_unknown_city_at_reference_coordinates() {
    let (app, _server) = app_with_geocode_status(401).await;

    let (status, body) = get_json(app, "/api/geocode?city=Nowhereville").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], json!("Nowhereville"));
    assert_eq!(results[0]["lat"], json!(51.5085));
    assert_eq!(results[0]["lon"], json!(-0.1257));
}

#[tokio::test]
async fn other_provider_failure_propagates_its_status() {
    let (app, _server) = app_with_geocode_status(404).await;

    let (status, body) = get_json(app, "/api/geocode?city=london").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Failed to geocode city"));
}

#[tokio::test]
async fn provider_server_error_propagates_its_status() {
    let (app, _server) = app_with_geocode_status(503).await;

    let (status, body) = get_json(app, "/api/geocode?city=london").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn transport_failure_yields_500() {
    let upstream = dead_upstream().await;
    let app = test_app(&upstream, &upstream);

    let (status, body) = get_json(app, "/api/geocode?city=london").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Failed to geocode city"));
}

#[tokio::test]
async fn provider_results_pass_through_unmodified() {
    let server = MockServer::start().await;
    let upstream_body = json!([
        { "name": "London", "lat": 51.5074, "lon": -0.1278, "country": "GB", "state": "England" },
        { "name": "London", "lat": 42.9834, "lon": -81.233, "country": "CA", "state": "Ontario" }
    ]);

    Mock::given(method("GET"))
        .and(path("/direct"))
        .and(query_param("q", "london"))
        .and(query_param("limit", "5"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&upstream_body))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), &server.uri());
    let (status, body) = get_json(app, "/api/geocode?city=london").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}
