//! SkyView Weather Proxy - Backend Library
//!
//! Serves current conditions, multi-day forecasts, and city geocoding by
//! proxying upstream providers, with locally synthesized fallback data when
//! the weather provider is unavailable.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{geocode::GeocodeClient, weather::WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub geocode: GeocodeClient,
}

impl AppState {
    /// Build state with clients pointed at the configured upstream endpoints
    pub fn new(config: Config) -> Self {
        let weather = WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        let geocode = GeocodeClient::with_base_url(
            config.geocode.api_key.clone(),
            config.geocode.api_endpoint.clone(),
        );
        Self {
            config: Arc::new(config),
            weather,
            geocode,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "SkyView Weather API v1.0"
}
