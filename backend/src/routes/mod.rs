//! Route definitions for the SkyView Weather Proxy

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Current conditions (city XOR lat+lon)
        .route("/weather", get(handlers::current_weather))
        // Multi-day forecast (same location rules, optional days)
        .route("/forecast", get(handlers::forecast))
        // City name to coordinates
        .route("/geocode", get(handlers::geocode_city))
}
