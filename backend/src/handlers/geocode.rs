//! HTTP handler for the geocoding endpoint
//!
//! Degradation is keyed on the provider's status: 401 (bad or absent API
//! key) answers from a small static table of well-known cities, any other
//! non-success status propagates to the caller, and transport failures
//! become a 500.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::external::geocode::GeocodeOutcome;
use crate::models::GeoCity;
use crate::services::synthesis::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::AppState;

/// Query parameters for the geocoding endpoint
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub city: Option<String>,
}

/// Resolve a city name to candidate coordinates
pub async fn geocode_city(
    State(state): State<AppState>,
    Query(params): Query<GeocodeQuery>,
) -> AppResult<Json<Value>> {
    let city = params
        .city
        .as_deref()
        .filter(|city| !city.is_empty())
        .ok_or(AppError::MissingCity)?;

    match state.geocode.lookup(city).await {
        Ok(GeocodeOutcome::Results(body)) => Ok(Json(body)),
        Ok(GeocodeOutcome::Unauthorized) => {
            tracing::warn!(city, "geocoding provider rejected the API key, serving static table");
            let results = static_city_results(city);
            Ok(Json(serde_json::to_value(results).map_err(anyhow::Error::from)?))
        }
        Ok(GeocodeOutcome::Failed(status)) => {
            tracing::warn!(city, status, "geocoding provider returned an error status");
            Err(AppError::GeocodeUpstream { status })
        }
        Err(err) => {
            tracing::error!(city, error = %err, "geocoding request failed");
            Err(AppError::GeocodeTransport(err))
        }
    }
}

/// Static lookup table used when the provider rejects the API key. Unknown
/// names fall back to a single entry at the reference coordinates.
fn static_city_results(city: &str) -> Vec<GeoCity> {
    let entry = |name: &str, lat: f64, lon: f64, country: &str, state: &str| GeoCity {
        name: name.to_string(),
        lat,
        lon,
        country: country.to_string(),
        state: Some(state.to_string()),
    };

    match city.to_lowercase().as_str() {
        "london" => vec![entry("London", 51.5085, -0.1257, "GB", "England")],
        "new york" => vec![entry("New York", 40.7128, -74.006, "US", "New York")],
        "paris" => vec![entry("Paris", 48.8566, 2.3522, "FR", "Île-de-France")],
        "tokyo" => vec![entry("Tokyo", 35.6762, 139.6503, "JP", "Tokyo")],
        "sydney" => vec![entry("Sydney", -33.8688, 151.2093, "AU", "New South Wales")],
        _ => vec![GeoCity {
            name: city.to_string(),
            lat: DEFAULT_LATITUDE,
            lon: DEFAULT_LONGITUDE,
            country: "GB".to_string(),
            state: None,
        }],
    }
}
