//! HTTP handlers for the weather and forecast endpoints
//!
//! Both handlers share the same contract: validate the location parameters
//! (a client error, answered with 400 before any upstream call), try the
//! upstream provider, and absorb every upstream failure into a synthetic
//! 200 response so the presentation layer never sees a hard failure here.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::external::weather::FetchOutcome;
use crate::services::synthesis::{synthesize_current, synthesize_forecast};
use crate::AppState;

/// Query parameters accepted by both weather endpoints
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub days: Option<String>,
}

/// Location resolved from the query parameters
struct ResolvedLocation {
    /// Upstream query string: the city name, or "lat,lon"
    query: String,
    /// Display name used for synthetic payloads
    display_name: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Either a city or a full coordinate pair must be present; anything else is
/// a client input error, rejected before any upstream call.
fn resolve_location(params: &WeatherQuery) -> Result<ResolvedLocation, AppError> {
    if let Some(city) = params.city.as_deref().filter(|city| !city.is_empty()) {
        return Ok(ResolvedLocation {
            query: city.to_string(),
            display_name: city.to_string(),
            lat: None,
            lon: None,
        });
    }

    match (params.lat.as_deref(), params.lon.as_deref()) {
        (Some(lat), Some(lon)) => Ok(ResolvedLocation {
            query: format!("{lat},{lon}"),
            display_name: "Current Location".to_string(),
            lat: lat.parse().ok(),
            lon: lon.parse().ok(),
        }),
        _ => Err(AppError::MissingLocation),
    }
}

/// Get current conditions, falling back to synthetic data on upstream failure
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> AppResult<Json<Value>> {
    let location = resolve_location(&params)?;
    tracing::info!(location = %location.display_name, "fetching current weather");

    match state.weather.fetch_current(&location.query).await {
        FetchOutcome::Upstream(body) => {
            tracing::info!("returning upstream current weather");
            Ok(Json(body))
        }
        outcome => {
            log_fallback("current", &outcome);
            let payload = synthesize_current(
                &mut rand::rng(),
                &location.display_name,
                location.lat,
                location.lon,
            );
            Ok(Json(serde_json::to_value(payload).map_err(anyhow::Error::from)?))
        }
    }
}

/// Get a forecast, falling back to synthetic data on upstream failure
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> AppResult<Json<Value>> {
    let location = resolve_location(&params)?;
    let days = params.days.as_deref().unwrap_or("3");
    tracing::info!(location = %location.display_name, days, "fetching forecast");

    match state.weather.fetch_forecast(&location.query, days).await {
        FetchOutcome::Upstream(body) => {
            tracing::info!("returning upstream forecast");
            Ok(Json(body))
        }
        outcome => {
            log_fallback("forecast", &outcome);
            let payload = synthesize_forecast(&mut rand::rng(), &location.display_name);
            Ok(Json(serde_json::to_value(payload).map_err(anyhow::Error::from)?))
        }
    }
}

fn log_fallback(endpoint: &str, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::NonJsonBody => {
            tracing::warn!(endpoint, "upstream returned a non-JSON body, using synthetic data");
        }
        FetchOutcome::ProviderError(body) => {
            tracing::warn!(
                endpoint,
                error = %body["error"],
                "provider reported an error, using synthetic data"
            );
        }
        FetchOutcome::Transport(err) => {
            tracing::warn!(endpoint, error = %err, "upstream request failed, using synthetic data");
        }
        FetchOutcome::Upstream(_) => {}
    }
}
