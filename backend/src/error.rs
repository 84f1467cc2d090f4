//! Error handling for the SkyView Weather Proxy
//!
//! The presentation layer keys on a flat `{"error": "..."}` body, so every
//! error variant renders into that shape. Upstream weather failures never
//! reach this module: they are absorbed by the fallback orchestration in the
//! handlers and answered with synthetic data instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Weather/forecast request carried neither a city nor a coordinate pair
    #[error("City or coordinates are required")]
    MissingLocation,

    /// Geocode request carried no city parameter
    #[error("City parameter is required")]
    MissingCity,

    /// Geocoding provider answered with a non-success status (other than 401,
    /// which degrades to the static city table instead)
    #[error("Geocoding provider returned status {status}")]
    GeocodeUpstream { status: u16 },

    /// Geocoding request failed at the transport level
    #[error("Geocoding request failed: {0}")]
    GeocodeTransport(#[from] reqwest::Error),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingLocation | AppError::MissingCity => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::GeocodeUpstream { status } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to geocode city".to_string(),
            ),
            AppError::GeocodeTransport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to geocode city".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
