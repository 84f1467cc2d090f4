//! Geocoding client for resolving city names to coordinates
//!
//! Integrates with the OpenWeatherMap direct geocoding API. The outcome is
//! keyed on the provider's status code: 401 degrades to the static city
//! table in the handler, any other non-success status propagates, and
//! transport failures surface as `Err`.

use reqwest::Client;
use serde_json::Value;

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Outcome of one geocoding lookup
#[derive(Debug)]
pub enum GeocodeOutcome {
    /// Provider answered with a result array; pass it through as-is
    Results(Value),

    /// Provider rejected the API key
    Unauthorized,

    /// Provider answered with some other non-success status
    Failed(u16),
}

impl GeocodeClient {
    /// Create a new GeocodeClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.openweathermap.org/geo/1.0".to_string())
    }

    /// Create a new GeocodeClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Look up up to five candidate locations for a city name
    pub async fn lookup(&self, city: &str) -> Result<GeocodeOutcome, reqwest::Error> {
        let url = format!("{}/direct", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("limit", "5"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(GeocodeOutcome::Unauthorized);
        }
        if !status.is_success() {
            return Ok(GeocodeOutcome::Failed(status.as_u16()));
        }

        let body: Value = response.json().await?;
        Ok(GeocodeOutcome::Results(body))
    }
}
