//! Weather API client for fetching current conditions and forecasts
//!
//! Integrates with WeatherAPI.com. Instead of a plain `Result`, each fetch
//! resolves to a [`FetchOutcome`] so the fallback state machine stays
//! explicit: non-JSON body, provider-reported error, and transport failure
//! are distinct terminal outcomes the handlers map to synthetic data.

use reqwest::{header, Client};
use serde_json::Value;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Terminal outcome of one upstream fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Upstream answered with a well-formed JSON body; pass it through as-is
    Upstream(Value),

    /// Upstream answered, but the declared content type is not JSON
    NonJsonBody,

    /// Upstream answered with JSON carrying an explicit error indicator
    ProviderError(Value),

    /// The request itself failed (DNS, connection, timeout, decode)
    Transport(reqwest::Error),
}

impl WeatherClient {
    /// Create a new WeatherClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.weatherapi.com/v1".to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions for a location query (city name or "lat,lon")
    pub async fn fetch_current(&self, query: &str) -> FetchOutcome {
        let url = format!("{}/current.json", self.base_url);
        self.fetch(&url, &[("key", self.api_key.as_str()), ("q", query), ("aqi", "yes")])
            .await
    }

    /// Fetch a forecast for a location query and a day count
    pub async fn fetch_forecast(&self, query: &str, days: &str) -> FetchOutcome {
        let url = format!("{}/forecast.json", self.base_url);
        self.fetch(
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", days),
                ("aqi", "yes"),
                ("alerts", "no"),
            ],
        )
        .await
    }

    async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> FetchOutcome {
        let response = match self
            .client
            .get(url)
            .query(params)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return FetchOutcome::Transport(err),
        };

        let declares_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if !declares_json {
            return FetchOutcome::NonJsonBody;
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(err) => return FetchOutcome::Transport(err),
        };

        if body.get("error").is_some() {
            return FetchOutcome::ProviderError(body);
        }

        FetchOutcome::Upstream(body)
    }
}
