//! Configuration management for the SkyView Weather Proxy
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SKYVIEW_ prefix
//!
//! Upstream API keys are deliberately absent from the defaults: they are
//! deployment secrets supplied through the environment
//! (SKYVIEW_WEATHER__API_KEY, SKYVIEW_GEOCODE__API_KEY). The service still
//! boots without them and answers from the synthetic fallback.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Geocoding provider configuration
    pub geocode: GeocodeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodeConfig {
    /// Geocoding API base URL
    pub api_endpoint: String,

    /// Geocoding API key
    pub api_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SKYVIEW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.weatherapi.com/v1")?
            .set_default("weather.api_key", "")?
            .set_default(
                "geocode.api_endpoint",
                "https://api.openweathermap.org/geo/1.0",
            )?
            .set_default("geocode.api_key", "")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SKYVIEW_ prefix)
            .add_source(
                Environment::with_prefix("SKYVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
