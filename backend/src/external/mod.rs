//! External API integrations

pub mod geocode;
pub mod weather;

pub use geocode::GeocodeClient;
pub use weather::WeatherClient;
