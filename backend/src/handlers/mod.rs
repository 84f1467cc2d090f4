//! HTTP handlers for the SkyView Weather Proxy

pub mod geocode;
pub mod health;
pub mod weather;

pub use geocode::geocode_city;
pub use health::health_check;
pub use weather::{current_weather, forecast};
