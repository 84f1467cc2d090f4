//! Response payload models for the SkyView Weather Proxy
//!
//! These records mirror the WeatherAPI.com response schema field-for-field:
//! the presentation layer consumes real upstream bodies and synthetic ones
//! interchangeably, so the serialized names here must match the provider's
//! exactly. Every record is constructed fresh per request and never mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// Resolved location attached to every weather payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

/// Weather condition drawn from the fixed four-entry catalog in synthetic mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

/// Current conditions snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Current {
    pub last_updated_epoch: i64,
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: i32,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: i32,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
}

/// One hour within a forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hour {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: i32,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: i32,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub windchill_c: f64,
    pub windchill_f: f64,
    pub heatindex_c: f64,
    pub heatindex_f: f64,
    pub dewpoint_c: f64,
    pub dewpoint_f: f64,
    pub will_it_rain: i32,
    pub chance_of_rain: i32,
    pub will_it_snow: i32,
    pub chance_of_snow: i32,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
    pub uv: f64,
}

/// Day-level aggregates for a forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub maxwind_mph: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub totalprecip_in: f64,
    pub totalsnow_cm: f64,
    pub avgvis_km: f64,
    pub avgvis_miles: f64,
    pub avghumidity: i32,
    pub daily_will_it_rain: i32,
    pub daily_chance_of_rain: i32,
    pub daily_will_it_snow: i32,
    pub daily_chance_of_snow: i32,
    pub condition: Condition,
    pub uv: f64,
}

/// Astronomy data for a forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: i32,
    pub is_moon_up: i32,
    pub is_sun_up: i32,
}

/// One forecast day: aggregates, astronomy, and 24 hourly records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub date_epoch: i64,
    pub day: Day,
    pub astro: Astro,
    pub hour: Vec<Hour>,
}

/// Container for the ordered forecast days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// Current-weather endpoint response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub location: Location,
    pub current: Current,
    #[serde(rename = "_isMockData")]
    pub is_mock_data: bool,
}

/// Forecast endpoint response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: Location,
    pub forecast: Forecast,
    #[serde(rename = "_isMockData")]
    pub is_mock_data: bool,
}

/// Geocoding result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoCity {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
