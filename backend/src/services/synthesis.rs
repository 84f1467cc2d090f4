//! Synthetic weather data generation
//!
//! When the upstream provider is unreachable, returns a non-JSON body, or
//! reports an error, the handlers answer with data produced here. The output
//! is shaped exactly like the provider's schema and tagged with the
//! `_isMockData` marker so the presentation layer can tell it apart.
//!
//! All sampling goes through an injected [`rand::Rng`]: handlers pass a
//! thread-local generator, tests pass a seeded `StdRng` and assert exact
//! values. The `_at` variants additionally take the reference instant, which
//! the plain variants fill with `Utc::now()`.

use chrono::{DateTime, Timelike, Utc};
use rand::Rng;

use crate::models::{
    Astro, Condition, Current, Day, Forecast, ForecastDay, ForecastPayload, Hour, Location,
    WeatherPayload,
};
use crate::services::units::{celsius_to_fahrenheit, km_to_miles, mb_to_in_hg, mph_to_kph};

/// Reference coordinates used when the caller supplies none (central London)
pub const DEFAULT_LATITUDE: f64 = 51.5085;
pub const DEFAULT_LONGITUDE: f64 = -0.1257;

/// Placeholder icon attached to every synthetic condition
pub const PLACEHOLDER_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/116.png";

/// Synthetic forecasts always cover exactly this many days
pub const FORECAST_DAYS: usize = 3;

/// One entry of the closed condition catalog
#[derive(Debug, Clone, Copy)]
pub struct ConditionSpec {
    pub text: &'static str,
    pub code: i32,
    pub nominal_temp_c: f64,
}

/// The closed catalog of synthetic weather conditions
pub const CONDITION_CATALOG: [ConditionSpec; 4] = [
    ConditionSpec {
        text: "Sunny",
        code: 1000,
        nominal_temp_c: 22.0,
    },
    ConditionSpec {
        text: "Partly cloudy",
        code: 1003,
        nominal_temp_c: 18.0,
    },
    ConditionSpec {
        text: "Light rain",
        code: 1183,
        nominal_temp_c: 15.0,
    },
    ConditionSpec {
        text: "Snow",
        code: 1210,
        nominal_temp_c: 2.0,
    },
];

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Moon phase catalog for the astro record
pub const MOON_PHASES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Synthesize a current-conditions payload for "now". Always succeeds.
pub fn synthesize_current<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    lat: Option<f64>,
    lon: Option<f64>,
) -> WeatherPayload {
    synthesize_current_at(rng, name, lat, lon, Utc::now())
}

/// Synthesize a current-conditions payload anchored at `now`
pub fn synthesize_current_at<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    lat: Option<f64>,
    lon: Option<f64>,
    now: DateTime<Utc>,
) -> WeatherPayload {
    let spec = pick_condition(rng);

    let temp_c = spec.nominal_temp_c + rng.random_range(-3.0..3.0);
    let feelslike_c = spec.nominal_temp_c + rng.random_range(-2.0..2.0);
    let wind_mph = 5.0 + rng.random_range(0.0..15.0);
    let pressure_mb: i32 = 1013 + rng.random_range(-10..10);
    let pressure_mb = f64::from(pressure_mb);
    let vis_km = 10.0 + rng.random_range(0.0..15.0);
    let gust_mph = 8.0 + rng.random_range(0.0..20.0);

    let current = Current {
        last_updated_epoch: now.timestamp(),
        last_updated: format_minute(now),
        temp_c,
        temp_f: celsius_to_fahrenheit(temp_c),
        is_day: day_flag(now.hour()),
        condition: condition_record(spec),
        wind_mph,
        wind_kph: mph_to_kph(wind_mph),
        wind_degree: rng.random_range(0..360),
        wind_dir: COMPASS_POINTS[rng.random_range(0..COMPASS_POINTS.len())].to_string(),
        pressure_mb,
        pressure_in: mb_to_in_hg(pressure_mb),
        precip_mm: rng.random_range(0.0..5.0),
        precip_in: rng.random_range(0.0..0.2),
        humidity: 45 + rng.random_range(0..30),
        cloud: rng.random_range(0..100),
        feelslike_c,
        feelslike_f: celsius_to_fahrenheit(feelslike_c),
        vis_km,
        vis_miles: km_to_miles(vis_km),
        uv: rng.random_range(0.0..10.0),
        gust_mph,
        gust_kph: mph_to_kph(gust_mph),
    };

    WeatherPayload {
        location: synthetic_location(name, lat, lon, now),
        current,
        is_mock_data: true,
    }
}

/// Synthesize a 3-day forecast payload. Always succeeds.
pub fn synthesize_forecast<R: Rng + ?Sized>(rng: &mut R, name: &str) -> ForecastPayload {
    synthesize_forecast_at(rng, name, Utc::now())
}

/// Synthesize a 3-day forecast payload anchored at `now`
pub fn synthesize_forecast_at<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    now: DateTime<Utc>,
) -> ForecastPayload {
    // One base draw shared across all days; each day jitters it independently.
    let base_temp = 15.0 + rng.random_range(0.0..10.0);

    let forecastday = (0..FORECAST_DAYS as i64)
        .map(|day_index| synthesize_day(rng, now, day_index, base_temp))
        .collect();

    ForecastPayload {
        location: synthetic_location(name, None, None, now),
        forecast: Forecast { forecastday },
        is_mock_data: true,
    }
}

fn synthesize_day<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    day_index: i64,
    base_temp: f64,
) -> ForecastDay {
    // The headline condition and the per-hour conditions are sampled
    // independently of each other. Known quirk carried over from the
    // previous implementation; product has not asked for them to agree.
    let headline = pick_condition(rng);
    let day_temp = base_temp + rng.random_range(-3.0..3.0);

    let hour = (0..24)
        .map(|h| synthesize_hour(rng, now, day_index, h, day_temp))
        .collect();

    let maxwind_mph = 15.0 + rng.random_range(0.0..10.0);
    let avgvis_km = 12.0 + rng.random_range(0.0..8.0);

    // Aggregates are fixed offsets from the day temperature, not recomputed
    // from the generated hours.
    let day = Day {
        maxtemp_c: day_temp + 4.0,
        maxtemp_f: celsius_to_fahrenheit(day_temp + 4.0),
        mintemp_c: day_temp - 3.0,
        mintemp_f: celsius_to_fahrenheit(day_temp - 3.0),
        avgtemp_c: day_temp,
        avgtemp_f: celsius_to_fahrenheit(day_temp),
        maxwind_mph,
        maxwind_kph: mph_to_kph(maxwind_mph),
        totalprecip_mm: rng.random_range(0.0..10.0),
        totalprecip_in: rng.random_range(0.0..0.4),
        totalsnow_cm: rng.random_range(0.0..2.0),
        avgvis_km,
        avgvis_miles: km_to_miles(avgvis_km),
        avghumidity: 50 + rng.random_range(0..30),
        daily_will_it_rain: i32::from(rng.random::<f64>() > 0.6),
        daily_chance_of_rain: rng.random_range(0..100),
        daily_will_it_snow: i32::from(rng.random::<f64>() > 0.9),
        daily_chance_of_snow: rng.random_range(0..20),
        condition: condition_record(headline),
        uv: rng.random_range(0.0..10.0),
    };

    let astro = Astro {
        sunrise: "06:30 AM".to_string(),
        sunset: "07:45 PM".to_string(),
        moonrise: "09:15 PM".to_string(),
        moonset: "05:30 AM".to_string(),
        moon_phase: MOON_PHASES[rng.random_range(0..MOON_PHASES.len())].to_string(),
        moon_illumination: rng.random_range(0..100),
        is_moon_up: i32::from(rng.random::<f64>() > 0.5),
        is_sun_up: 1,
    };

    let date_epoch = now.timestamp() + day_index * SECONDS_PER_DAY;
    let date = DateTime::from_timestamp(date_epoch, 0)
        .unwrap_or(now)
        .format("%Y-%m-%d")
        .to_string();

    ForecastDay {
        date,
        date_epoch,
        day,
        astro,
        hour,
    }
}

fn synthesize_hour<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    day_index: i64,
    hour: u32,
    day_temp: f64,
) -> Hour {
    let spec = pick_condition(rng);

    // Sinusoidal intraday variation on top of the per-day base temperature.
    let temp_c = day_temp + 5.0 * (f64::from(hour) * 0.26).sin();
    let feelslike_c = temp_c + rng.random_range(-1.0..1.0);
    let wind_mph = 5.0 + rng.random_range(0.0..15.0);
    let pressure_mb: i32 = 1013 + rng.random_range(-10..10);
    let pressure_mb = f64::from(pressure_mb);
    let vis_km = 10.0 + rng.random_range(0.0..15.0);
    let gust_mph = 8.0 + rng.random_range(0.0..20.0);

    let time_epoch =
        now.timestamp() + day_index * SECONDS_PER_DAY + i64::from(hour) * SECONDS_PER_HOUR;
    let time = DateTime::from_timestamp(time_epoch, 0)
        .map(format_minute)
        .unwrap_or_default();

    Hour {
        time_epoch,
        time,
        temp_c,
        temp_f: celsius_to_fahrenheit(temp_c),
        is_day: day_flag(hour),
        condition: condition_record(spec),
        wind_mph,
        wind_kph: mph_to_kph(wind_mph),
        wind_degree: rng.random_range(0..360),
        wind_dir: COMPASS_POINTS[rng.random_range(0..COMPASS_POINTS.len())].to_string(),
        pressure_mb,
        pressure_in: mb_to_in_hg(pressure_mb),
        precip_mm: rng.random_range(0.0..5.0),
        precip_in: rng.random_range(0.0..0.2),
        humidity: 45 + rng.random_range(0..30),
        cloud: rng.random_range(0..100),
        feelslike_c,
        feelslike_f: celsius_to_fahrenheit(feelslike_c),
        windchill_c: temp_c - 2.0,
        windchill_f: celsius_to_fahrenheit(temp_c - 2.0),
        heatindex_c: temp_c + 1.0,
        heatindex_f: celsius_to_fahrenheit(temp_c + 1.0),
        dewpoint_c: temp_c - 5.0,
        dewpoint_f: celsius_to_fahrenheit(temp_c - 5.0),
        will_it_rain: i32::from(rng.random::<f64>() > 0.7),
        chance_of_rain: rng.random_range(0..100),
        will_it_snow: i32::from(rng.random::<f64>() > 0.9),
        chance_of_snow: rng.random_range(0..20),
        vis_km,
        vis_miles: km_to_miles(vis_km),
        gust_mph,
        gust_kph: mph_to_kph(gust_mph),
        uv: rng.random_range(0.0..10.0),
    }
}

fn pick_condition<R: Rng + ?Sized>(rng: &mut R) -> &'static ConditionSpec {
    &CONDITION_CATALOG[rng.random_range(0..CONDITION_CATALOG.len())]
}

fn condition_record(spec: &ConditionSpec) -> Condition {
    Condition {
        text: spec.text.to_string(),
        icon: PLACEHOLDER_ICON.to_string(),
        code: spec.code,
    }
}

fn synthetic_location(
    name: &str,
    lat: Option<f64>,
    lon: Option<f64>,
    now: DateTime<Utc>,
) -> Location {
    Location {
        name: name.to_string(),
        region: String::new(),
        country: "GB".to_string(),
        lat: lat.unwrap_or(DEFAULT_LATITUDE),
        lon: lon.unwrap_or(DEFAULT_LONGITUDE),
        tz_id: "Europe/London".to_string(),
        localtime_epoch: now.timestamp(),
        localtime: format_minute(now),
    }
}

/// Daylight flag: 1 iff the hour falls strictly between 06:00 and 20:00
fn day_flag(hour: u32) -> i32 {
    i32::from(hour > 6 && hour < 20)
}

fn format_minute(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
