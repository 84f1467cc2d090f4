//! Unit conversions used when deriving paired imperial/metric fields
//!
//! Every derived field in a synthetic record is computed from the same
//! sampled base value through these exact formulas, so paired fields always
//! describe the same physical quantity.

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert miles per hour to kilometers per hour
pub fn mph_to_kph(mph: f64) -> f64 {
    mph * 1.609
}

/// Convert millibars to inches of mercury
pub fn mb_to_in_hg(mb: f64) -> f64 {
    mb * 0.02953
}

/// Convert kilometers to miles
pub fn km_to_miles(km: f64) -> f64 {
    km * 0.621371
}
