//! Mapping of the `forecast.json` payload onto domain types.
//!
//! Every required field is looked up explicitly so that a missing or
//! ill-typed one is reported by its path, e.g. `current.vis_km`.

use chrono::DateTime;
use serde_json::Value;

use streetlamp_domain::error::SchemaError;
use streetlamp_domain::weather::{AstronomyWindow, WeatherReading, WeatherReport};

/// Build a [`WeatherReport`] from a decoded `forecast.json` body.
///
/// # Errors
///
/// Returns [`SchemaError`] naming the first missing or ill-typed field.
pub fn parse_forecast(body: &Value, location: &str) -> Result<WeatherReport, SchemaError> {
    let reading = WeatherReading {
        temperature_c: number(body, "current", "temp_c")?,
        humidity: number(body, "current", "humidity")?,
        precipitation_mm: number(body, "current", "precip_mm")?,
        cloud_cover: number(body, "current", "cloud")?,
        visibility_km: number(body, "current", "vis_km")?,
        uv_index: number(body, "current", "uv")?,
        observed_at: observed_at(body)?,
    };

    let astronomy = AstronomyWindow {
        sunrise: astro(body, "sunrise")?,
        sunset: astro(body, "sunset")?,
    };

    Ok(WeatherReport {
        reading,
        astronomy,
        location: location.to_string(),
    })
}

fn number(body: &Value, section: &str, field: &str) -> Result<f64, SchemaError> {
    body.get(section)
        .and_then(|s| s.get(field))
        .and_then(Value::as_f64)
        .ok_or_else(|| SchemaError::new(format!("{section}.{field}")))
}

fn observed_at(body: &Value) -> Result<streetlamp_domain::time::Timestamp, SchemaError> {
    let field = || SchemaError::new("current.last_updated_epoch");
    let epoch = body
        .pointer("/current/last_updated_epoch")
        .and_then(Value::as_i64)
        .ok_or_else(field)?;
    DateTime::from_timestamp(epoch, 0).ok_or_else(field)
}

fn astro(body: &Value, field: &str) -> Result<String, SchemaError> {
    body.pointer(&format!("/forecast/forecastday/0/astro/{field}"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SchemaError::new(format!("forecast.forecastday[0].astro.{field}")))
}
