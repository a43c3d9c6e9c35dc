//! # streetlamp-adapter-weatherapi
//!
//! Weather provider backed by the [WeatherAPI.com](https://www.weatherapi.com)
//! `forecast.json` endpoint.
//!
//! ## Field mapping
//!
//! | Reading | JSON path |
//! |---------|-----------|
//! | temperature | `current.temp_c` |
//! | humidity | `current.humidity` |
//! | precipitation | `current.precip_mm` |
//! | cloud cover | `current.cloud` |
//! | visibility | `current.vis_km` |
//! | UV index | `current.uv` |
//! | observed at | `current.last_updated_epoch` |
//! | sunrise / sunset | `forecast.forecastday[0].astro.{sunrise,sunset}` |
//!
//! ## Dependency rule
//!
//! Depends on `streetlamp-app` (port traits) and `streetlamp-domain` only.

mod config;
mod error;
mod parser;

use streetlamp_app::ports::WeatherProvider;
use streetlamp_domain::error::StreetlampError;
use streetlamp_domain::weather::WeatherReport;

pub use config::WeatherApiConfig;
pub use error::WeatherApiError;
pub use parser::parse_forecast;

/// HTTP client for the WeatherAPI.com forecast endpoint.
///
/// The request itself is not time-bounded here; the caller wraps
/// [`fetch`](WeatherProvider::fetch) in its own timeout.
pub struct WeatherApiProvider {
    client: reqwest::Client,
    config: WeatherApiConfig,
}

impl WeatherApiProvider {
    /// Build a provider.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherApiError::Http`] if the HTTP client cannot be built
    /// (e.g. no TLS backend).
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("streetlamp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    async fn fetch_report(&self) -> Result<WeatherReport, WeatherApiError> {
        let response = self
            .client
            .get(self.config.forecast_url())
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", self.config.location.as_str()),
                ("days", "1"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %status,
                location = %self.config.location,
                "WeatherAPI request rejected"
            );
            return Err(WeatherApiError::Status(status));
        }

        let body = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&body).map_err(WeatherApiError::Body)?;
        let report = parse_forecast(&body, &self.config.location)?;

        tracing::debug!(
            location = %report.location,
            observed_at = %report.reading.observed_at,
            sunrise = %report.astronomy.sunrise,
            sunset = %report.astronomy.sunset,
            "weather report fetched"
        );
        Ok(report)
    }
}

impl WeatherProvider for WeatherApiProvider {
    async fn fetch(&self) -> Result<WeatherReport, StreetlampError> {
        self.fetch_report().await.map_err(|err| {
            tracing::error!(error = %err, "weather fetch failed");
            StreetlampError::from(err)
        })
    }
}
