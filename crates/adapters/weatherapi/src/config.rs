//! WeatherAPI.com provider configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the WeatherAPI.com provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherApiConfig {
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Account key, sent as the `key` query parameter.
    pub api_key: String,
    /// Location query (`q`): city name, `lat,lon`, postcode, …
    pub location: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weatherapi.com/v1".to_string(),
            api_key: String::new(),
            location: "Kuala Lumpur".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl WeatherApiConfig {
    /// URL of the one-day forecast endpoint.
    #[must_use]
    pub fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = WeatherApiConfig::default();
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
        assert!(config.api_key.is_empty());
        assert_eq!(config.location, "Kuala Lumpur");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn should_build_forecast_url_without_double_slash() {
        let config = WeatherApiConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..WeatherApiConfig::default()
        };
        assert_eq!(config.forecast_url(), "http://localhost:8080/v1/forecast.json");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            api_key = "secret"
            location = "Penang"
        "#;
        let config: WeatherApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.location, "Penang");
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
    }
}
