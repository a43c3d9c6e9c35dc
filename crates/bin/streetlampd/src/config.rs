//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `streetlamp.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use streetlamp_adapter_sensors::SensorConfig;
use streetlamp_adapter_weatherapi::WeatherApiConfig;
use streetlamp_app::services::lamp_control_service::{
    ControlSettings, DEFAULT_PROVIDER_TIMEOUT,
};
use streetlamp_domain::features::{FeatureName, FeatureOrder};
use streetlamp_domain::health::{DEFAULT_MAX_SAFE_TEMP_C, HealthMonitor};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Weather provider settings.
    pub weather: WeatherConfig,
    /// Safety thresholds.
    pub safety: SafetyConfig,
    /// Weather classifier model.
    pub classifier: ClassifierConfig,
    /// Health sensor backend.
    pub health: SensorConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Weather provider configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    #[serde(flatten)]
    pub provider: WeatherApiConfig,
    /// Upper bound on one fetch, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Internal temperature above which the failsafe engages.
    pub max_safe_temp_c: f64,
}

/// Classifier model configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path of the JSON forest model.
    pub model_path: PathBuf,
    /// Feature order the model was trained on.
    pub feature_names: Vec<FeatureName>,
}

impl Config {
    /// Load configuration from `streetlamp.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("streetlamp.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("STREETLAMP_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("STREETLAMP_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("STREETLAMP_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("STREETLAMP_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("STREETLAMP_WEATHER_API_KEY") {
            self.weather.provider.api_key = val;
        }
        if let Some(val) = var("STREETLAMP_LOCATION") {
            self.weather.provider.location = val;
        }
        if let Some(val) = var("STREETLAMP_MODEL_PATH") {
            self.classifier.model_path = PathBuf::from(val);
        }
        if let Some(temp) = var("STREETLAMP_MAX_SAFE_TEMP_C").and_then(|val| val.parse().ok()) {
            self.safety.max_safe_temp_c = temp;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "weather.timeout_secs must be positive".to_string(),
            ));
        }
        self.control_settings()?;
        Ok(())
    }

    /// Decision cycle settings derived from the `safety`, `classifier` and
    /// `weather` sections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Contract`] if the feature list or the safety
    /// ceiling is invalid.
    pub fn control_settings(&self) -> Result<ControlSettings, ConfigError> {
        Ok(ControlSettings {
            feature_order: FeatureOrder::new(&self.classifier.feature_names)?,
            health_monitor: HealthMonitor::new(self.safety.max_safe_temp_c)?,
            provider_timeout: Duration::from_secs(self.weather.timeout_secs),
        })
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "streetlampd=info,streetlamp=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: WeatherApiConfig::default(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT.as_secs(),
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_safe_temp_c: DEFAULT_MAX_SAFE_TEMP_C,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("street_lamp_model.json"),
            feature_names: FeatureName::TRAINED_ORDER.to_vec(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A value violates a domain contract.
    #[error("invalid configuration")]
    Contract(#[from] streetlamp_domain::error::ConfigError),
}
