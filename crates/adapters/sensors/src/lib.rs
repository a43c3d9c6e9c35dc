//! # streetlamp-adapter-sensors
//!
//! Backends for the health sensor port.
//!
//! ## Provided backends
//!
//! | Backend | Reading |
//! |---------|---------|
//! | `simulated` | Uniform draw in `[min_temp_c, max_temp_c]`, rounded to 0.1 °C |
//! | `thermal_zone` | Millidegrees from a sysfs file such as `/sys/class/thermal/thermal_zone0/temp` |
//! | `fixed` | A constant, for demos and bench tests |
//!
//! ## Dependency rule
//!
//! Depends on `streetlamp-app` (port traits) and `streetlamp-domain` only.

mod error;
mod simulated;
mod thermal_zone;

use std::path::PathBuf;

use serde::Deserialize;

use streetlamp_app::ports::HealthSensor;
use streetlamp_domain::error::StreetlampError;

pub use error::SensorError;
pub use simulated::{DEFAULT_MAX_TEMP_C, DEFAULT_MIN_TEMP_C, SimulatedSensor};
pub use thermal_zone::{DEFAULT_THERMAL_ZONE_PATH, ThermalZoneSensor};

/// Which sensor backend to use, with its settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum SensorConfig {
    Simulated {
        #[serde(default = "default_min_temp_c")]
        min_temp_c: f64,
        #[serde(default = "default_max_temp_c")]
        max_temp_c: f64,
    },
    ThermalZone {
        #[serde(default = "default_thermal_zone_path")]
        path: PathBuf,
    },
    Fixed {
        temp_c: f64,
    },
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::Simulated {
            min_temp_c: DEFAULT_MIN_TEMP_C,
            max_temp_c: DEFAULT_MAX_TEMP_C,
        }
    }
}

fn default_min_temp_c() -> f64 {
    DEFAULT_MIN_TEMP_C
}

fn default_max_temp_c() -> f64 {
    DEFAULT_MAX_TEMP_C
}

fn default_thermal_zone_path() -> PathBuf {
    PathBuf::from(DEFAULT_THERMAL_ZONE_PATH)
}

/// Always reports the same temperature.
#[derive(Debug, Clone, Copy)]
pub struct FixedSensor(pub f64);

impl HealthSensor for FixedSensor {
    async fn read_temperature_c(&self) -> Result<f64, StreetlampError> {
        Ok(self.0)
    }
}

/// Wrapper enum over the concrete backends, selected by configuration.
pub enum SensorBackend {
    Simulated(SimulatedSensor),
    ThermalZone(ThermalZoneSensor),
    Fixed(FixedSensor),
}

impl SensorBackend {
    /// Build the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Range`] for an invalid simulated range.
    pub fn from_config(config: &SensorConfig) -> Result<Self, SensorError> {
        let backend = match config {
            SensorConfig::Simulated {
                min_temp_c,
                max_temp_c,
            } => Self::Simulated(SimulatedSensor::new(*min_temp_c, *max_temp_c)?),
            SensorConfig::ThermalZone { path } => Self::ThermalZone(ThermalZoneSensor::new(path)),
            SensorConfig::Fixed { temp_c } => Self::Fixed(FixedSensor(*temp_c)),
        };
        Ok(backend)
    }

    /// Backend name as used in configuration.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simulated(_) => "simulated",
            Self::ThermalZone(_) => "thermal_zone",
            Self::Fixed(_) => "fixed",
        }
    }
}

impl HealthSensor for SensorBackend {
    async fn read_temperature_c(&self) -> Result<f64, StreetlampError> {
        match self {
            Self::Simulated(s) => s.read_temperature_c().await,
            Self::ThermalZone(s) => s.read_temperature_c().await,
            Self::Fixed(s) => s.read_temperature_c().await,
        }
    }
}
