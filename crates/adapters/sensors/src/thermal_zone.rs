//! Linux thermal-zone sensor: reads the SoC temperature exposed by sysfs.

use std::path::{Path, PathBuf};

use streetlamp_app::ports::HealthSensor;
use streetlamp_domain::error::StreetlampError;

use crate::error::SensorError;

/// First thermal zone, present on most single-board computers.
pub const DEFAULT_THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Reads a sysfs file holding the temperature in millidegrees Celsius.
#[derive(Debug, Clone)]
pub struct ThermalZoneSensor {
    path: PathBuf,
}

impl Default for ThermalZoneSensor {
    fn default() -> Self {
        Self::new(DEFAULT_THERMAL_ZONE_PATH)
    }
}

impl ThermalZoneSensor {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<f64, SensorError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SensorError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_millidegrees(&content).ok_or_else(|| SensorError::Parse {
            path: self.path.clone(),
            content: content.trim().to_string(),
        })
    }
}

impl HealthSensor for ThermalZoneSensor {
    async fn read_temperature_c(&self) -> Result<f64, StreetlampError> {
        Ok(self.read().await?)
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_millidegrees(content: &str) -> Option<f64> {
    content
        .trim()
        .parse::<i64>()
        .ok()
        .map(|milli| milli as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "streetlamp-thermal-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn should_parse_millidegrees_with_trailing_newline() {
        assert_eq!(parse_millidegrees("48312\n"), Some(48.312));
    }

    #[test]
    fn should_parse_negative_reading() {
        assert_eq!(parse_millidegrees("-5000"), Some(-5.0));
    }

    #[test]
    fn should_reject_non_numeric_content() {
        assert_eq!(parse_millidegrees("disabled"), None);
    }

    #[tokio::test]
    async fn should_read_temperature_from_file() {
        let path = fixture("ok", "61250\n");
        let sensor = ThermalZoneSensor::new(&path);

        let temp = sensor.read_temperature_c().await.unwrap();

        assert!((temp - 61.25).abs() < f64::EPSILON);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_report_parse_error_for_garbage() {
        let path = fixture("garbage", "n/a\n");
        let sensor = ThermalZoneSensor::new(&path);

        let err = sensor.read().await.unwrap_err();

        assert!(matches!(err, SensorError::Parse { ref content, .. } if content == "n/a"));
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_report_sensor_error_for_missing_file() {
        let sensor = ThermalZoneSensor::new("/nonexistent/thermal_zone9/temp");

        let result = sensor.read_temperature_c().await;

        assert!(matches!(result, Err(StreetlampError::Sensor(_))));
    }

    #[test]
    fn should_default_to_first_thermal_zone() {
        assert_eq!(
            ThermalZoneSensor::default().path(),
            Path::new(DEFAULT_THERMAL_ZONE_PATH)
        );
    }
}
