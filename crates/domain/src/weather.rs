//! Weather readings and the astronomy window, as delivered by a provider.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Snapshot of current conditions, produced once per decision cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in °C.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Precipitation in millimetres.
    pub precipitation_mm: f64,
    /// Cloud cover in percent.
    pub cloud_cover: f64,
    /// Visibility in kilometres, uncapped.
    pub visibility_km: f64,
    pub uv_index: f64,
    /// When the provider observed these conditions.
    pub observed_at: Timestamp,
}

/// Same-day sunrise and sunset, as 12-hour wall-clock strings (`"07:15 AM"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomyWindow {
    pub sunrise: String,
    pub sunset: String,
}

impl AstronomyWindow {
    #[must_use]
    pub fn new(sunrise: impl Into<String>, sunset: impl Into<String>) -> Self {
        Self {
            sunrise: sunrise.into(),
            sunset: sunset.into(),
        }
    }
}

/// One complete provider response: conditions, astronomy, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub reading: WeatherReading,
    pub astronomy: AstronomyWindow,
    /// Human-readable location the report is for.
    pub location: String,
}

/// Weather classifier verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSafety {
    /// Label `0`: conditions are benign.
    Benign,
    /// Label `1`: rain or fog, maximum output required.
    Hazardous,
}

impl WeatherSafety {
    /// Interpret a binary class label. Returns `None` for anything but 0 or 1.
    #[must_use]
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::Benign),
            1 => Some(Self::Hazardous),
            _ => None,
        }
    }

    #[must_use]
    pub fn requires_max_output(self) -> bool {
        matches!(self, Self::Hazardous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_binary_labels() {
        assert_eq!(WeatherSafety::from_label(0), Some(WeatherSafety::Benign));
        assert_eq!(WeatherSafety::from_label(1), Some(WeatherSafety::Hazardous));
        assert_eq!(WeatherSafety::from_label(2), None);
    }

    #[test]
    fn should_require_max_output_only_when_hazardous() {
        assert!(WeatherSafety::Hazardous.requires_max_output());
        assert!(!WeatherSafety::Benign.requires_max_output());
    }

    #[test]
    fn should_build_astronomy_window_from_str() {
        let window = AstronomyWindow::new("07:10 AM", "07:20 PM");
        assert_eq!(window.sunrise, "07:10 AM");
        assert_eq!(window.sunset, "07:20 PM");
    }
}
