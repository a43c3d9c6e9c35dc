//! Device health: classifies an internal temperature reading.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Typical maximum safe internal temperature for embedded hardware, in °C.
pub const DEFAULT_MAX_SAFE_TEMP_C: f64 = 55.0;

/// Health verdict for one decision cycle. Never cached between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub current_temp_c: f64,
    pub max_safe_temp_c: f64,
    /// `current_temp_c > max_safe_temp_c`.
    pub is_overheated: bool,
}

/// Classifies readings against a fixed safety ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthMonitor {
    max_safe_temp_c: f64,
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self {
            max_safe_temp_c: DEFAULT_MAX_SAFE_TEMP_C,
        }
    }
}

impl HealthMonitor {
    /// Create a monitor with a custom ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SafetyCeiling`] if the ceiling is NaN or infinite.
    pub fn new(max_safe_temp_c: f64) -> Result<Self, ConfigError> {
        if !max_safe_temp_c.is_finite() {
            return Err(ConfigError::SafetyCeiling(max_safe_temp_c));
        }
        Ok(Self { max_safe_temp_c })
    }

    #[must_use]
    pub fn max_safe_temp_c(&self) -> f64 {
        self.max_safe_temp_c
    }

    /// Classify an already-obtained temperature reading.
    #[must_use]
    pub fn evaluate(&self, current_temp_c: f64) -> HealthStatus {
        HealthStatus {
            current_temp_c,
            max_safe_temp_c: self.max_safe_temp_c,
            is_overheated: current_temp_c > self.max_safe_temp_c,
        }
    }
}
