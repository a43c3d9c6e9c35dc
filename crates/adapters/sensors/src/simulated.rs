//! Simulated temperature sensor: a stand-in for hardware during development.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use streetlamp_app::ports::HealthSensor;
use streetlamp_domain::error::StreetlampError;

use crate::error::SensorError;

/// Lower bound of the default simulated range, in °C.
pub const DEFAULT_MIN_TEMP_C: f64 = 30.0;
/// Upper bound of the default simulated range, in °C. Above the default
/// safety ceiling so the failsafe path gets exercised.
pub const DEFAULT_MAX_TEMP_C: f64 = 65.0;

/// Draws a uniform temperature in `[min, max]`, rounded to 0.1 °C.
pub struct SimulatedSensor {
    min_temp_c: f64,
    max_temp_c: f64,
    rng: Mutex<StdRng>,
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self {
            min_temp_c: DEFAULT_MIN_TEMP_C,
            max_temp_c: DEFAULT_MAX_TEMP_C,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl SimulatedSensor {
    /// Create a sensor drawing from `[min_temp_c, max_temp_c]`.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Range`] if the bounds or their span are not
    /// finite, or if `min > max`.
    pub fn new(min_temp_c: f64, max_temp_c: f64) -> Result<Self, SensorError> {
        Self::with_rng(min_temp_c, max_temp_c, StdRng::from_entropy())
    }

    /// Create a reproducible sensor for tests and demos.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn seeded(min_temp_c: f64, max_temp_c: f64, seed: u64) -> Result<Self, SensorError> {
        Self::with_rng(min_temp_c, max_temp_c, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min_temp_c: f64, max_temp_c: f64, rng: StdRng) -> Result<Self, SensorError> {
        let span = max_temp_c - min_temp_c;
        if !span.is_finite() || min_temp_c > max_temp_c {
            return Err(SensorError::Range {
                min: min_temp_c,
                max: max_temp_c,
            });
        }
        Ok(Self {
            min_temp_c,
            max_temp_c,
            rng: Mutex::new(rng),
        })
    }

    fn sample(&self) -> f64 {
        // A poisoned generator is still a valid generator.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let raw = rng.gen_range(self.min_temp_c..=self.max_temp_c);
        (raw * 10.0).round() / 10.0
    }
}

impl HealthSensor for SimulatedSensor {
    async fn read_temperature_c(&self) -> Result<f64, StreetlampError> {
        let temp = self.sample();
        tracing::trace!(temp_c = temp, "simulated temperature drawn");
        Ok(temp)
    }
}
