//! Sensor adapter error types.

use std::path::PathBuf;

use streetlamp_domain::error::StreetlampError;

/// Errors specific to the health sensor adapters.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// The thermal zone file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The thermal zone file does not hold an integer millidegree value.
    #[error("unexpected thermal zone content {content:?} in {}", .path.display())]
    Parse { path: PathBuf, content: String },

    /// The simulated range is empty or not finite.
    #[error("invalid simulated range {min}..={max}")]
    Range { min: f64, max: f64 },
}

impl From<SensorError> for StreetlampError {
    fn from(err: SensorError) -> Self {
        Self::Sensor(Box::new(err))
    }
}
