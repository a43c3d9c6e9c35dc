//! Health sensor port: the controller's internal temperature.

use std::future::Future;

use streetlamp_domain::error::StreetlampError;

/// Reads the current internal temperature, once per call.
///
/// Production backends talk to hardware; simulated backends share the
/// same contract.
pub trait HealthSensor: Send + Sync {
    /// Current temperature in °C.
    fn read_temperature_c(&self) -> impl Future<Output = Result<f64, StreetlampError>> + Send;
}

impl<T: HealthSensor> HealthSensor for std::sync::Arc<T> {
    fn read_temperature_c(&self) -> impl Future<Output = Result<f64, StreetlampError>> + Send {
        (**self).read_temperature_c()
    }
}
