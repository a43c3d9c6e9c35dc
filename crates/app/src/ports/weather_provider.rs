//! Weather provider port: current conditions and today's astronomy.

use std::future::Future;

use streetlamp_domain::error::StreetlampError;
use streetlamp_domain::weather::WeatherReport;

/// Fetches one [`WeatherReport`] per decision cycle.
///
/// Implementations map transport failures to
/// [`StreetlampError::ProviderUnavailable`] and malformed payloads to
/// [`StreetlampError::ProviderSchema`]. The caller bounds the call with a
/// timeout; implementations do not retry.
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions.
    fn fetch(&self) -> impl Future<Output = Result<WeatherReport, StreetlampError>> + Send;
}

impl<T: WeatherProvider> WeatherProvider for std::sync::Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<WeatherReport, StreetlampError>> + Send {
        (**self).fetch()
    }
}
