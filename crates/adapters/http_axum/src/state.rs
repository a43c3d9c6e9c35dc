//! Shared application state for axum handlers.

use std::sync::Arc;

use streetlamp_app::ports::{Clock, HealthSensor, WeatherClassifier, WeatherProvider};
use streetlamp_app::services::lamp_control_service::LampControlService;

/// Application state shared across all axum handlers.
///
/// Generic over the provider, sensor, classifier and clock to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` is cloned.
pub struct AppState<W, H, C, K> {
    /// Decision cycle service.
    pub control_service: Arc<LampControlService<W, H, C, K>>,
}

impl<W, H, C, K> Clone for AppState<W, H, C, K> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
        }
    }
}

impl<W, H, C, K> AppState<W, H, C, K>
where
    W: WeatherProvider + 'static,
    H: HealthSensor + 'static,
    C: WeatherClassifier + 'static,
    K: Clock + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(control_service: LampControlService<W, H, C, K>) -> Self {
        Self {
            control_service: Arc::new(control_service),
        }
    }
}
