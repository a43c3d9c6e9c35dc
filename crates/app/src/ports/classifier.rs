//! Weather classifier port: binary rain/fog predictor.

use streetlamp_domain::features::FEATURE_COUNT;
use streetlamp_domain::weather::WeatherSafety;

/// A ready-to-use predictor over the seven numeric features.
///
/// `input` is always in the trained [`FeatureOrder`](streetlamp_domain::features::FeatureOrder).
/// Prediction is total and deterministic, and implementations must be safe
/// for concurrent read-only use.
pub trait WeatherClassifier: Send + Sync {
    fn predict(&self, input: &[f64; FEATURE_COUNT]) -> WeatherSafety;
}

impl<T: WeatherClassifier + ?Sized> WeatherClassifier for std::sync::Arc<T> {
    fn predict(&self, input: &[f64; FEATURE_COUNT]) -> WeatherSafety {
        (**self).predict(input)
    }
}
