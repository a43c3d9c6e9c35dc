//! Decision engine: the fixed-priority rule chain.
//!
//! Rules are evaluated in order and the first one that fires decides the
//! action; later rules are never looked at:
//!
//! 1. **Daytime gate**: not night → [`LampAction::OffDaytime`]. The
//!    failsafe is not evaluated during daylight.
//! 2. **Failsafe**: overheated → [`LampAction::MaxOutputFailsafeOverheat`],
//!    overriding weather and motion.
//! 3. **Safety override**: classifier flags rain/fog →
//!    [`LampAction::MaxOutputSafetyRainFog`].
//! 4. **Efficiency**: motion → [`LampAction::DimmerMotionDetected`],
//!    otherwise [`LampAction::OffNoMotion`].
//!
//! There is no state between calls.

use streetlamp_domain::features::{FeatureOrder, FeatureVector};
use streetlamp_domain::health::HealthStatus;
use streetlamp_domain::lamp::LampAction;

use crate::ports::WeatherClassifier;

/// Stateless evaluator of the lamp rule chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    feature_order: FeatureOrder,
}

impl DecisionEngine {
    /// Create an engine feeding the classifier in `feature_order`.
    #[must_use]
    pub fn new(feature_order: FeatureOrder) -> Self {
        Self { feature_order }
    }

    /// Decide the lamp action for one cycle.
    pub fn decide<C>(
        &self,
        features: &FeatureVector,
        motion_detected: bool,
        classifier: &C,
        health: &HealthStatus,
    ) -> LampAction
    where
        C: WeatherClassifier + ?Sized,
    {
        if !features.is_night {
            tracing::debug!("daytime, lamp off");
            return LampAction::OffDaytime;
        }

        if health.is_overheated {
            tracing::error!(
                current_temp_c = health.current_temp_c,
                max_safe_temp_c = health.max_safe_temp_c,
                "overheat detected, forcing max output"
            );
            return LampAction::MaxOutputFailsafeOverheat;
        }

        let input = features.ordered(&self.feature_order);
        let safety = classifier.predict(&input);
        tracing::debug!(?safety, ?input, "weather classified");
        if safety.requires_max_output() {
            return LampAction::MaxOutputSafetyRainFog;
        }

        if motion_detected {
            LampAction::DimmerMotionDetected
        } else {
            LampAction::OffNoMotion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use streetlamp_domain::features::{FEATURE_COUNT, FeatureName};
    use streetlamp_domain::health::HealthMonitor;
    use streetlamp_domain::weather::WeatherSafety;

    /// Returns a fixed verdict and records every input it was given.
    struct StubClassifier {
        verdict: WeatherSafety,
        calls: Mutex<Vec<[f64; FEATURE_COUNT]>>,
    }

    impl StubClassifier {
        fn new(verdict: WeatherSafety) -> Self {
            Self {
                verdict,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl WeatherClassifier for StubClassifier {
        fn predict(&self, input: &[f64; FEATURE_COUNT]) -> WeatherSafety {
            self.calls.lock().unwrap().push(*input);
            self.verdict
        }
    }

    fn features(is_night: bool) -> FeatureVector {
        FeatureVector {
            humidity: 90.0,
            cloud_cover: 100.0,
            visibility: 2.0,
            uv_index: 0.0,
            day_of_year: 153,
            temperature: 24.0,
            precipitation: 3.2,
            is_night,
        }
    }

    fn healthy() -> HealthStatus {
        HealthMonitor::default().evaluate(40.0)
    }

    fn overheated() -> HealthStatus {
        HealthMonitor::default().evaluate(60.0)
    }

    const VERDICTS: [WeatherSafety; 2] = [WeatherSafety::Benign, WeatherSafety::Hazardous];

    #[test]
    fn should_turn_off_in_daytime_regardless_of_other_inputs() {
        let engine = DecisionEngine::default();
        for verdict in VERDICTS {
            for health in [healthy(), overheated()] {
                for motion in [true, false] {
                    let classifier = StubClassifier::new(verdict);
                    let action = engine.decide(&features(false), motion, &classifier, &health);
                    assert_eq!(action, LampAction::OffDaytime);
                    assert_eq!(classifier.call_count(), 0);
                }
            }
        }
    }

    #[test]
    fn should_force_failsafe_at_night_when_overheated() {
        let engine = DecisionEngine::default();
        for verdict in VERDICTS {
            for motion in [true, false] {
                let classifier = StubClassifier::new(verdict);
                let action = engine.decide(&features(true), motion, &classifier, &overheated());
                assert_eq!(action, LampAction::MaxOutputFailsafeOverheat);
                assert_eq!(classifier.call_count(), 0);
            }
        }
    }

    #[test]
    fn should_apply_safety_override_when_classifier_flags_hazard() {
        let engine = DecisionEngine::default();
        for motion in [true, false] {
            let classifier = StubClassifier::new(WeatherSafety::Hazardous);
            let action = engine.decide(&features(true), motion, &classifier, &healthy());
            assert_eq!(action, LampAction::MaxOutputSafetyRainFog);
            assert_eq!(classifier.call_count(), 1);
        }
    }

    #[test]
    fn should_dim_when_motion_detected_in_benign_weather() {
        let classifier = StubClassifier::new(WeatherSafety::Benign);
        let action =
            DecisionEngine::default().decide(&features(true), true, &classifier, &healthy());
        assert_eq!(action, LampAction::DimmerMotionDetected);
    }

    #[test]
    fn should_turn_off_without_motion_in_benign_weather() {
        let classifier = StubClassifier::new(WeatherSafety::Benign);
        let action =
            DecisionEngine::default().decide(&features(true), false, &classifier, &healthy());
        assert_eq!(action, LampAction::OffNoMotion);
    }

    #[test]
    fn should_pass_features_in_configured_order_without_night_flag() {
        let mut names = FeatureName::TRAINED_ORDER;
        names.reverse();
        let engine = DecisionEngine::new(FeatureOrder::new(&names).unwrap());
        let classifier = StubClassifier::new(WeatherSafety::Benign);

        engine.decide(&features(true), false, &classifier, &healthy());

        let calls = classifier.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[[3.2, 24.0, 153.0, 0.0, 2.0, 100.0, 90.0]]);
    }

    #[test]
    fn should_accept_classifier_behind_trait_object() {
        let classifier: std::sync::Arc<dyn WeatherClassifier> =
            std::sync::Arc::new(StubClassifier::new(WeatherSafety::Hazardous));
        let action =
            DecisionEngine::default().decide(&features(true), true, &classifier, &healthy());
        assert_eq!(action, LampAction::MaxOutputSafetyRainFog);
    }
}
