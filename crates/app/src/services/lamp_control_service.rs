//! Lamp control service: runs one complete decision cycle.
//!
//! Order of a cycle:
//! 1. refuse to run without a classifier (unsafe weather cannot be ruled out)
//! 2. fetch the weather report, bounded by the provider timeout
//! 3. evaluate the night window and map the reading into features
//! 4. read the health sensor and classify the reading
//! 5. run the decision engine and record the decision

use std::time::Duration;

use streetlamp_domain::decision::Decision;
use streetlamp_domain::error::StreetlampError;
use streetlamp_domain::features::{FeatureOrder, FeatureVector};
use streetlamp_domain::health::HealthMonitor;
use streetlamp_domain::night::{NightWindow, WindowSource};
use streetlamp_domain::weather::AstronomyWindow;

use crate::decision_engine::DecisionEngine;
use crate::ports::{Clock, HealthSensor, WeatherClassifier, WeatherProvider};

/// Default bound on a weather fetch.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables of a decision cycle.
#[derive(Debug, Clone, Copy)]
pub struct ControlSettings {
    pub feature_order: FeatureOrder,
    pub health_monitor: HealthMonitor,
    pub provider_timeout: Duration,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            feature_order: FeatureOrder::default(),
            health_monitor: HealthMonitor::default(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

/// Result of a successful cycle: the decision plus the context it was made in.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOutcome {
    pub decision: Decision,
    pub astronomy: AstronomyWindow,
    pub location: String,
}

/// Application service driving the rule chain from live inputs.
pub struct LampControlService<W, H, C, K> {
    provider: W,
    sensor: H,
    classifier: Option<C>,
    clock: K,
    engine: DecisionEngine,
    settings: ControlSettings,
}

impl<W, H, C, K> LampControlService<W, H, C, K>
where
    W: WeatherProvider,
    H: HealthSensor,
    C: WeatherClassifier,
    K: Clock,
{
    /// Create a new service.
    ///
    /// `classifier` is `None` when no model could be loaded; every cycle
    /// then fails with [`StreetlampError::ClassifierUnavailable`].
    pub fn new(
        provider: W,
        sensor: H,
        classifier: Option<C>,
        clock: K,
        settings: ControlSettings,
    ) -> Self {
        Self {
            provider,
            sensor,
            classifier,
            clock,
            engine: DecisionEngine::new(settings.feature_order),
            settings,
        }
    }

    /// Whether a classifier is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// Run one decision cycle for the given motion signal.
    ///
    /// # Errors
    ///
    /// - [`StreetlampError::ClassifierUnavailable`] before anything is fetched
    ///   when no classifier is loaded
    /// - [`StreetlampError::ProviderTimeout`] when the fetch exceeds the bound
    /// - provider and sensor errors, propagated unchanged
    pub async fn control(&self, motion_detected: bool) -> Result<ControlOutcome, StreetlampError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(StreetlampError::ClassifierUnavailable)?;

        let after = self.settings.provider_timeout;
        let report = tokio::time::timeout(after, self.provider.fetch())
            .await
            .map_err(|_| StreetlampError::ProviderTimeout { after })??;

        let now = self.clock.now();
        let window = NightWindow::evaluate(
            now,
            &report.astronomy.sunrise,
            &report.astronomy.sunset,
        );
        if let WindowSource::Fallback { unparsed } = &window.source {
            tracing::warn!(
                unparsed = %unparsed,
                is_night = window.is_night,
                "failed to parse sunrise/sunset, using fixed-hour window"
            );
        }
        let features = FeatureVector::from_reading(&report.reading, now, window.is_night);

        let current_temp_c = self.sensor.read_temperature_c().await?;
        let health = self.settings.health_monitor.evaluate(current_temp_c);

        let action = self
            .engine
            .decide(&features, motion_detected, classifier, &health);
        let decision = Decision::record(action, features, motion_detected, health, now);

        tracing::info!(
            decision_id = %decision.id,
            action = ?decision.action,
            is_night = decision.is_night,
            motion_detected,
            current_temp_c,
            location = %report.location,
            "lamp action decided"
        );

        Ok(ControlOutcome {
            decision,
            astronomy: report.astronomy,
            location: report.location,
        })
    }
}
