//! Decision: the audit record of one lamp-control cycle.
//!
//! Carries every input that the rule chain looked at, so an observer can
//! tell why an action was chosen.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::health::HealthStatus;
use crate::id::DecisionId;
use crate::lamp::LampAction;
use crate::time::LocalTime;

/// Outcome of one decision cycle plus the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub action: LampAction,
    pub is_night: bool,
    pub motion_detected: bool,
    pub health: HealthStatus,
    pub features: FeatureVector,
    pub decided_at: LocalTime,
}

impl Decision {
    /// Record an action together with its inputs under a fresh id.
    #[must_use]
    pub fn record(
        action: LampAction,
        features: FeatureVector,
        motion_detected: bool,
        health: HealthStatus,
        decided_at: LocalTime,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            action,
            is_night: features.is_night,
            motion_detected,
            health,
            features,
            decided_at,
        }
    }
}
