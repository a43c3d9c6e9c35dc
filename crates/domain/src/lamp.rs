//! Lamp action: the closed set of decision outcomes.

use serde::{Deserialize, Serialize};

/// What the lamp should do this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LampAction {
    /// Daylight: the lamp is off whatever else holds.
    OffDaytime,
    /// Hardware overheated: full output so maintenance can spot the unit.
    MaxOutputFailsafeOverheat,
    /// Classifier flagged rain or fog.
    MaxOutputSafetyRainFog,
    /// Night, benign weather, motion nearby.
    DimmerMotionDetected,
    /// Night, benign weather, nobody around.
    OffNoMotion,
}

impl LampAction {
    /// Operator-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OffDaytime => "OFF (Daytime)",
            Self::MaxOutputFailsafeOverheat => "MAX OUTPUT (System Failsafe: Overheat)",
            Self::MaxOutputSafetyRainFog => "MAX OUTPUT (Safety Override: Rain/Fog)",
            Self::DimmerMotionDetected => "DIMMER OUTPUT (Motion Detected)",
            Self::OffNoMotion => "OFF (No Motion Detected)",
        }
    }

    /// Whether the lamp emits any light.
    #[must_use]
    pub fn is_lit(self) -> bool {
        !matches!(self, Self::OffDaytime | Self::OffNoMotion)
    }
}

impl std::fmt::Display for LampAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
