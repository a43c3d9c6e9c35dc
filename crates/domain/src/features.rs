//! Feature vector: the exact input the weather classifier was trained on.
//!
//! The classifier consumes seven numeric features in a fixed order. The
//! order is configuration ([`FeatureOrder`]), but it must always name each
//! feature exactly once; a deviating list is rejected when it is built.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::time::LocalTime;
use crate::weather::WeatherReading;

/// Number of numeric classifier features.
pub const FEATURE_COUNT: usize = 7;

/// Highest visibility present in the training data, in km.
pub const VISIBILITY_CEILING_KM: f64 = 10.0;

/// Name of one numeric classifier feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureName {
    #[serde(rename = "humidity")]
    Humidity,
    #[serde(rename = "cloudcover")]
    CloudCover,
    #[serde(rename = "visibility")]
    Visibility,
    #[serde(rename = "uvindex")]
    UvIndex,
    #[serde(rename = "day_of_year")]
    DayOfYear,
    #[serde(rename = "temp")]
    Temperature,
    #[serde(rename = "precip")]
    Precipitation,
}

impl FeatureName {
    /// All features, in the order the reference model was trained with.
    pub const TRAINED_ORDER: [Self; FEATURE_COUNT] = [
        Self::Humidity,
        Self::CloudCover,
        Self::Visibility,
        Self::UvIndex,
        Self::DayOfYear,
        Self::Temperature,
        Self::Precipitation,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Humidity => "humidity",
            Self::CloudCover => "cloudcover",
            Self::Visibility => "visibility",
            Self::UvIndex => "uvindex",
            Self::DayOfYear => "day_of_year",
            Self::Temperature => "temp",
            Self::Precipitation => "precip",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TRAINED_ORDER
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFeature(s.to_string()))
    }
}

/// Validated ordering of the classifier's features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOrder([FeatureName; FEATURE_COUNT]);

impl Default for FeatureOrder {
    fn default() -> Self {
        Self(FeatureName::TRAINED_ORDER)
    }
}

impl FeatureOrder {
    /// Build an order from a list of names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FeatureOrder`] unless `names` lists every
    /// feature exactly once.
    pub fn new(names: &[FeatureName]) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::FeatureOrder {
            expected: FEATURE_COUNT,
            actual: names.iter().map(ToString::to_string).collect(),
        };

        let order: [FeatureName; FEATURE_COUNT] = names.try_into().map_err(|_| invalid())?;
        let complete = FeatureName::TRAINED_ORDER
            .iter()
            .all(|name| order.contains(name));
        if !complete {
            return Err(invalid());
        }
        Ok(Self(order))
    }

    /// Build an order from textual names, as stored in model files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFeature`] for a name outside the
    /// feature set, or [`ConfigError::FeatureOrder`] for an incomplete list.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let names = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<FeatureName>, _>>()?;
        Self::new(&names)
    }

    #[must_use]
    pub fn names(&self) -> &[FeatureName; FEATURE_COUNT] {
        &self.0
    }
}

/// Feature snapshot for one decision cycle.
///
/// Serialized field names match the classifier's feature names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub humidity: f64,
    #[serde(rename = "cloudcover")]
    pub cloud_cover: f64,
    /// Visibility in km, never above [`VISIBILITY_CEILING_KM`].
    pub visibility: f64,
    #[serde(rename = "uvindex")]
    pub uv_index: f64,
    /// Ordinal day of the year, 1–366.
    pub day_of_year: u32,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "precip")]
    pub precipitation: f64,
    /// Not a classifier input; gates the whole decision chain.
    #[serde(rename = "is_night_time")]
    pub is_night: bool,
}

impl FeatureVector {
    /// Map a raw reading taken at `now` into the classifier's feature space.
    #[must_use]
    pub fn from_reading(reading: &WeatherReading, now: LocalTime, is_night: bool) -> Self {
        Self {
            humidity: reading.humidity,
            cloud_cover: reading.cloud_cover,
            visibility: cap_visibility(reading.visibility_km),
            uv_index: reading.uv_index,
            day_of_year: now.ordinal(),
            temperature: reading.temperature_c,
            precipitation: reading.precipitation_mm,
            is_night,
        }
    }

    /// Value of a single numeric feature.
    #[must_use]
    pub fn get(&self, name: FeatureName) -> f64 {
        match name {
            FeatureName::Humidity => self.humidity,
            FeatureName::CloudCover => self.cloud_cover,
            FeatureName::Visibility => self.visibility,
            FeatureName::UvIndex => self.uv_index,
            FeatureName::DayOfYear => f64::from(self.day_of_year),
            FeatureName::Temperature => self.temperature,
            FeatureName::Precipitation => self.precipitation,
        }
    }

    /// The seven numeric features in classifier order. `is_night` is excluded.
    #[must_use]
    pub fn ordered(&self, order: &FeatureOrder) -> [f64; FEATURE_COUNT] {
        let names = *order.names();
        names.map(|name| self.get(name))
    }
}

/// Truncate visibility to the training ceiling.
#[must_use]
pub fn cap_visibility(visibility_km: f64) -> f64 {
    visibility_km.min(VISIBILITY_CEILING_KM)
}
