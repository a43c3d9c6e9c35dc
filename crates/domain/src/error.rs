//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StreetlampError`] via `From` when crossing a port boundary.

use std::time::Duration;

/// Boxed source error carried by the opaque variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for one decision cycle.
#[derive(Debug, thiserror::Error)]
pub enum StreetlampError {
    /// The weather provider could not be reached or refused the request.
    #[error("weather provider unavailable")]
    ProviderUnavailable(#[source] BoxError),

    /// The weather provider did not answer within the configured bound.
    #[error("weather provider did not respond within {}s", .after.as_secs_f64())]
    ProviderTimeout { after: Duration },

    /// The weather provider answered, but the payload was malformed.
    #[error("weather provider response is malformed")]
    ProviderSchema(#[from] SchemaError),

    /// No weather classifier is loaded, so unsafe weather cannot be ruled out.
    #[error("weather classifier not loaded")]
    ClassifierUnavailable,

    /// The health sensor could not be read.
    #[error("health sensor read failed")]
    Sensor(#[source] BoxError),

    /// Configuration violates a domain contract.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    /// Any other unexpected fault.
    #[error("internal error")]
    Internal(#[source] BoxError),
}

/// A required field is missing from, or has the wrong type in, a provider response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or invalid field `{field}`")]
pub struct SchemaError {
    /// Path of the offending field, e.g. `current.vis_km`.
    pub field: String,
}

impl SchemaError {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Violations of configuration contracts the domain enforces.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The feature list does not name every classifier feature exactly once.
    #[error("feature order must list each of {expected} features exactly once, got {actual:?}")]
    FeatureOrder { expected: usize, actual: Vec<String> },

    /// A feature name is not one the classifier was trained on.
    #[error("unknown feature `{0}`")]
    UnknownFeature(String),

    /// The safety ceiling is not a finite number.
    #[error("safety ceiling must be finite, got {0}")]
    SafetyCeiling(f64),
}
