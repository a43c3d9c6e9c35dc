//! Forest adapter error types.

use std::path::PathBuf;

use streetlamp_domain::error::{ConfigError, StreetlampError};

/// Errors raised while loading a forest model.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    /// The model file could not be read.
    #[error("failed to read model file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid model JSON.
    #[error("failed to parse model")]
    Parse(#[from] serde_json::Error),

    /// The model contains no trees.
    #[error("model has no trees")]
    Empty,

    /// A split refers to a feature index outside the feature list.
    #[error("tree {tree} splits on feature index {index}, model has {count} features")]
    FeatureIndex {
        tree: usize,
        index: usize,
        count: usize,
    },

    /// A leaf predicts something other than 0 or 1.
    #[error("tree {tree} has leaf class {class}, expected 0 or 1")]
    LeafClass { tree: usize, class: u8 },

    /// The model's feature names are not a valid feature order.
    #[error("model feature names are invalid")]
    FeatureNames(#[source] ConfigError),

    /// The model was trained on a different feature order than configured.
    #[error("model feature order {actual:?} does not match configured order {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

impl From<ForestError> for StreetlampError {
    fn from(err: ForestError) -> Self {
        match err {
            ForestError::FeatureNames(err) => Self::Config(err),
            other => Self::Internal(Box::new(other)),
        }
    }
}
