//! # streetlamp-adapter-forest
//!
//! Weather classifier backed by a decision forest exported to JSON.
//!
//! ## Model format
//!
//! ```json
//! {
//!   "feature_names": ["humidity", "cloudcover", "visibility", "uvindex",
//!                     "day_of_year", "temp", "precip"],
//!   "trees": [
//!     {"split": {"feature": 2, "threshold": 4.5,
//!                "left":  {"leaf": {"class": 1}},
//!                "right": {"leaf": {"class": 0}}}}
//!   ]
//! }
//! ```
//!
//! A split sends a sample left when `value <= threshold`. The forest
//! predicts the majority class over its trees; a tied vote is treated as
//! hazardous.
//!
//! ## Dependency rule
//!
//! Depends on `streetlamp-app` (port traits) and `streetlamp-domain` only.

mod error;

use std::path::Path;

use serde::Deserialize;

use streetlamp_app::ports::WeatherClassifier;
use streetlamp_domain::features::{FEATURE_COUNT, FeatureOrder};
use streetlamp_domain::weather::WeatherSafety;

pub use error::ForestError;

/// One node of a decision tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Leaf {
        class: u8,
    },
    Split {
        /// Index into the model's feature list.
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    feature_names: Vec<String>,
    trees: Vec<Node>,
}

/// A loaded, validated decision forest.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    trees: Vec<Node>,
}

impl ForestClassifier {
    /// Load a model from `path`, checking it against `expected` feature order.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::Io`] if the file cannot be read, or any of the
    /// validation errors of [`from_json`](Self::from_json).
    pub fn load(path: impl AsRef<Path>, expected: &FeatureOrder) -> Result<Self, ForestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ForestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let classifier = Self::from_json(&content, expected)?;
        tracing::info!(
            path = %path.display(),
            trees = classifier.trees.len(),
            "forest model loaded"
        );
        Ok(classifier)
    }

    /// Parse and validate a model.
    ///
    /// # Errors
    ///
    /// - [`ForestError::Parse`] for malformed JSON
    /// - [`ForestError::FeatureNames`] / [`ForestError::FeatureMismatch`] when
    ///   the model's features differ from `expected`
    /// - [`ForestError::Empty`], [`ForestError::FeatureIndex`],
    ///   [`ForestError::LeafClass`] for structurally invalid trees
    pub fn from_json(json: &str, expected: &FeatureOrder) -> Result<Self, ForestError> {
        let model: ModelFile = serde_json::from_str(json)?;

        let order = FeatureOrder::parse(&model.feature_names).map_err(ForestError::FeatureNames)?;
        if order != *expected {
            return Err(ForestError::FeatureMismatch {
                expected: expected.names().iter().map(ToString::to_string).collect(),
                actual: model.feature_names,
            });
        }

        Self::from_trees(model.trees)
    }

    /// Build a forest from trees whose split indices refer to the configured order.
    ///
    /// # Errors
    ///
    /// Same structural checks as [`from_json`](Self::from_json).
    pub fn from_trees(trees: Vec<Node>) -> Result<Self, ForestError> {
        if trees.is_empty() {
            return Err(ForestError::Empty);
        }
        for (index, tree) in trees.iter().enumerate() {
            validate(tree, index)?;
        }
        Ok(Self { trees })
    }

    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl WeatherClassifier for ForestClassifier {
    fn predict(&self, input: &[f64; FEATURE_COUNT]) -> WeatherSafety {
        let hazardous = self
            .trees
            .iter()
            .filter(|tree| evaluate(tree, input) == 1)
            .count();
        let benign = self.trees.len() - hazardous;
        if hazardous >= benign {
            WeatherSafety::Hazardous
        } else {
            WeatherSafety::Benign
        }
    }
}

fn evaluate(tree: &Node, input: &[f64; FEATURE_COUNT]) -> u8 {
    let mut node = tree;
    loop {
        match node {
            Node::Leaf { class } => return *class,
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                node = if input[*feature] <= *threshold {
                    left.as_ref()
                } else {
                    right.as_ref()
                };
            }
        }
    }
}

fn validate(tree: &Node, index: usize) -> Result<(), ForestError> {
    let mut pending = vec![tree];
    while let Some(node) = pending.pop() {
        match node {
            Node::Leaf { class } => {
                if WeatherSafety::from_label(*class).is_none() {
                    return Err(ForestError::LeafClass {
                        tree: index,
                        class: *class,
                    });
                }
            }
            Node::Split {
                feature,
                left,
                right,
                ..
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(ForestError::FeatureIndex {
                        tree: index,
                        index: *feature,
                        count: FEATURE_COUNT,
                    });
                }
                pending.push(left.as_ref());
                pending.push(right.as_ref());
            }
        }
    }
    Ok(())
}
