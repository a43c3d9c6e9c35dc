//! # streetlamp-domain
//!
//! Pure domain model for the streetlamp controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, local time
//! - Define **weather readings** and the **astronomy window** (sunrise/sunset)
//! - Evaluate the **night window** from sunrise/sunset strings
//! - Map readings into the classifier's **feature vector**
//! - Classify device **health** against the safety ceiling
//! - Define the closed set of **lamp actions** and the **decision** audit record
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod decision;
pub mod features;
pub mod health;
pub mod lamp;
pub mod night;
pub mod weather;
