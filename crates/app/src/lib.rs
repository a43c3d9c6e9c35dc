//! # streetlamp-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WeatherProvider`: current conditions plus sunrise/sunset
//!   - `HealthSensor`: internal temperature of the lamp controller
//!   - `WeatherClassifier`: rain/fog predictor over the feature vector
//!   - `Clock`: wall-clock time at the lamp's site
//! - Provide the **decision engine**: the fixed-priority rule chain
//! - Provide the **lamp control service**: one complete decision cycle
//!
//! ## Dependency rule
//! Depends on `streetlamp-domain` only (plus `tokio::time` for the fetch bound).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod decision_engine;
pub mod ports;
pub mod services;
