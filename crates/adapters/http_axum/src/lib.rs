//! # streetlamp-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON control endpoint `POST /api/control_lamp`
//! - Map HTTP requests into lamp control service calls (driving adapter)
//! - Map decisions and [`StreetlampError`](streetlamp_domain::error::StreetlampError)s
//!   into JSON responses with a matching status code
//!
//! ## Dependency rule
//! Depends on `streetlamp-app` (for port traits and services) and
//! `streetlamp-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
