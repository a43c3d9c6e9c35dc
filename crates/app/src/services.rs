//! Application services: use-cases driven by the inbound adapters.

pub mod lamp_control_service;
