//! # sensorhub-domain
//!
//! Pure domain model for the sensorhub sensor-reporting service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Users** (accounts keyed by the physical device identifier)
//! - Define **Readings** (timestamped samples of the four sensor values)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod reading;
pub mod user;
