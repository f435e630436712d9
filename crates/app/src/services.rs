//! Application services — one per aggregate.

pub mod account_service;
pub mod reading_service;
