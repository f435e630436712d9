//! # sensorhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — upsert and lookups for accounts
//!   - `ReadingRepository` — append and time-filtered queries for readings
//!   - `PasswordHasher` — one-way hashing and verification
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AccountService` — signup, login, admin upsert
//!   - `ReadingService` — ingest, list, latest, history
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `sensorhub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
