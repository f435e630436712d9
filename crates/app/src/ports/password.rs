//! Password port — one-way hashing behind a small capability interface.
//!
//! Isolating the scheme here lets it be swapped (or replaced with a cheap
//! fake in tests) without touching handler or service logic.

use sensorhub_domain::error::SensorHubError;

/// One-way, salted password hashing.
pub trait PasswordHasher {
    /// Hash a plaintext password. The output embeds the salt and cost.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Hash`] when the underlying scheme fails.
    fn hash(&self, plaintext: &str) -> Result<String, SensorHubError>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Hash`] when the stored hash is malformed.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, SensorHubError>;
}
