//! # sensorhub-adapter-password-bcrypt
//!
//! [`PasswordHasher`] implementation over the [bcrypt](https://docs.rs/bcrypt)
//! crate. The cost factor is fixed at construction; the salt is generated
//! per hash and embedded in the output string.

use sensorhub_app::ports::PasswordHasher;
use sensorhub_domain::error::SensorHubError;

/// Bcrypt-backed hasher with a fixed cost factor.
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl BcryptHasher {
    /// Create a hasher with an explicit cost factor.
    ///
    /// Production wiring uses [`Default`]; tests pass the minimum cost to
    /// keep hashing fast.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, SensorHubError> {
        bcrypt::hash(plaintext, self.cost).map_err(|err| SensorHubError::Hash(Box::new(err)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, SensorHubError> {
        bcrypt::verify(plaintext, hash).map_err(|err| SensorHubError::Hash(Box::new(err)))
    }
}
