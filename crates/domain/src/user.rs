//! User — an account tied to a physical sensor device.
//!
//! The device identifier doubles as the account key: there is no separate
//! user id, and `device_id` is unique at the store level.

use serde::{Deserialize, Serialize};

use crate::error::{SensorHubError, ValidationError};

/// An account associated with one physical device.
///
/// `password_hash` is never serialized: every API response that carries a
/// user strips the credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub device_id: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl User {
    /// Assemble a user record from already-hashed credentials.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `device_id` is empty.
    pub fn validate(&self) -> Result<(), SensorHubError> {
        if self.device_id.is_empty() {
            return Err(ValidationError::MissingDeviceId.into());
        }
        Ok(())
    }
}
