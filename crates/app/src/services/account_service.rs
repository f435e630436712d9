//! Account service — use-cases for device-bound user accounts.

use sensorhub_domain::error::{NotFoundError, SensorHubError, ValidationError};
use sensorhub_domain::user::User;

use crate::ports::{PasswordHasher, UserRepository};

/// Application service for signup, login, and admin account upsert.
///
/// The plaintext password never leaves this service: it is hashed before
/// any repository call, and the hash is the only form that is persisted.
pub struct AccountService<R, H> {
    repo: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> AccountService<R, H> {
    /// Create a new service backed by the given repository and hasher.
    pub fn new(repo: R, hasher: H) -> Self {
        Self { repo, hasher }
    }

    /// Update email and password on the account matching `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `device_id` is empty,
    /// [`SensorHubError::NotFound`] when no account matches it, or a
    /// storage/hashing error.
    #[tracing::instrument(skip(self, email, password))]
    pub async fn update_credentials(
        &self,
        email: &str,
        password: &str,
        device_id: &str,
    ) -> Result<User, SensorHubError> {
        if device_id.is_empty() {
            return Err(ValidationError::MissingDeviceId.into());
        }
        let password_hash = self.hasher.hash(password)?;
        let user = User::new(device_id, email, password_hash);

        self.repo.update_credentials(user).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: device_id.to_string(),
            }
            .into()
        })
    }

    /// Authenticate by email and password, returning the account's
    /// `device_id` on success.
    ///
    /// An unknown email and a wrong password both produce
    /// [`SensorHubError::Auth`] so that accounts cannot be enumerated.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when either field is empty,
    /// [`SensorHubError::Auth`] on bad credentials, or a storage/hashing
    /// error.
    #[tracing::instrument(skip(self, email, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, SensorHubError> {
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let Some(user) = self.repo.find_by_email(email).await? else {
            return Err(SensorHubError::Auth);
        };

        if self.hasher.verify(password, &user.password_hash)? {
            Ok(user.device_id)
        } else {
            Err(SensorHubError::Auth)
        }
    }

    /// Insert a new account for `device_id`, or overwrite email and
    /// password hash when the device already has one.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `device_id` is empty,
    /// or a storage/hashing error.
    #[tracing::instrument(skip(self, email, password))]
    pub async fn admin_upsert(
        &self,
        email: &str,
        password: &str,
        device_id: &str,
    ) -> Result<User, SensorHubError> {
        if device_id.is_empty() {
            return Err(ValidationError::MissingDeviceId.into());
        }
        let password_hash = self.hasher.hash(password)?;
        let user = User::new(device_id, email, password_hash);
        self.repo.upsert(user).await
    }
}
