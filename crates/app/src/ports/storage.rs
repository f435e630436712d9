//! Storage port — repository traits for persistence.
//!
//! Every operation maps to a single query (or single upsert) against the
//! store, so each call is trivially atomic. Connection acquisition and
//! release is the adapter's concern.

use std::future::Future;

use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::reading::{NewReading, SensorReading};
use sensorhub_domain::time::Timestamp;
use sensorhub_domain::user::User;

/// Persistence for user accounts, keyed on `device_id`.
pub trait UserRepository {
    /// Insert a new user or, when `device_id` already exists, overwrite
    /// email and password hash on the existing row.
    fn upsert(&self, user: User) -> impl Future<Output = Result<User, SensorHubError>> + Send;

    /// Update email and password hash on the row matching `user.device_id`.
    ///
    /// Returns `None` when no such row exists.
    fn update_credentials(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Option<User>, SensorHubError>> + Send;

    /// Look up a user by exact email match.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, SensorHubError>> + Send;
}

/// Append-only persistence for sensor readings.
pub trait ReadingRepository {
    /// Append one reading, returning the stored row with its assigned id.
    fn insert(
        &self,
        reading: NewReading,
    ) -> impl Future<Output = Result<SensorReading, SensorHubError>> + Send;

    /// All readings for a device, most recent first.
    fn find_by_device(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SensorHubError>> + Send;

    /// The single most recent reading for a device, if any.
    fn find_latest(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<Option<SensorReading>, SensorHubError>> + Send;

    /// Readings for a device with `recorded_at` in `[from, to]` inclusive,
    /// oldest first.
    fn find_in_range(
        &self,
        device_id: &str,
        from: Timestamp,
        to: Timestamp,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SensorHubError>> + Send;
}
