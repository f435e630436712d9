//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorhub_app::ports::{PasswordHasher, ReadingRepository, UserRepository};
use sensorhub_app::services::account_service::AccountService;
use sensorhub_app::services::reading_service::ReadingService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and hasher types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, RR, H> {
    /// Signup, login, and admin upsert.
    pub account_service: Arc<AccountService<UR, H>>,
    /// Ingest and time-filtered queries.
    pub reading_service: Arc<ReadingService<RR>>,
}

impl<UR, RR, H> Clone for AppState<UR, RR, H> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            reading_service: Arc::clone(&self.reading_service),
        }
    }
}

impl<UR, RR, H> AppState<UR, RR, H>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        account_service: AccountService<UR, H>,
        reading_service: ReadingService<RR>,
    ) -> Self {
        Self {
            account_service: Arc::new(account_service),
            reading_service: Arc::new(reading_service),
        }
    }
}
