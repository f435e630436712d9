//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;
#[allow(clippy::missing_errors_doc)]
pub mod readings;

use axum::Router;
use axum::routing::{get, post, put};

use sensorhub_app::ports::{PasswordHasher, ReadingRepository, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, RR, H>() -> Router<AppState<UR, RR, H>>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    Router::new()
        // Accounts
        .route("/signup", put(accounts::signup::<UR, RR, H>))
        .route("/signup/admin", post(accounts::admin_signup::<UR, RR, H>))
        .route("/login", post(accounts::login::<UR, RR, H>))
        // Readings
        .route("/data", post(readings::ingest::<UR, RR, H>))
        .route("/data/{device_id}", get(readings::list::<UR, RR, H>))
        .route(
            "/data/latest/{device_id}",
            get(readings::latest::<UR, RR, H>),
        )
        .route(
            "/data/history/{device_id}",
            get(readings::history::<UR, RR, H>),
        )
}
