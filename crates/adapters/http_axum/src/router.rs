//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensorhub_app::ports::{PasswordHasher, ReadingRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<UR, RR, H>(state: AppState<UR, RR, H>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
