//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorHubError`] via `#[from]` or an explicit `From` impl. The HTTP
//! adapter is the only place where these variants are turned into status
//! codes.

/// Validation failures on incoming requests.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The device identifier was missing or empty.
    #[error("device id is required")]
    MissingDeviceId,

    /// A required field was absent from the request body.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email or password was missing from a login request.
    #[error("email and password are required")]
    MissingCredentials,

    /// The date query parameter could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// A requested resource does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// The kind of resource, e.g. `"User"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Top-level error for all sensorhub operations.
///
/// The `Auth` variant deliberately carries no detail: an unknown email and
/// a wrong password must be indistinguishable to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SensorHubError {
    /// Malformed or missing input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Bad credentials — unknown email or wrong password.
    #[error("invalid credentials")]
    Auth,

    /// Resource absent.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Store or connectivity failure. Detail is logged server-side only.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Password hashing or verification failure.
    #[error("password hashing error")]
    Hash(#[source] Box<dyn std::error::Error + Send + Sync>),
}
