//! JSON REST handlers for account signup and login.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sensorhub_app::ports::{PasswordHasher, ReadingRepository, UserRepository};
use sensorhub_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for signup endpoints. Fields default to empty strings so
/// that presence checks produce a 400, not a deserialization failure.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub device_id: String,
}

/// Request body for the login endpoint.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Success body carrying a user record (password stripped by serde).
#[derive(Serialize)]
pub struct UserBody {
    pub message: &'static str,
    pub user: User,
}

/// Success body for login: the device id is the continuation credential.
#[derive(Serialize)]
pub struct LoginBody {
    pub message: &'static str,
    pub device_id: String,
}

/// Possible responses from the signup endpoints.
pub enum SignupResponse {
    Ok(Json<UserBody>),
}

impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Ok(Json<LoginBody>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `PUT /api/signup`
pub async fn signup<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Json(req): Json<SignupRequest>,
) -> Result<SignupResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let user = state
        .account_service
        .update_credentials(&req.email, &req.password, &req.device_id)
        .await?;
    Ok(SignupResponse::Ok(Json(UserBody {
        message: "user updated",
        user,
    })))
}

/// `POST /api/signup/admin`
pub async fn admin_signup<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Json(req): Json<SignupRequest>,
) -> Result<SignupResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let user = state
        .account_service
        .admin_upsert(&req.email, &req.password, &req.device_id)
        .await?;
    Ok(SignupResponse::Ok(Json(UserBody {
        message: "user created",
        user,
    })))
}

/// `POST /api/login`
pub async fn login<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Json(req): Json<LoginRequest>,
) -> Result<LoginResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let device_id = state
        .account_service
        .login(&req.email, &req.password)
        .await?;
    Ok(LoginResponse::Ok(Json(LoginBody {
        message: "login successful",
        device_id,
    })))
}
