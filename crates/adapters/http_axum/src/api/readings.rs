//! JSON REST handlers for sensor data ingest and queries.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sensorhub_app::ports::{PasswordHasher, ReadingRepository, UserRepository};
use sensorhub_domain::error::{SensorHubError, ValidationError};
use sensorhub_domain::reading::SensorReading;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the ingest endpoint.
///
/// The numeric fields are `Option` so that an absent field maps to a 400
/// validation error while an explicit zero is accepted.
#[derive(Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub device_id: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub air_quality: Option<f64>,
    pub lpg_level: Option<f64>,
}

/// Query parameters for the history endpoint.
#[derive(Deserialize)]
pub struct HistoryQuery {
    /// Calendar date (`YYYY-MM-DD`), interpreted as a UTC day.
    pub date: Option<String>,
}

/// Success body for the ingest endpoint.
#[derive(Serialize)]
pub struct IngestBody {
    pub message: &'static str,
    pub data: SensorReading,
}

/// Body returned when a valid history request matches no rows.
#[derive(Serialize)]
pub struct NoDataBody {
    pub message: &'static str,
}

/// Possible responses from the ingest endpoint.
pub enum IngestResponse {
    Created(Json<IngestBody>),
}

impl IntoResponse for IngestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SensorReading>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the latest endpoint.
pub enum LatestResponse {
    Ok(Json<SensorReading>),
}

impl IntoResponse for LatestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the history endpoint.
///
/// An empty day is a 200 with an explicit message body — deliberately not
/// a 404, so the caller can tell "valid request, no data" from a malformed
/// request.
pub enum HistoryResponse {
    Rows(Json<Vec<SensorReading>>),
    Empty(Json<NoDataBody>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Rows(json) => json.into_response(),
            Self::Empty(json) => json.into_response(),
        }
    }
}

/// `POST /api/data`
pub async fn ingest<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Json(req): Json<IngestRequest>,
) -> Result<IngestResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    if req.device_id.is_empty() {
        return Err(ApiError::from(SensorHubError::from(ValidationError::MissingDeviceId)));
    }
    let temperature = require(req.temperature, "temperature")?;
    let humidity = require(req.humidity, "humidity")?;
    let air_quality = require(req.air_quality, "air_quality")?;
    let lpg_level = require(req.lpg_level, "lpg_level")?;

    let data = state
        .reading_service
        .ingest(&req.device_id, temperature, humidity, air_quality, lpg_level)
        .await?;
    Ok(IngestResponse::Created(Json(IngestBody {
        message: "data recorded",
        data,
    })))
}

/// `GET /api/data/{device_id}`
pub async fn list<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Path(device_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let rows = state.reading_service.list(&device_id).await?;
    Ok(ListResponse::Ok(Json(rows)))
}

/// `GET /api/data/latest/{device_id}`
pub async fn latest<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Path(device_id): Path<String>,
) -> Result<LatestResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let reading = state.reading_service.latest(&device_id).await?;
    Ok(LatestResponse::Ok(Json(reading)))
}

/// `GET /api/data/history/{device_id}?date=YYYY-MM-DD`
pub async fn history<UR, RR, H>(
    State(state): State<AppState<UR, RR, H>>,
    Path(device_id): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> Result<HistoryResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    RR: ReadingRepository + Send + Sync + 'static,
    H: PasswordHasher + Send + Sync + 'static,
{
    let Some(raw_date) = params.date else {
        return Err(ApiError::from(SensorHubError::from(ValidationError::MissingField("date"))));
    };
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| ApiError::from(SensorHubError::from(ValidationError::InvalidDate(raw_date))))?;

    let rows = state.reading_service.history(&device_id, date).await?;
    if rows.is_empty() {
        Ok(HistoryResponse::Empty(Json(NoDataBody {
            message: "no data found for the given date",
        })))
    } else {
        Ok(HistoryResponse::Rows(Json(rows)))
    }
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, ApiError> {
    value.ok_or_else(|| ApiError::from(SensorHubError::from(ValidationError::MissingField(field))))
}
