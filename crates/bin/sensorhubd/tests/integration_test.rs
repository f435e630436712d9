//! End-to-end smoke tests for the full sensorhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real bcrypt hasher, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sensorhub_adapter_http_axum::router;
use sensorhub_adapter_http_axum::state::AppState;
use sensorhub_adapter_password_bcrypt::BcryptHasher;
use sensorhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteReadingRepository, SqliteUserRepository,
};
use sensorhub_app::services::account_service::AccountService;
use sensorhub_app::services::reading_service::ReadingService;
use tower::ServiceExt;

/// Minimum cost accepted by bcrypt; the crate keeps its own constant private.
const MIN_COST: u32 = 4;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
///
/// Uses the minimum bcrypt cost so the signup/login tests stay fast.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let user_repo = SqliteUserRepository::new(pool.clone());
    let reading_repo = SqliteReadingRepository::new(pool);
    let hasher = BcryptHasher::with_cost(MIN_COST);

    let state = AppState::new(
        AccountService::new(user_repo, hasher),
        ReadingService::new(reading_repo),
    );

    router::build(state)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Accounts: admin signup, user signup, login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_account_and_login_with_same_credentials() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"user@example.com","password":"hunter2","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["device_id"], "dev1");
    assert_eq!(body["user"]["email"], "user@example.com");
    // password is stripped from every user payload
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"user@example.com","password":"hunter2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["device_id"], "dev1");
}

#[tokio::test]
async fn should_reject_admin_signup_without_device_id() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"user@example.com","password":"hunter2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_overwrite_account_when_admin_signup_repeats_device_id() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"old@example.com","password":"old-pass","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"new@example.com","password":"new-pass","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"old@example.com","password":"old-pass"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"new@example.com","password":"new-pass"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["device_id"], "dev1");
}

#[tokio::test]
async fn should_update_credentials_for_existing_device() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"old@example.com","password":"old-pass","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/signup",
            r#"{"email":"new@example.com","password":"new-pass","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["email"], "new@example.com");

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"new@example.com","password":"new-pass"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_not_found_when_signing_up_unknown_device() {
    let resp = app()
        .await
        .oneshot(json_request(
            "PUT",
            "/api/signup",
            r#"{"email":"user@example.com","password":"hunter2","device_id":"ghost"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_signup_without_device_id() {
    let resp = app()
        .await
        .oneshot(json_request(
            "PUT",
            "/api/signup",
            r#"{"email":"user@example.com","password":"hunter2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/signup/admin",
            r#"{"email":"user@example.com","password":"hunter2","device_id":"dev1"}"#,
        ))
        .await
        .unwrap();

    let unknown_email = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"ghost@example.com","password":"hunter2"}"#,
        ))
        .await
        .unwrap();
    let wrong_password = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"user@example.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    // Identical error bodies: no account enumeration
    let first = body_json(unknown_email).await;
    let second = body_json(wrong_password).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_reject_login_with_missing_fields() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"user@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Readings: ingest, list, latest
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_ingest_reading_and_return_it_from_latest() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"device_id":"dev1","temperature":21.5,"humidity":40.0,"air_quality":12.0,"lpg_level":0.3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["device_id"], "dev1");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert!(body["data"]["recorded_at"].is_string());

    let resp = app
        .oneshot(get_request("/api/data/latest/dev1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["temperature"], 21.5);
    assert_eq!(body["humidity"], 40.0);
    assert_eq!(body["air_quality"], 12.0);
    assert_eq!(body["lpg_level"], 0.3);
}

#[tokio::test]
async fn should_accept_zero_values_on_ingest() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"device_id":"dev1","temperature":0,"humidity":0,"air_quality":0,"lpg_level":0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn should_reject_ingest_with_absent_field_and_store_nothing() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"device_id":"dev1","temperature":21.5,"humidity":40.0,"lpg_level":0.3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Row count unchanged: the list for the device stays empty
    let resp = app.oneshot(get_request("/api/data/dev1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_reject_ingest_without_device_id() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"temperature":21.5,"humidity":40.0,"air_quality":12.0,"lpg_level":0.3}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_list_readings_most_recent_first() {
    let app = app().await;

    for temperature in ["1.0", "2.0", "3.0"] {
        let body = format!(
            r#"{{"device_id":"dev1","temperature":{temperature},"humidity":40.0,"air_quality":12.0,"lpg_level":0.3}}"#
        );
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/data", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get_request("/api/data/dev1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    // Timestamps are non-increasing
    let times: Vec<chrono::DateTime<chrono::Utc>> = rows
        .iter()
        .map(|r| {
            chrono::DateTime::parse_from_rfc3339(r["recorded_at"].as_str().unwrap())
                .unwrap()
                .to_utc()
        })
        .collect();
    assert!(times[0] >= times[1]);
    assert!(times[1] >= times[2]);
}

#[tokio::test]
async fn should_return_empty_list_for_unknown_device() {
    let resp = app()
        .await
        .oneshot(get_request("/api/data/ghost"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_return_not_found_for_latest_on_unknown_device() {
    let resp = app()
        .await
        .oneshot(get_request("/api/data/latest/ghost"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Readings: history by date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_history_without_date() {
    let resp = app()
        .await
        .oneshot(get_request("/api/data/history/dev1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_history_with_malformed_date() {
    let resp = app()
        .await
        .oneshot(get_request("/api/data/history/dev1?date=not-a-date"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_message_body_when_history_has_no_rows() {
    let resp = app()
        .await
        .oneshot(get_request("/api/data/history/dev1?date=1999-01-01"))
        .await
        .unwrap();
    // Deliberately a 200, not a 404: the request was valid, there is just no data
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn should_return_todays_readings_in_chronological_order() {
    let app = app().await;

    for temperature in ["1.0", "2.0"] {
        let body = format!(
            r#"{{"device_id":"dev1","temperature":{temperature},"humidity":40.0,"air_quality":12.0,"lpg_level":0.3}}"#
        );
        app.clone()
            .oneshot(json_request("POST", "/api/data", &body))
            .await
            .unwrap();
    }

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d");
    let resp = app
        .oneshot(get_request(&format!("/api/data/history/dev1?date={today}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let times: Vec<chrono::DateTime<chrono::Utc>> = rows
        .iter()
        .map(|r| {
            chrono::DateTime::parse_from_rfc3339(r["recorded_at"].as_str().unwrap())
                .unwrap()
                .to_utc()
        })
        .collect();
    assert!(times[0] <= times[1]);
}
