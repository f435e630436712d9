//! `SQLite` implementation of [`ReadingRepository`].
//!
//! Timestamps are stored as RFC 3339 UTC strings at a fixed millisecond
//! precision so that `ORDER BY recorded_at` compares lexicographically in
//! chronological order.

use chrono::{SecondsFormat, SubsecRound};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sensorhub_app::ports::ReadingRepository;
use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::reading::{NewReading, SensorReading};
use sensorhub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(SensorReading);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let recorded_at_str: String = row.try_get("recorded_at")?;
        let recorded_at = chrono::DateTime::parse_from_rfc3339(&recorded_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(SensorReading {
            id: row.try_get("id")?,
            device_id: row.try_get("device_id")?,
            temperature: row.try_get("temperature")?,
            humidity: row.try_get("humidity")?,
            air_quality: row.try_get("air_quality")?,
            lpg_level: row.try_get("lpg_level")?,
            recorded_at,
        }))
    }
}

/// Serialize a timestamp in the fixed storage format.
fn encode(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

const INSERT: &str = r"
    INSERT INTO sensor_data (device_id, temperature, humidity, air_quality, lpg_level, recorded_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_DEVICE: &str = r"
    SELECT * FROM sensor_data
    WHERE device_id = ?
    ORDER BY recorded_at DESC
";

const SELECT_LATEST: &str = r"
    SELECT * FROM sensor_data
    WHERE device_id = ?
    ORDER BY recorded_at DESC
    LIMIT 1
";

const SELECT_IN_RANGE: &str = r"
    SELECT * FROM sensor_data
    WHERE device_id = ? AND recorded_at >= ? AND recorded_at <= ?
    ORDER BY recorded_at ASC
";

/// `SQLite`-backed reading repository.
pub struct SqliteReadingRepository {
    pool: SqlitePool,
}

impl SqliteReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for SqliteReadingRepository {
    async fn insert(&self, reading: NewReading) -> Result<SensorReading, SensorHubError> {
        // Truncate to the storage precision so the returned row matches
        // what later queries will see.
        let recorded_at = reading.recorded_at.trunc_subsecs(3);

        let result = sqlx::query(INSERT)
            .bind(&reading.device_id)
            .bind(reading.temperature)
            .bind(reading.humidity)
            .bind(reading.air_quality)
            .bind(reading.lpg_level)
            .bind(encode(recorded_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(SensorReading {
            id: result.last_insert_rowid(),
            device_id: reading.device_id,
            temperature: reading.temperature,
            humidity: reading.humidity,
            air_quality: reading.air_quality,
            lpg_level: reading.lpg_level,
            recorded_at,
        })
    }

    async fn find_by_device(&self, device_id: &str) -> Result<Vec<SensorReading>, SensorHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_DEVICE)
            .bind(device_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_latest(&self, device_id: &str) -> Result<Option<SensorReading>, SensorHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_LATEST)
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn find_in_range(
        &self,
        device_id: &str,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<SensorReading>, SensorHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_IN_RANGE)
            .bind(device_id)
            .bind(encode(from))
            .bind(encode(to))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
