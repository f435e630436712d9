//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sensorhub_app::ports::UserRepository;
use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            device_id: row.try_get("device_id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
        }))
    }
}

const UPSERT: &str = r"
    INSERT INTO users (device_id, email, password_hash)
    VALUES (?, ?, ?)
    ON CONFLICT (device_id) DO UPDATE
    SET email = excluded.email, password_hash = excluded.password_hash
";

const UPDATE_BY_DEVICE: &str = r"
    UPDATE users SET email = ?, password_hash = ? WHERE device_id = ?
";

const SELECT_BY_EMAIL: &str = r"
    SELECT * FROM users WHERE email = ? LIMIT 1
";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, user: User) -> Result<User, SensorHubError> {
        sqlx::query(UPSERT)
            .bind(&user.device_id)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user)
    }

    async fn update_credentials(&self, user: User) -> Result<Option<User>, SensorHubError> {
        let result = sqlx::query(UPDATE_BY_DEVICE)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.device_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(user))
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SensorHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }
}
