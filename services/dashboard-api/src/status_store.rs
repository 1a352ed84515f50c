//! Status-check persistence using PostgreSQL.
//!
//! Legacy audit feature: the dashboard front-end posts a status check on
//! load. The store is optional; without `DATABASE_URL` the service runs and
//! the status routes answer 503.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Maximum number of checks returned by a listing.
pub const LIST_LIMIT: i64 = 1000;

/// One recorded status check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a check for a client, stamped with a fresh id and the current
    /// UTC time.
    pub fn new(client_name: &str) -> Self {
        Self { id: Uuid::new_v4(), client_name: client_name.to_string(), timestamp: Utc::now() }
    }
}

/// Database connection pool and status-check operations.
pub struct StatusStore {
    pool: PgPool,
}

impl StatusStore {
    /// Create a new store connection from database URL.
    pub async fn connect(database_url: &str) -> ApiResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| ApiError::Database(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> ApiResult<()> {
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| ApiError::Database(format!("Migration failed: {}", e)))?;
            }
        }

        Ok(())
    }

    /// Check connectivity for readiness probes.
    pub async fn ping(&self) -> ApiResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Database(format!("Ping failed: {}", e)))?;
        Ok(())
    }

    /// Persist a status check.
    pub async fn insert(&self, check: &StatusCheck) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)",
        )
        .bind(check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::Database(format!("Insert failed: {}", e)))?;

        Ok(())
    }

    /// List the most recent status checks, newest first.
    pub async fn list(&self, limit: i64) -> ApiResult<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, StatusCheck>(
            "SELECT id, client_name, timestamp FROM status_checks \
             ORDER BY timestamp DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Database(format!("Query failed: {}", e)))?;

        Ok(rows)
    }
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS status_checks (
    id UUID PRIMARY KEY,
    client_name TEXT NOT NULL,
    timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_status_checks_timestamp ON status_checks(timestamp DESC);
"#;
