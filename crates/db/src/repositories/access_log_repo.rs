//! Repository for the `access_logs` table.
//!
//! Append-only: insert and list, no updates or deletes.

use sqlx::PgPool;

use crate::models::access_log::{AccessLog, CreateAccessLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, detection_id, timestamp, status_message";

/// Provides insert and list operations for access logs.
pub struct AccessLogRepo;

impl AccessLogRepo {
    /// Insert a new audit entry, returning the created row.
    ///
    /// `timestamp` is assigned by the database at insert time.
    pub async fn create(pool: &PgPool, input: &CreateAccessLog) -> Result<AccessLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO access_logs (detection_id, status_message)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccessLog>(&query)
            .bind(input.detection_id)
            .bind(&input.status_message)
            .fetch_one(pool)
            .await
    }

    /// List audit entries, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<AccessLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM access_logs \
             ORDER BY timestamp DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AccessLog>(&query)
            .bind(limit.min(500))
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of audit entries.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM access_logs")
            .fetch_one(pool)
            .await
    }
}
