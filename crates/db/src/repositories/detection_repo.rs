//! Repository for the `detections` table.
//!
//! Insert and query only: detections are append-only and the service never
//! updates or deletes them.

use plategate_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::detection::{CreateDetection, Detection, DetectionQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, plate_number, image_url, confidence_score, \
    vehicle_type, owner_name, verification_status, detection_time";

/// Provides insert and query operations for detections.
pub struct DetectionRepo;

impl DetectionRepo {
    /// Insert a new detection, returning the created row.
    ///
    /// `detection_time` is assigned by the database at insert time.
    pub async fn create(pool: &PgPool, input: &CreateDetection) -> Result<Detection, sqlx::Error> {
        let query = format!(
            "INSERT INTO detections \
                (plate_number, image_url, confidence_score, vehicle_type, \
                 owner_name, verification_status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Detection>(&query)
            .bind(&input.plate_number)
            .bind(&input.image_url)
            .bind(input.confidence_score)
            .bind(&input.vehicle_type)
            .bind(&input.owner_name)
            .bind(input.verification_status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Query detections with filtering and pagination, newest first.
    pub async fn query(
        pool: &PgPool,
        params: &DetectionQuery,
    ) -> Result<Vec<Detection>, sqlx::Error> {
        let limit = params.limit.unwrap_or(100).min(500);
        let offset = params.offset.unwrap_or(0);

        let (where_clause, bind_values, bind_idx) = build_detection_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM detections {where_clause} \
             ORDER BY detection_time DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, Detection>(&query);
        for val in &bind_values {
            q = q.bind(val.as_str());
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// The most recent detections, for the dashboard activity list.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Detection>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM detections ORDER BY detection_time DESC LIMIT $1");
        sqlx::query_as::<_, Detection>(&query)
            .bind(limit.min(100))
            .fetch_all(pool)
            .await
    }

    /// The most recent detections for one plate, for the lookup screen.
    pub async fn recent_by_plate(
        pool: &PgPool,
        plate_number: &str,
        limit: i64,
    ) -> Result<Vec<Detection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM detections WHERE plate_number = $1 \
             ORDER BY detection_time DESC LIMIT $2"
        );
        sqlx::query_as::<_, Detection>(&query)
            .bind(plate_number)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of detections.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM detections")
            .fetch_one(pool)
            .await
    }

    /// Number of detections with the given `verification_status` label.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM detections WHERE verification_status = $1",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Number of detections observed at or after `since`.
    pub async fn count_since(pool: &PgPool, since: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM detections WHERE detection_time >= $1")
            .bind(since)
            .fetch_one(pool)
            .await
    }
}

/// Build a WHERE clause and bind values from `DetectionQuery` parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no filters are active, or starts with `WHERE `. All bind
/// values are text.
fn build_detection_filter(params: &DetectionQuery) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<String> = Vec::new();

    if let Some(ref search) = params.search {
        conditions.push(format!(
            "(plate_number ILIKE ${bind_idx} OR owner_name ILIKE ${})",
            bind_idx + 1
        ));
        bind_idx += 2;
        let pattern = format!("%{search}%");
        bind_values.push(pattern.clone());
        bind_values.push(pattern);
    }

    if let Some(ref status) = params.status {
        conditions.push(format!("verification_status = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(status.clone());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}
