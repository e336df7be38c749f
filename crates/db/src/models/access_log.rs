//! Access log entity model and DTO.
//!
//! Append-only audit trail: one entry is written best-effort for each
//! ingested detection. Entries are never updated or deleted.

use plategate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single audit trail entry tied to a detection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccessLog {
    pub id: DbId,
    /// Weak reference to the detection recorded in the same ingestion call.
    pub detection_id: Option<DbId>,
    pub timestamp: Timestamp,
    pub status_message: String,
}

/// DTO for inserting a new access log entry. `timestamp` is assigned by the
/// database.
#[derive(Debug, Clone)]
pub struct CreateAccessLog {
    pub detection_id: Option<DbId>,
    pub status_message: String,
}
