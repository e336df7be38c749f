//! Detection entity model and DTOs.
//!
//! Detections are the primary record of the system: one row per event
//! reported by the recognition pipeline, created once and never updated.
//! `detection_time` is always server-assigned.

use plategate_core::types::{DbId, Timestamp};
use plategate_core::verification::VerificationStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Detection entity
// ---------------------------------------------------------------------------

/// A single observed vehicle-plate event. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Detection {
    pub id: DbId,
    /// Always stored uppercase.
    pub plate_number: String,
    pub image_url: Option<String>,
    pub confidence_score: Option<f64>,
    pub vehicle_type: Option<String>,
    pub owner_name: Option<String>,
    pub verification_status: String,
    pub detection_time: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for inserting a new detection.
///
/// Carries already-normalized values; boundary validation happens in the
/// ingest handler before this struct is built. `detection_time` is not a
/// field here — the database assigns it.
#[derive(Debug, Clone)]
pub struct CreateDetection {
    pub plate_number: String,
    pub image_url: Option<String>,
    pub confidence_score: Option<f64>,
    pub vehicle_type: Option<String>,
    pub owner_name: Option<String>,
    pub verification_status: VerificationStatus,
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter parameters for querying detections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionQuery {
    /// Matches plate number or owner name, case-insensitive substring.
    pub search: Option<String>,
    /// Exact `verification_status` label.
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
