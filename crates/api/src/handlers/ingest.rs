//! Handler for the detection ingestion endpoint.
//!
//! The external recognition pipeline posts one event per detected plate.
//! The handler validates, records the detection, writes a best-effort
//! audit entry, resolves residency, and answers synchronously:
//!
//! 1. Validate `plate_number` (required) and `confidence_score` (in [0,1]).
//!    Fails before any write.
//! 2. Normalize the plate to trimmed uppercase; default the status to
//!    `Unknown`.
//! 3. Insert the detection row. Failure fails the whole request; nothing
//!    else is attempted.
//! 4. Insert the access log entry via [`AuditTrail`] — never fatal.
//! 5. Look up the registry entry for the plate; absence is not an error,
//!    and a lookup fault degrades to "not a known vehicle".
//!
//! Steps 3–5 are not a single transaction: a detection must never be lost
//! because the audit write failed. The endpoint is not idempotent; the
//! caller retries and duplicates are acceptable.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plategate_core::error::CoreError;
use plategate_core::plate::{validate_confidence, validate_plate};
use plategate_core::verification::{access_status_message, VerificationStatus};
use plategate_db::models::detection::{CreateDetection, Detection};
use plategate_db::models::vehicle::Vehicle;
use plategate_db::repositories::{DetectionRepo, VehicleRepo};
use plategate_events::ChangeEvent;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::audit::AuditTrail;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /` on the ingestion surface.
///
/// Unknown fields are rejected so callers cannot smuggle server-assigned
/// values (`detection_time`, `id`) into the record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestDetectionRequest {
    pub plate_number: Option<String>,
    pub image_url: Option<String>,
    pub confidence_score: Option<f64>,
    pub vehicle_type: Option<String>,
    pub owner_name: Option<String>,
    pub verification_status: Option<VerificationStatus>,
}

/// Successful ingestion result.
#[derive(Debug, Serialize)]
pub struct IngestDetectionResponse {
    pub success: bool,
    /// The detection row as stored, plate uppercased, time server-assigned.
    pub detection: Detection,
    /// True iff a registry row matched the plate (regardless of its
    /// `is_resident` column — the row itself carries that flag).
    pub is_resident: bool,
    pub resident_info: Option<Vehicle>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Failure modes visible to the recognition pipeline.
///
/// The wire shape is `{ "error": <message> }` with no error code, and a
/// persistence failure carries the storage layer's message — this endpoint
/// predates the dashboard API conventions and external callers depend on
/// the shape.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Malformed or missing input. No side effects were performed.
    #[error("{0}")]
    Validation(String),

    /// The primary detection write failed. Nothing was written.
    #[error("{0}")]
    Persistence(#[from] sqlx::Error),
}

impl From<CoreError> for IngestError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => IngestError::Validation(msg),
            other => IngestError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = match &self {
            IngestError::Validation(_) => StatusCode::BAD_REQUEST,
            IngestError::Persistence(e) => {
                tracing::error!(error = %e, "Failed to persist detection");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST / — ingest one detection event.
pub async fn ingest_detection(
    State(state): State<AppState>,
    Json(input): Json<IngestDetectionRequest>,
) -> Result<Json<IngestDetectionResponse>, IngestError> {
    // Step 1–2: validate and normalize before any write.
    let plate = validate_plate(input.plate_number.as_deref())?;
    let confidence_score = validate_confidence(input.confidence_score)?;
    let verification_status = input.verification_status.unwrap_or_default();

    // Step 3: the primary effect. A failure here fails the request.
    let detection = DetectionRepo::create(
        &state.pool,
        &CreateDetection {
            plate_number: plate.clone(),
            image_url: input.image_url,
            confidence_score,
            vehicle_type: input.vehicle_type,
            owner_name: input.owner_name,
            verification_status,
        },
    )
    .await?;

    state
        .change_bus
        .publish(ChangeEvent::new("detections").with_entity(detection.id));

    // Step 4: best-effort audit entry; never aborts the request.
    AuditTrail::record(
        &state.pool,
        &state.change_bus,
        detection.id,
        access_status_message(&plate, verification_status),
    )
    .await;

    // Step 5: residency lookup. A miss is a normal outcome; a storage
    // fault here degrades to "not a known vehicle" rather than failing a
    // detection that is already durably recorded.
    let resident_info = match VehicleRepo::find_by_plate(&state.pool, &plate).await {
        Ok(vehicle) => vehicle,
        Err(e) => {
            tracing::error!(error = %e, plate = %plate, "Vehicle lookup failed");
            None
        }
    };

    let is_resident = resident_info.is_some();
    tracing::info!(
        plate = %plate,
        status = %verification_status,
        is_resident,
        "Detection ingested"
    );

    Ok(Json(IngestDetectionResponse {
        success: true,
        detection,
        is_resident,
        resident_info,
    }))
}
