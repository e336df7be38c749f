//! Handler for the plate lookup screen.
//!
//! Combines the registry entry (if any) with the plate's recent detection
//! history in one response. "Not found" is a normal outcome here: both
//! fields can be empty.

use axum::extract::{Path, State};
use axum::Json;
use plategate_core::plate::normalize_plate;
use plategate_db::models::detection::Detection;
use plategate_db::models::vehicle::Vehicle;
use plategate_db::repositories::{DetectionRepo, VehicleRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recent detections returned per lookup.
const LOOKUP_HISTORY_LIMIT: i64 = 5;

/// Combined lookup result for one plate.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// The plate as it was searched, canonical form.
    pub plate_number: String,
    pub vehicle: Option<Vehicle>,
    pub detections: Vec<Detection>,
}

/// GET /api/v1/lookup/{plate}
pub async fn lookup_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<Json<DataResponse<LookupResult>>> {
    let normalized = normalize_plate(&plate);

    let vehicle = VehicleRepo::find_by_plate(&state.pool, &normalized).await?;
    let detections =
        DetectionRepo::recent_by_plate(&state.pool, &normalized, LOOKUP_HISTORY_LIMIT).await?;

    Ok(Json(DataResponse {
        data: LookupResult {
            plate_number: normalized,
            vehicle,
            detections,
        },
    }))
}
