//! Handlers for the `/detections` resource (dashboard read surface).
//!
//! Detections are created by the ingestion endpoint only; the dashboard
//! reads them. Filtering happens server-side.

use axum::extract::{Query, State};
use axum::Json;
use plategate_db::models::detection::{Detection, DetectionQuery};
use plategate_db::repositories::DetectionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/detections
///
/// Query detections with search/status filters and pagination, newest
/// first. `search` matches plate number or owner name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DetectionQuery>,
) -> AppResult<Json<DataResponse<Vec<Detection>>>> {
    let detections = DetectionRepo::query(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: detections }))
}
