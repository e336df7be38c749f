//! Handlers for the dashboard landing page widgets.
//!
//! Aggregate counters plus a short recent-activity list. All counts are
//! computed in the database; "today" uses the UTC midnight boundary.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveTime;
use plategate_db::models::detection::Detection;
use plategate_db::repositories::{DetectionRepo, VehicleRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response / query types
// ---------------------------------------------------------------------------

/// Aggregate counters for the stat cards.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_detections: i64,
    pub resident_vehicles: i64,
    pub visitor_detections: i64,
    pub today_detections: i64,
}

/// Query params for `GET /dashboard/recent-detections`.
#[derive(Debug, Deserialize)]
pub struct RecentDetectionsQuery {
    /// Maximum rows to return. Defaults to 10.
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let today_start = chrono::Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let total_detections = DetectionRepo::count_all(&state.pool).await?;
    let resident_vehicles = VehicleRepo::count_residents(&state.pool).await?;
    let visitor_detections = DetectionRepo::count_by_status(&state.pool, "Visitor").await?;
    let today_detections = DetectionRepo::count_since(&state.pool, today_start).await?;

    Ok(Json(DataResponse {
        data: DashboardStats {
            total_detections,
            resident_vehicles,
            visitor_detections,
            today_detections,
        },
    }))
}

/// GET /api/v1/dashboard/recent-detections
pub async fn recent_detections(
    State(state): State<AppState>,
    Query(params): Query<RecentDetectionsQuery>,
) -> AppResult<Json<DataResponse<Vec<Detection>>>> {
    let limit = params.limit.unwrap_or(10);
    let detections = DetectionRepo::recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: detections }))
}
