//! Handlers for the `/access-logs` resource (read-only audit trail).

use axum::extract::{Query, State};
use axum::Json;
use plategate_db::models::access_log::AccessLog;
use plategate_db::repositories::AccessLogRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/access-logs
///
/// List audit entries, newest first. Entries are append-only; there is no
/// write surface here.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<AccessLog>>>> {
    let limit = params.limit.unwrap_or(100);
    let offset = params.offset.unwrap_or(0);

    let logs = AccessLogRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}
