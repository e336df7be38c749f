//! Route definitions for the dashboard widgets.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboard`.
///
/// ```text
/// GET  /stats                 -> stats
/// GET  /recent-detections     -> recent_detections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/recent-detections", get(dashboard::recent_detections))
}
