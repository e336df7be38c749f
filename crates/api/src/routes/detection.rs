//! Route definitions for the `/detections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::detection;
use crate::state::AppState;

/// Detection routes mounted at `/detections`.
///
/// ```text
/// GET  /    -> list (filtered, paginated)
/// ```
///
/// Detections are created through the ingestion surface only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(detection::list))
}
