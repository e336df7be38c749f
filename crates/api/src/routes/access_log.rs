//! Route definitions for the `/access-logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::access_log;
use crate::state::AppState;

/// Access log routes mounted at `/access-logs`.
///
/// ```text
/// GET  /    -> list (newest first)
/// ```
///
/// The audit trail is append-only; entries are written by the ingestion
/// path and never through this surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(access_log::list))
}
