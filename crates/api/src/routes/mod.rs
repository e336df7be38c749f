pub mod access_log;
pub mod dashboard;
pub mod detection;
pub mod health;
pub mod ingest;
pub mod lookup;
pub mod vehicle;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree consumed by the dashboard.
///
/// Route hierarchy:
///
/// ```text
/// /ws                               WebSocket change feed
///
/// /detections                       filtered list (GET)
///
/// /vehicles                         list (GET), register (POST)
/// /vehicles/{id}                    get, update (PUT), delete (DELETE)
///
/// /access-logs                      list (GET)
///
/// /lookup/{plate}                   registry entry + recent detections
///
/// /dashboard/stats                  aggregate counters
/// /dashboard/recent-detections      latest activity
/// ```
///
/// The ingestion surface is NOT part of this tree — see
/// [`ingest::router`] for the standalone endpoint the recognition
/// pipeline calls.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/detections", detection::router())
        .nest("/vehicles", vehicle::router())
        .nest("/access-logs", access_log::router())
        .nest("/lookup", lookup::router())
        .nest("/dashboard", dashboard::router())
}
