//! Route definitions for the plate lookup screen.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// Lookup routes mounted at `/lookup`.
///
/// ```text
/// GET  /{plate}    -> lookup_plate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{plate}", get(lookup::lookup_plate))
}
