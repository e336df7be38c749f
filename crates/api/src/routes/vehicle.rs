//! Route definitions for the `/vehicles` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::vehicle;
use crate::state::AppState;

/// Vehicle registry routes mounted at `/vehicles`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicle::list))
        .route("/", post(vehicle::create))
        .route("/{id}", get(vehicle::get_by_id))
        .route("/{id}", put(vehicle::update))
        .route("/{id}", delete(vehicle::delete))
}
