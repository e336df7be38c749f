//! Route definitions for the detection ingestion surface.
//!
//! This is the endpoint the external recognition pipeline calls. It is
//! mounted at the server root, outside `/api/v1`, and carries its own
//! permissive CORS policy: callers are headless capture devices and edge
//! scripts, not the dashboard.

use axum::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::ingest;
use crate::state::AppState;

/// Ingestion routes.
///
/// ```text
/// POST /                      -> ingest_detection (historical path)
/// POST /ingest/detections     -> ingest_detection
/// ```
///
/// Preflight `OPTIONS` requests are answered by the CORS layer with 200.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(ingest::ingest_detection))
        .route("/ingest/detections", post(ingest::ingest_detection))
        .layer(cors_layer())
}

/// Permissive CORS for the ingestion surface: any origin, the header set
/// recognition clients are known to send.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}
