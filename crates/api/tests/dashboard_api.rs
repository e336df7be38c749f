//! Integration tests for the dashboard read surface: detections list,
//! access logs, lookup, and the stats widgets.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Ingest one detection through the real endpoint so the audit trail and
/// change bus run too.
async fn ingest(app: axum::Router, plate: &str, status: &str) {
    let response = post_json(
        app,
        "/",
        json!({ "plate_number": plate, "verification_status": status }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: detections list with server-side filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn detections_list_filters_server_side(pool: PgPool) {
    let app = common::build_test_app(pool);

    ingest(app.clone(), "MH12AB1234", "Resident").await;
    ingest(app.clone(), "KA01X9999", "Visitor").await;

    let all = body_json(get(app.clone(), "/api/v1/detections").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let visitors = body_json(get(app.clone(), "/api/v1/detections?status=Visitor").await).await;
    let visitors = visitors["data"].as_array().unwrap();
    assert_eq!(visitors.len(), 1);
    assert_eq!(visitors[0]["plate_number"], "KA01X9999");

    let searched = body_json(get(app.clone(), "/api/v1/detections?search=mh12").await).await;
    assert_eq!(searched["data"].as_array().unwrap().len(), 1);

    let limited = body_json(get(app, "/api/v1/detections?limit=1").await).await;
    assert_eq!(limited["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: access logs are listed newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn access_logs_list_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    ingest(app.clone(), "AA00AA0001", "Unknown").await;
    ingest(app.clone(), "AA00AA0002", "Unknown").await;

    let logs = body_json(get(app, "/api/v1/access-logs").await).await;
    let logs = logs["data"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(
        logs[0]["status_message"],
        "Vehicle AA00AA0002 detected - Status: Unknown"
    );
    assert!(logs[0]["detection_id"].is_string());
}

// ---------------------------------------------------------------------------
// Test: lookup combines registry entry and detection history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn lookup_returns_vehicle_and_history(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/vehicles",
        json!({
            "plate_number": "MH12AB1234",
            "vehicle_type": "Car",
            "owner_name": "Asha Rao",
        }),
    )
    .await;
    ingest(app.clone(), "MH12AB1234", "Resident").await;
    ingest(app.clone(), "MH12AB1234", "Resident").await;

    // Lowercase path segment still hits the canonical plate.
    let result = body_json(get(app.clone(), "/api/v1/lookup/mh12ab1234").await).await;
    assert_eq!(result["data"]["plate_number"], "MH12AB1234");
    assert_eq!(result["data"]["vehicle"]["owner_name"], "Asha Rao");
    assert_eq!(result["data"]["detections"].as_array().unwrap().len(), 2);

    // A plate nobody has seen: empty result, not an error.
    let missing = body_json(get(app, "/api/v1/lookup/ZZ99ZZ9999").await).await;
    assert!(missing["data"]["vehicle"].is_null());
    assert_eq!(missing["data"]["detections"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: dashboard stats and recent activity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn dashboard_stats_count_by_category(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/vehicles",
        json!({
            "plate_number": "MH12AB1234",
            "vehicle_type": "Car",
            "owner_name": "Asha Rao",
        }),
    )
    .await;

    ingest(app.clone(), "MH12AB1234", "Resident").await;
    ingest(app.clone(), "KA01X9999", "Visitor").await;
    ingest(app.clone(), "KA01X9999", "Visitor").await;

    let stats = body_json(get(app.clone(), "/api/v1/dashboard/stats").await).await;
    assert_eq!(stats["data"]["total_detections"], 3);
    assert_eq!(stats["data"]["resident_vehicles"], 1);
    assert_eq!(stats["data"]["visitor_detections"], 2);
    // Everything was ingested moments ago, within today's UTC window.
    assert_eq!(stats["data"]["today_detections"], 3);

    let recent = body_json(get(app, "/api/v1/dashboard/recent-detections?limit=2").await).await;
    let recent = recent["data"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
}
