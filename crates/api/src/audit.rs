//! Best-effort audit trail writer.
//!
//! The access log must never block or fail the primary detection record,
//! so the write path here is infallible from the caller's perspective:
//! storage failures are logged for operators and swallowed. Callers get no
//! `Result` to mishandle.

use plategate_core::types::DbId;
use plategate_db::models::access_log::CreateAccessLog;
use plategate_db::repositories::AccessLogRepo;
use plategate_db::DbPool;
use plategate_events::{ChangeBus, ChangeEvent};

/// Writes access log entries as a non-fatal side effect of ingestion.
pub struct AuditTrail;

impl AuditTrail {
    /// Record an audit entry for a freshly created detection.
    ///
    /// On success a change signal is published for `access_logs`. On
    /// failure the error is logged and the caller proceeds as if the
    /// entry had been written.
    pub async fn record(pool: &DbPool, bus: &ChangeBus, detection_id: DbId, status_message: String) {
        let input = CreateAccessLog {
            detection_id: Some(detection_id),
            status_message,
        };

        match AccessLogRepo::create(pool, &input).await {
            Ok(entry) => {
                bus.publish(ChangeEvent::new("access_logs").with_entity(entry.id));
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    detection_id = %detection_id,
                    "Failed to create access log entry"
                );
            }
        }
    }
}
