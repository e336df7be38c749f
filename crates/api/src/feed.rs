//! Change feed fan-out.
//!
//! [`ChangeFeed`] subscribes to the [`ChangeBus`](plategate_events::ChangeBus)
//! broadcast channel and forwards every received
//! [`ChangeEvent`](plategate_events::ChangeEvent) to all connected WebSocket
//! clients as a JSON signal. It runs as a long-lived background task and
//! shuts down when the bus sender is dropped.

use std::sync::Arc;

use axum::extract::ws::Message;
use plategate_core::types::{DbId, Timestamp};
use plategate_events::ChangeEvent;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Wire format pushed to dashboard clients.
///
/// Clients treat this as a re-fetch trigger for the named table; the
/// changed row itself is never included.
#[derive(Debug, Serialize)]
struct FeedMessage<'a> {
    /// Always `"change"`.
    r#type: &'static str,
    table: &'a str,
    entity_id: Option<DbId>,
    timestamp: Timestamp,
}

/// Background service that fans change events out to WebSocket clients.
pub struct ChangeFeed;

impl ChangeFeed {
    /// Run the fan-out loop.
    ///
    /// Subscribes to the change bus via the provided `receiver` and
    /// broadcasts every event. The loop exits when the channel is closed
    /// (i.e. the bus is dropped).
    pub async fn run(ws_manager: Arc<WsManager>, mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => Self::fan_out(&ws_manager, &event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Dropped signals only cost the dashboard a delayed
                    // re-fetch; the next event catches it up.
                    tracing::warn!(skipped = n, "Change feed lagged, some signals were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Change bus closed, feed shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and broadcast it to every connection.
    async fn fan_out(ws_manager: &WsManager, event: &ChangeEvent) {
        let message = FeedMessage {
            r#type: "change",
            table: &event.table,
            entity_id: event.entity_id,
            timestamp: event.timestamp,
        };

        match serde_json::to_string(&message) {
            Ok(text) => ws_manager.broadcast(Message::Text(text.into())).await,
            Err(e) => {
                tracing::error!(error = %e, table = %event.table, "Failed to serialize change signal");
            }
        }
    }
}
