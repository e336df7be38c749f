//! In-process change bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ChangeBus`] is the central publish/subscribe hub for [`ChangeEvent`]s.
//! It is designed to be shared via `Arc<ChangeBus>` across the application.

use chrono::{DateTime, Utc};
use plategate_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// A signal that a resource table changed.
///
/// Carries the table name and, where cheap to provide, the id of the row
/// that changed. Subscribers treat it as a re-fetch trigger only; no
/// delivery or ordering guarantees are made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Resource table name, e.g. `"detections"`.
    pub table: String,

    /// Id of the changed row, when known to the publisher.
    pub entity_id: Option<DbId>,

    /// When the change was published (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    /// Create a new event for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            entity_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the id of the changed row.
    pub fn with_entity(mut self, entity_id: DbId) -> Self {
        self.entity_id = Some(entity_id);
        self
    }
}

// ---------------------------------------------------------------------------
// ChangeBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out change bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// a missed signal only costs the dashboard one re-fetch.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = ChangeBus::default();
        let mut rx = bus.subscribe();

        let id = uuid::Uuid::new_v4();
        bus.publish(ChangeEvent::new("detections").with_entity(id));

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.table, "detections");
        assert_eq!(received.entity_id, Some(id));
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = ChangeBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChangeEvent::new("vehicles"));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.table, "vehicles");
        assert_eq!(e2.table, "vehicles");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = ChangeBus::default();
        // No subscribers — this must not panic.
        bus.publish(ChangeEvent::new("access_logs"));
    }

    #[test]
    fn bare_event_has_no_entity_id() {
        let event = ChangeEvent::new("detections");
        assert_eq!(event.table, "detections");
        assert!(event.entity_id.is_none());
    }
}
