//! Delivery boundary for encoded notifications.
//!
//! Sinks own delivery mechanics only. The encoder hands them a finished
//! payload; they never inspect, reorder, or rewrite it. Real deployments
//! plug in a trap sender here, tests and demos use the in-memory sink.

use crate::encoder::EncodedNotification;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

/// Sink errors.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("sink buffer lock poisoned")]
    LockError,
}

/// Trait for notification delivery backends.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, notification: &EncodedNotification) -> Result<(), SinkError>;
}

/// Deterministic in-memory sink used for tests and demos.
#[derive(Default)]
pub struct InMemorySink {
    delivered: Mutex<Vec<EncodedNotification>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications delivered so far, in delivery order.
    pub fn delivered(&self) -> Result<Vec<EncodedNotification>, SinkError> {
        let delivered = self.delivered.lock().map_err(|_| SinkError::LockError)?;
        Ok(delivered.clone())
    }
}

impl NotificationSink for InMemorySink {
    fn deliver(&self, notification: &EncodedNotification) -> Result<(), SinkError> {
        let mut delivered = self.delivered.lock().map_err(|_| SinkError::LockError)?;
        delivered.push(notification.clone());
        Ok(())
    }
}

/// A sink that records deliveries to the log and drops them.
///
/// A stand-in while wiring a deployment whose real trap sender runs
/// elsewhere.
#[derive(Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&self, notification: &EncodedNotification) -> Result<(), SinkError> {
        info!(
            notification = notification.notification.symbol(),
            trap_oid = %notification.trap_oid(),
            bindings = notification.bindings.len(),
            "notification delivered to log"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::event::{ExecutionState, WorkflowEvent};

    #[test]
    fn in_memory_sink_preserves_delivery_order() {
        let sink = InMemorySink::new();
        for state in [ExecutionState::Queued, ExecutionState::Started] {
            let event = WorkflowEvent::new(state, "acme", "dep-1", "install", "exec-42");
            sink.deliver(&encode(&event).expect("event must encode"))
                .expect("must deliver");
        }

        let delivered = sink.delivered().expect("must read back");
        assert_eq!(delivered.len(), 2);
        assert_eq!(
            delivered[0].notification.symbol(),
            "cloudifyWorkflowQueued"
        );
        assert_eq!(
            delivered[1].notification.symbol(),
            "cloudifyWorkflowStarted"
        );
    }

    #[test]
    fn log_sink_always_accepts() {
        let event = WorkflowEvent::new(
            ExecutionState::Started,
            "acme",
            "dep-1",
            "install",
            "exec-42",
        );
        let encoded = encode(&event).expect("event must encode");
        assert!(LogSink.deliver(&encoded).is_ok());
    }
}
