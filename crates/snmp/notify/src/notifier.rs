//! Ties encoding to delivery: one call per lifecycle transition.

use crate::encoder::{encode, EncodedNotification};
use crate::event::WorkflowEvent;
use crate::sink::{NotificationSink, SinkError};
use snmp_types::MibError;
use thiserror::Error;
use tracing::warn;

/// Errors from the notifier, covering both halves of the pipeline.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("encoding error: {0}")]
    Encode(#[from] MibError),

    #[error("delivery error: {0}")]
    Deliver(#[from] SinkError),
}

/// Encodes lifecycle events and hands them to a sink.
///
/// The notifier is stateless apart from the sink it wraps, so one
/// instance can serve any number of concurrent workflow executions.
pub struct WorkflowNotifier<S: NotificationSink> {
    sink: S,
}

impl<S: NotificationSink> WorkflowNotifier<S> {
    /// Wrap a delivery sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Encode the event and deliver the resulting notification.
    ///
    /// Returns the encoded notification on success so callers can log or
    /// correlate it.
    pub fn notify(&self, event: &WorkflowEvent) -> Result<EncodedNotification, NotifyError> {
        let encoded = encode(event)?;
        if let Err(error) = self.sink.deliver(&encoded) {
            warn!(
                notification = encoded.notification.symbol(),
                execution = %event.execution_id,
                %error,
                "notification delivery failed"
            );
            return Err(error.into());
        }
        Ok(encoded)
    }

    /// The wrapped sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
