//! Producer side of cloudify workflow notifications.
//!
//! The pipeline has three pieces, each usable on its own:
//!
//! - [`WorkflowEvent`] and [`ExecutionState`] model lifecycle events as
//!   the manager raises them.
//! - [`encode`] turns an event into a wire-ready notification, applying
//!   the size-bound truncation policy.
//! - [`NotificationSink`] is the delivery seam; [`WorkflowNotifier`]
//!   wires encoding to a sink for one-call use.
//!
//! Encoding is stateless and reentrant, so any number of workflow
//! executions can notify concurrently through one shared notifier.

#![deny(unsafe_code)]

pub mod encoder;
pub mod event;
pub mod notifier;
pub mod sink;

pub use encoder::{encode, EncodedNotification, OVERSIZE_PLACEHOLDER};
pub use event::{ExecutionState, WorkflowEvent};
pub use notifier::{NotifyError, WorkflowNotifier};
pub use sink::{InMemorySink, LogSink, NotificationSink, SinkError};
