//! Workflow lifecycle events as the manager raises them.
//!
//! An execution moves through more states than the schema reports on.
//! Internal bookkeeping states (pending, scheduled, the cancelling
//! family) raise no notification; only the five externally meaningful
//! transitions do. The mapping lives on [`ExecutionState::notification`]
//! so callers can probe it before building an event.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use snmp_mib::Notification;
use std::fmt;

// ── Execution State ──────────────────────────────────────────────────────

/// Lifecycle states of a workflow execution.
///
/// `Terminated` is the success state; an execution that terminates did
/// everything it was asked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    /// Accepted but not yet scheduled.
    Pending,
    /// Scheduled to run at a later time.
    Scheduled,
    /// Waiting on the queue for a free execution slot.
    Queued,
    /// Actively running.
    Started,
    /// A cancel was requested; the execution is winding down.
    Cancelling,
    /// A forced cancel was requested.
    ForceCancelling,
    /// The execution's process is being killed.
    KillCancelling,
    /// Finished successfully.
    Terminated,
    /// Cancelled before completion.
    Cancelled,
    /// Failed.
    Failed,
}

impl ExecutionState {
    /// All states, in lifecycle order.
    pub const ALL: [ExecutionState; 10] = [
        ExecutionState::Pending,
        ExecutionState::Scheduled,
        ExecutionState::Queued,
        ExecutionState::Started,
        ExecutionState::Cancelling,
        ExecutionState::ForceCancelling,
        ExecutionState::KillCancelling,
        ExecutionState::Terminated,
        ExecutionState::Cancelled,
        ExecutionState::Failed,
    ];

    /// Check if this is a terminal state.
    pub fn is_end_state(&self) -> bool {
        matches!(
            self,
            ExecutionState::Terminated | ExecutionState::Cancelled | ExecutionState::Failed
        )
    }

    /// Check if the execution is waiting to run.
    pub fn is_waiting(&self) -> bool {
        matches!(self, ExecutionState::Scheduled | ExecutionState::Queued)
    }

    /// The notification type this state maps to, if it reports one.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            ExecutionState::Queued => Some(Notification::WorkflowQueued),
            ExecutionState::Started => Some(Notification::WorkflowStarted),
            ExecutionState::Terminated => Some(Notification::WorkflowSucceeded),
            ExecutionState::Cancelled => Some(Notification::WorkflowCancelled),
            ExecutionState::Failed => Some(Notification::WorkflowFailed),
            _ => None,
        }
    }

    /// The state's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionState::Pending => "pending",
            ExecutionState::Scheduled => "scheduled",
            ExecutionState::Queued => "queued",
            ExecutionState::Started => "started",
            ExecutionState::Cancelling => "cancelling",
            ExecutionState::ForceCancelling => "force_cancelling",
            ExecutionState::KillCancelling => "kill_cancelling",
            ExecutionState::Terminated => "terminated",
            ExecutionState::Cancelled => "cancelled",
            ExecutionState::Failed => "failed",
        }
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Workflow Event ───────────────────────────────────────────────────────

/// One workflow lifecycle event, carrying everything a notification
/// payload needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEvent {
    /// The state the execution entered.
    pub state: ExecutionState,
    /// Tenant that owns the deployment.
    pub tenant_name: String,
    /// Deployment the workflow ran against.
    pub deployment_id: String,
    /// Name of the workflow.
    pub workflow_name: String,
    /// Identifier of the execution.
    pub execution_id: String,
    /// Workflow input parameters. Encoded as `{}` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    /// Failure cause. Required when `state` is `Failed`, unused otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    /// Event time in epoch seconds. When absent, the encoder stamps the
    /// moment of encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl WorkflowEvent {
    /// Create an event for the given execution and state.
    pub fn new(
        state: ExecutionState,
        tenant_name: impl Into<String>,
        deployment_id: impl Into<String>,
        workflow_name: impl Into<String>,
        execution_id: impl Into<String>,
    ) -> Self {
        Self {
            state,
            tenant_name: tenant_name.into(),
            deployment_id: deployment_id.into(),
            workflow_name: workflow_name.into(),
            execution_id: execution_id.into(),
            parameters: None,
            error_details: None,
            timestamp: None,
        }
    }

    /// Attach the workflow's input parameters.
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Attach the failure cause.
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }

    /// Pin the event time instead of letting the encoder stamp it.
    pub fn with_timestamp(mut self, epoch_seconds: u64) -> Self {
        self.timestamp = Some(epoch_seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_five_states_notify() {
        let notifying: Vec<_> = ExecutionState::ALL
            .iter()
            .filter(|state| state.notification().is_some())
            .collect();
        assert_eq!(notifying.len(), 5);
    }

    #[test]
    fn test_terminated_maps_to_the_success_notification() {
        assert_eq!(
            ExecutionState::Terminated.notification(),
            Some(Notification::WorkflowSucceeded)
        );
        assert!(ExecutionState::Terminated.is_end_state());
    }

    #[test]
    fn test_cancelling_family_is_silent() {
        for state in [
            ExecutionState::Cancelling,
            ExecutionState::ForceCancelling,
            ExecutionState::KillCancelling,
        ] {
            assert_eq!(state.notification(), None);
            assert!(!state.is_end_state());
        }
    }

    #[test]
    fn test_states_serialize_in_snake_case() {
        let json = serde_json::to_string(&ExecutionState::ForceCancelling).unwrap();
        assert_eq!(json, "\"force_cancelling\"");
        let parsed: ExecutionState = serde_json::from_str("\"kill_cancelling\"").unwrap();
        assert_eq!(parsed, ExecutionState::KillCancelling);
    }

    #[test]
    fn test_builders_fill_optional_fields() {
        let event = WorkflowEvent::new(
            ExecutionState::Failed,
            "acme",
            "dep-1",
            "install",
            "exec-42",
        )
        .with_parameters(serde_json::json!({"retries": 3}))
        .with_error_details("disk full")
        .with_timestamp(1_589_180_000);

        assert_eq!(event.error_details.as_deref(), Some("disk full"));
        assert_eq!(event.timestamp, Some(1_589_180_000));
        assert!(event.parameters.is_some());
    }
}
