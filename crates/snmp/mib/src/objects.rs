//! The declared schema objects: seven scalar properties and five
//! notification types.
//!
//! Both tables are closed enums rather than runtime data. The schema is
//! versioned through the registration tree, so a new object means a new
//! variant here and a new arc there, never a mutation of existing rows.
//! Every per-object fact (symbol, arc, syntax, payload list, description)
//! lives in one `match` per accessor so the declaration reads like the MIB
//! text it generates.

use crate::module;
use serde::{Deserialize, Serialize};
use snmp_types::{Oid, SmiSyntax};
use std::fmt;

/// Access mode shared by every scalar in this schema. Properties exist to
/// ride in notification payloads, so nothing is ever writable.
pub const MAX_ACCESS: &str = "read-only";

// ── Scalar properties ────────────────────────────────────────────────────

/// The seven scalar objects a notification payload can carry.
///
/// Serialized forms use the MIB symbols so JSON dumps read like varbind
/// listings from a trap receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Seconds since the Unix epoch at which the notification was emitted.
    #[serde(rename = "cloudifyTimeStamp")]
    TimeStamp,
    /// Identifier of the deployment the workflow ran against.
    #[serde(rename = "cloudifyDeploymentID")]
    DeploymentId,
    /// Name of the tenant that owns the deployment.
    #[serde(rename = "cloudifyTenantName")]
    TenantName,
    /// Name of the workflow that was executed.
    #[serde(rename = "cloudifyWorkflowName")]
    WorkflowName,
    /// Identifier of the workflow execution.
    #[serde(rename = "cloudifyExecutionID")]
    ExecutionId,
    /// Workflow input parameters, rendered as a JSON object.
    #[serde(rename = "cloudifyWorkflowParameters")]
    WorkflowParameters,
    /// Failure cause, present only on the failure notification.
    #[serde(rename = "cloudifyErrorDetails")]
    ErrorDetails,
}

impl Property {
    /// All properties, in arc order.
    pub const ALL: [Property; 7] = [
        Property::TimeStamp,
        Property::DeploymentId,
        Property::TenantName,
        Property::WorkflowName,
        Property::ExecutionId,
        Property::WorkflowParameters,
        Property::ErrorDetails,
    ];

    /// The symbol under which the object is declared in the MIB.
    pub fn symbol(&self) -> &'static str {
        match self {
            Property::TimeStamp => "cloudifyTimeStamp",
            Property::DeploymentId => "cloudifyDeploymentID",
            Property::TenantName => "cloudifyTenantName",
            Property::WorkflowName => "cloudifyWorkflowName",
            Property::ExecutionId => "cloudifyExecutionID",
            Property::WorkflowParameters => "cloudifyWorkflowParameters",
            Property::ErrorDetails => "cloudifyErrorDetails",
        }
    }

    /// The declared syntax of the object.
    pub fn syntax(&self) -> SmiSyntax {
        match self {
            Property::TimeStamp => SmiSyntax::Counter64,
            Property::DeploymentId
            | Property::TenantName
            | Property::WorkflowName
            | Property::ExecutionId => SmiSyntax::DisplayString,
            Property::WorkflowParameters | Property::ErrorDetails => SmiSyntax::Utf8String,
        }
    }

    /// The arc assigned under the property subtree.
    pub fn arc(&self) -> u32 {
        match self {
            Property::TimeStamp => 1,
            Property::DeploymentId => 2,
            Property::TenantName => 3,
            Property::WorkflowName => 4,
            Property::ExecutionId => 5,
            Property::WorkflowParameters => 6,
            Property::ErrorDetails => 7,
        }
    }

    /// The full registered OID of the object.
    pub fn oid(&self) -> Oid {
        module::properties_oid().child(self.arc())
    }

    /// The DESCRIPTION clause text.
    pub fn description(&self) -> &'static str {
        match self {
            Property::TimeStamp => {
                "Time at which the notification was emitted, in seconds since the Unix epoch."
            }
            Property::DeploymentId => "Identifier of the deployment the workflow ran against.",
            Property::TenantName => "Name of the tenant that owns the deployment.",
            Property::WorkflowName => "Name of the workflow that was executed.",
            Property::ExecutionId => "Identifier of the workflow execution.",
            Property::WorkflowParameters => {
                "Input parameters the workflow was invoked with, rendered as a JSON object."
            }
            Property::ErrorDetails => {
                "Details of the error that caused the workflow execution to fail."
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ── Notification types ───────────────────────────────────────────────────

/// Payload list shared by every notification except the failure one.
const COMMON_OBJECTS: [Property; 6] = [
    Property::TimeStamp,
    Property::DeploymentId,
    Property::TenantName,
    Property::WorkflowName,
    Property::ExecutionId,
    Property::WorkflowParameters,
];

/// Payload list of the failure notification: the common six plus the
/// error details.
const FAILED_OBJECTS: [Property; 7] = [
    Property::TimeStamp,
    Property::DeploymentId,
    Property::TenantName,
    Property::WorkflowName,
    Property::ExecutionId,
    Property::WorkflowParameters,
    Property::ErrorDetails,
];

/// The five workflow lifecycle notification types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// The execution was placed on the queue, waiting for a free slot.
    #[serde(rename = "cloudifyWorkflowQueued")]
    WorkflowQueued,
    /// The execution began running.
    #[serde(rename = "cloudifyWorkflowStarted")]
    WorkflowStarted,
    /// The execution finished successfully.
    #[serde(rename = "cloudifyWorkflowSucceeded")]
    WorkflowSucceeded,
    /// The execution was cancelled before completing.
    #[serde(rename = "cloudifyWorkflowCancelled")]
    WorkflowCancelled,
    /// The execution failed.
    #[serde(rename = "cloudifyWorkflowFailed")]
    WorkflowFailed,
}

impl Notification {
    /// All notification types, in arc order.
    pub const ALL: [Notification; 5] = [
        Notification::WorkflowQueued,
        Notification::WorkflowStarted,
        Notification::WorkflowSucceeded,
        Notification::WorkflowCancelled,
        Notification::WorkflowFailed,
    ];

    /// The symbol under which the notification is declared in the MIB.
    pub fn symbol(&self) -> &'static str {
        match self {
            Notification::WorkflowQueued => "cloudifyWorkflowQueued",
            Notification::WorkflowStarted => "cloudifyWorkflowStarted",
            Notification::WorkflowSucceeded => "cloudifyWorkflowSucceeded",
            Notification::WorkflowCancelled => "cloudifyWorkflowCancelled",
            Notification::WorkflowFailed => "cloudifyWorkflowFailed",
        }
    }

    /// The arc assigned under the notification subtree.
    pub fn arc(&self) -> u32 {
        match self {
            Notification::WorkflowQueued => 1,
            Notification::WorkflowStarted => 2,
            Notification::WorkflowSucceeded => 3,
            Notification::WorkflowCancelled => 4,
            Notification::WorkflowFailed => 5,
        }
    }

    /// The full registered OID of the notification, used as the trap OID
    /// on the wire.
    pub fn oid(&self) -> Oid {
        module::notifications_oid().child(self.arc())
    }

    /// The OBJECTS clause: payload properties in declared order. Receivers
    /// must see exactly this list, in exactly this order.
    pub fn objects(&self) -> &'static [Property] {
        match self {
            Notification::WorkflowFailed => &FAILED_OBJECTS,
            _ => &COMMON_OBJECTS,
        }
    }

    /// The DESCRIPTION clause text.
    pub fn description(&self) -> &'static str {
        match self {
            Notification::WorkflowQueued => {
                "A workflow execution was placed on the queue, waiting for a free execution slot."
            }
            Notification::WorkflowStarted => "A workflow execution began running.",
            Notification::WorkflowSucceeded => {
                "A workflow execution finished successfully."
            }
            Notification::WorkflowCancelled => {
                "A workflow execution was cancelled before it completed."
            }
            Notification::WorkflowFailed => {
                "A workflow execution failed. The payload carries the error details in \
                 addition to the common properties."
            }
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
