//! Builds wire-ready notifications from lifecycle events.
//!
//! Encoding is pure and reentrant. Oversized input never fails the
//! encoder: any string field whose encoded form exceeds its declared
//! size bound is replaced whole by [`OVERSIZE_PLACEHOLDER`], never cut
//! mid-content, so receivers see either the real value or an explicit
//! marker and never a corrupt fragment.

use crate::event::WorkflowEvent;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use snmp_mib::{Notification, Property};
use snmp_types::{
    MibError, MibResult, Oid, SmiValue, VarBind, DISPLAY_STRING_MAX_OCTETS,
    UTF8_STRING_MAX_OCTETS,
};
use tracing::debug;

/// Substituted for any string field that exceeds its declared size bound.
pub const OVERSIZE_PLACEHOLDER: &str = "Value too long to include";

/// A wire-ready notification: the resolved type plus its payload bindings
/// in declared order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedNotification {
    pub notification: Notification,
    pub bindings: Vec<VarBind>,
}

impl EncodedNotification {
    /// The trap OID to send, which is the notification's registered OID.
    pub fn trap_oid(&self) -> Oid {
        self.notification.oid()
    }
}

/// Encode one lifecycle event as the notification its state maps to.
///
/// Fails with [`MibError::InvalidEventKind`] when the state raises no
/// notification, and with [`MibError::EncodingError`] when a required
/// field is absent or empty. Oversized fields do not fail, see the
/// module docs.
pub fn encode(event: &WorkflowEvent) -> MibResult<EncodedNotification> {
    let notification = event
        .state
        .notification()
        .ok_or_else(|| MibError::InvalidEventKind(event.state.to_string()))?;

    let timestamp = event.timestamp.unwrap_or_else(now_epoch_seconds);
    let parameters_json = match &event.parameters {
        Some(value) => value.to_string(),
        None => "{}".to_string(),
    };

    let mut bindings = Vec::with_capacity(notification.objects().len());
    for property in notification.objects() {
        let value = match property {
            Property::TimeStamp => SmiValue::Counter64(timestamp),
            Property::DeploymentId => required_display(*property, &event.deployment_id)?,
            Property::TenantName => required_display(*property, &event.tenant_name)?,
            Property::WorkflowName => required_display(*property, &event.workflow_name)?,
            Property::ExecutionId => required_display(*property, &event.execution_id)?,
            Property::WorkflowParameters => {
                SmiValue::Utf8String(bounded(&parameters_json, UTF8_STRING_MAX_OCTETS))
            }
            Property::ErrorDetails => {
                let details = event
                    .error_details
                    .as_deref()
                    .filter(|details| !details.is_empty())
                    .ok_or_else(|| {
                        MibError::EncodingError(format!(
                            "state '{}' requires error details",
                            event.state
                        ))
                    })?;
                SmiValue::Utf8String(bounded(details, UTF8_STRING_MAX_OCTETS))
            }
        };
        bindings.push(VarBind::new(property.oid(), value));
    }

    debug!(
        notification = notification.symbol(),
        execution = %event.execution_id,
        "notification encoded"
    );
    Ok(EncodedNotification {
        notification,
        bindings,
    })
}

/// A required display-string field: must be present and non-empty, and is
/// bounded at the DisplayString limit.
fn required_display(property: Property, text: &str) -> MibResult<SmiValue> {
    if text.is_empty() {
        return Err(MibError::EncodingError(format!(
            "required field {} is empty",
            property.symbol()
        )));
    }
    Ok(SmiValue::DisplayString(bounded(
        text,
        DISPLAY_STRING_MAX_OCTETS,
    )))
}

/// The truncation policy: over the bound means the placeholder, whole.
fn bounded(text: &str, max_octets: usize) -> String {
    if text.len() > max_octets {
        OVERSIZE_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

fn now_epoch_seconds() -> u64 {
    // timestamp() is only negative before 1970.
    Utc::now().timestamp().max(0) as u64
}
