//! Conformance declarations: two groups and the single compliance
//! statement.
//!
//! These shape what an implementation must support. They carry no encoding
//! or decoding behavior of their own; the checker crate walks them to
//! produce compliance reports.

use crate::module;
use crate::objects::{Notification, Property};
use serde::{Deserialize, Serialize};
use snmp_types::Oid;
use std::fmt;

/// Symbol of the compliance statement.
pub const COMPLIANCE_SYMBOL: &str = "cloudify1Compliance";

/// Arc of the compliance statement under the compliance subtree.
pub const COMPLIANCE_ARC: u32 = 1;

/// OID of the compliance statement, `{ cloudify1Compliances 1 }`.
pub fn compliance_oid() -> Oid {
    module::compliances_oid().child(COMPLIANCE_ARC)
}

/// The conformance groups declared by the module. Both are mandatory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConformanceGroup {
    /// Every notification type, `cloudify1NotificationsGroup`.
    #[serde(rename = "cloudify1NotificationsGroup")]
    Notifications,
    /// Every scalar property, `cloudify1PropertiesGroup`.
    #[serde(rename = "cloudify1PropertiesGroup")]
    Properties,
}

impl ConformanceGroup {
    /// Both groups, in arc order.
    pub const ALL: [ConformanceGroup; 2] =
        [ConformanceGroup::Notifications, ConformanceGroup::Properties];

    /// The symbol under which the group is declared in the MIB.
    pub fn symbol(&self) -> &'static str {
        match self {
            ConformanceGroup::Notifications => "cloudify1NotificationsGroup",
            ConformanceGroup::Properties => "cloudify1PropertiesGroup",
        }
    }

    /// The arc assigned under the group subtree.
    pub fn arc(&self) -> u32 {
        match self {
            ConformanceGroup::Notifications => 1,
            ConformanceGroup::Properties => 2,
        }
    }

    /// The full registered OID of the group.
    pub fn oid(&self) -> Oid {
        module::groups_oid().child(self.arc())
    }

    /// Member symbols, in declared order.
    pub fn members(&self) -> Vec<&'static str> {
        match self {
            ConformanceGroup::Notifications => {
                Notification::ALL.iter().map(Notification::symbol).collect()
            }
            ConformanceGroup::Properties => Property::ALL.iter().map(Property::symbol).collect(),
        }
    }

    /// The DESCRIPTION clause text.
    pub fn description(&self) -> &'static str {
        match self {
            ConformanceGroup::Notifications => {
                "The workflow lifecycle notifications an agent must be able to emit."
            }
            ConformanceGroup::Properties => {
                "The scalar objects carried in workflow notification payloads."
            }
        }
    }
}

impl fmt::Display for ConformanceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
