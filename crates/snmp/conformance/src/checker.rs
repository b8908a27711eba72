//! Verifies a declared supported set against the MANDATORY-GROUPS of the
//! compliance statement.

use crate::report::{ComplianceReport, MissingMember};
use serde::{Deserialize, Serialize};
use snmp_mib::{ConformanceGroup, Notification, Property, COMPLIANCE_SYMBOL};
use std::collections::BTreeSet;
use tracing::debug;

/// The symbols an implementation declares it supports.
///
/// Ordered storage keeps reports deterministic regardless of how the set
/// was assembled. Serializes as a plain array of symbols, the form a
/// support declaration file would use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedSet {
    symbols: BTreeSet<String>,
}

impl SupportedSet {
    /// An empty set, supporting nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full declared schema: every property and every notification.
    pub fn full() -> Self {
        Property::ALL
            .iter()
            .map(|property| property.symbol())
            .chain(Notification::ALL.iter().map(|notification| notification.symbol()))
            .collect()
    }

    /// Declare support for a symbol.
    pub fn insert(&mut self, symbol: impl Into<String>) {
        self.symbols.insert(symbol.into());
    }

    /// Withdraw support for a symbol. Returns whether it was declared.
    pub fn remove(&mut self, symbol: &str) -> bool {
        self.symbols.remove(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SupportedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Check the supported set against every mandatory group.
///
/// Pure and stateless: the same set always yields the same report, with
/// missing members listed in group order then declaration order.
pub fn verify(supported: &SupportedSet) -> ComplianceReport {
    let mut missing = Vec::new();
    for group in ConformanceGroup::ALL {
        for member in group.members() {
            if !supported.contains(member) {
                missing.push(MissingMember {
                    group,
                    member: member.to_string(),
                });
            }
        }
    }

    debug!(
        supported = supported.len(),
        missing = missing.len(),
        "compliance verified"
    );
    ComplianceReport {
        compliance: COMPLIANCE_SYMBOL.to_string(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_set_passes() {
        let report = verify(&SupportedSet::full());
        assert!(report.passed());
        assert_eq!(report.compliance, "cloudify1Compliance");
    }

    #[test]
    fn empty_set_misses_every_mandatory_member() {
        let report = verify(&SupportedSet::new());
        assert!(!report.passed());
        assert_eq!(report.missing.len(), Notification::ALL.len() + Property::ALL.len());
    }

    #[test]
    fn missing_error_details_is_reported_alone() {
        let mut supported = SupportedSet::full();
        assert!(supported.remove("cloudifyErrorDetails"));

        let report = verify(&supported);
        assert_eq!(report.missing.len(), 1);
        let missing = &report.missing[0];
        assert_eq!(missing.member, "cloudifyErrorDetails");
        assert_eq!(missing.group, ConformanceGroup::Properties);
    }

    #[test]
    fn missing_notification_is_attributed_to_the_notification_group() {
        let mut supported = SupportedSet::full();
        supported.remove("cloudifyWorkflowFailed");

        let report = verify(&supported);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].group, ConformanceGroup::Notifications);
    }

    #[test]
    fn extra_symbols_are_harmless() {
        let mut supported = SupportedSet::full();
        supported.insert("vendorPrivateThing");
        assert!(verify(&supported).passed());
    }

    #[test]
    fn supported_set_collects_from_symbols() {
        let supported: SupportedSet = ["cloudifyTimeStamp", "cloudifyWorkflowQueued"]
            .into_iter()
            .collect();
        assert_eq!(supported.len(), 2);
        assert!(supported.contains("cloudifyTimeStamp"));
        assert!(!verify(&supported).passed());
    }

    #[test]
    fn supported_set_loads_from_a_symbol_array() {
        let supported: SupportedSet =
            serde_json::from_str(r#"["cloudifyTimeStamp", "cloudifyWorkflowQueued"]"#).unwrap();
        assert_eq!(supported.len(), 2);
        assert!(supported.contains("cloudifyWorkflowQueued"));
    }
}
