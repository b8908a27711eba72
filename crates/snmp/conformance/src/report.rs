//! Compliance report types.

use serde::{Deserialize, Serialize};
use snmp_mib::ConformanceGroup;
use std::fmt;

/// One mandatory member the checked implementation does not support.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMember {
    /// The group that requires the member.
    pub group: ConformanceGroup,
    /// Symbol of the missing member.
    pub member: String,
}

impl fmt::Display for MissingMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (required by {})", self.member, self.group)
    }
}

/// Outcome of checking a supported set against the compliance statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Symbol of the compliance statement checked against.
    pub compliance: String,
    /// Every mandatory member absent from the supported set, in group
    /// then member order.
    pub missing: Vec<MissingMember>,
}

impl ComplianceReport {
    /// Whether the supported set covers every mandatory member.
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "[PASS] {}", self.compliance)
        } else {
            writeln!(f, "[FAIL] {}: {} missing", self.compliance, self.missing.len())?;
            for member in &self.missing {
                writeln!(f, "  - {member}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_report_displays_one_line() {
        let report = ComplianceReport {
            compliance: "cloudify1Compliance".into(),
            missing: vec![],
        };
        assert!(report.passed());
        assert_eq!(report.to_string(), "[PASS] cloudify1Compliance");
    }

    #[test]
    fn failing_report_lists_every_missing_member() {
        let report = ComplianceReport {
            compliance: "cloudify1Compliance".into(),
            missing: vec![MissingMember {
                group: ConformanceGroup::Properties,
                member: "cloudifyErrorDetails".into(),
            }],
        };
        assert!(!report.passed());
        let rendered = report.to_string();
        assert!(rendered.starts_with("[FAIL]"));
        assert!(rendered.contains("cloudifyErrorDetails (required by cloudify1PropertiesGroup)"));
    }
}
