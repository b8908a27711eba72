//! Renders the schema tables back into SMIv2 module text.
//!
//! The generated text is the distribution artifact operators load into
//! their trap receivers. It is produced entirely from the typed tables in
//! this crate, so the text can never drift from what the registry and the
//! encoder actually enforce.

use crate::conformance::{ConformanceGroup, COMPLIANCE_ARC, COMPLIANCE_SYMBOL};
use crate::module;
use crate::objects::{Notification, Property, MAX_ACCESS};
use snmp_types::UTF8_STRING_MAX_OCTETS;

/// Timestamp of the current revision, SMIv2 `ExtUTCTime` format.
const LAST_UPDATED: &str = "202005110000Z";

/// Column at which DESCRIPTION text wraps.
const WRAP_COLUMN: usize = 68;

/// Render the complete CLOUDIFY-MIB module text.
pub fn render_mib() -> String {
    let mut out = String::with_capacity(8 * 1024);

    push_header(&mut out);
    push_module_identity(&mut out);
    push_subtree_assignments(&mut out);
    push_textual_convention(&mut out);
    for property in Property::ALL {
        push_object_type(&mut out, property);
    }
    for notification in Notification::ALL {
        push_notification_type(&mut out, notification);
    }
    push_groups(&mut out);
    push_compliance(&mut out);
    out.push_str("END\n");

    out
}

fn push_header(out: &mut String) {
    out.push_str(&format!("{} DEFINITIONS ::= BEGIN\n\n", module::MODULE_NAME));
    out.push_str("IMPORTS\n");
    out.push_str("    MODULE-IDENTITY, OBJECT-TYPE, NOTIFICATION-TYPE, Counter64,\n");
    out.push_str("    enterprises\n");
    out.push_str("        FROM SNMPv2-SMI\n");
    out.push_str("    TEXTUAL-CONVENTION, DisplayString\n");
    out.push_str("        FROM SNMPv2-TC\n");
    out.push_str("    MODULE-COMPLIANCE, OBJECT-GROUP, NOTIFICATION-GROUP\n");
    out.push_str("        FROM SNMPv2-CONF;\n\n");
}

fn push_module_identity(out: &mut String) {
    out.push_str(&format!("{} MODULE-IDENTITY\n", module::ROOT_SYMBOL));
    out.push_str(&format!("    LAST-UPDATED \"{LAST_UPDATED}\"\n"));
    out.push_str("    ORGANIZATION \"Cloudify Platform Ltd.\"\n");
    out.push_str("    CONTACT-INFO \"https://cloudify.co\"\n");
    out.push_str(&description_clause(
        4,
        "Notifications emitted by the Cloudify manager for workflow execution \
         lifecycle events, and the objects carried in their payloads.",
    ));
    out.push_str(&format!("    REVISION \"{LAST_UPDATED}\"\n"));
    out.push_str(&description_clause(4, "Initial revision."));
    out.push_str(&format!(
        "    ::= {{ enterprises {} }}\n\n",
        module::ENTERPRISE_NUMBER
    ));
}

fn push_subtree_assignments(out: &mut String) {
    let assignments = [
        (module::VERSION_SYMBOL, module::ROOT_SYMBOL, 1),
        (module::NOTIFICATIONS_SYMBOL, module::VERSION_SYMBOL, 0),
        (module::PROPERTIES_SYMBOL, module::VERSION_SYMBOL, 1),
        (module::COMPLIANCES_SYMBOL, module::VERSION_SYMBOL, 1000),
        (module::GROUPS_SYMBOL, module::VERSION_SYMBOL, 1001),
    ];
    for (symbol, parent, arc) in assignments {
        out.push_str(&format!(
            "{symbol} OBJECT IDENTIFIER ::= {{ {parent} {arc} }}\n"
        ));
    }
    out.push('\n');
}

fn push_textual_convention(out: &mut String) {
    out.push_str("UTF8String ::= TEXTUAL-CONVENTION\n");
    out.push_str(&format!(
        "    DISPLAY-HINT \"{UTF8_STRING_MAX_OCTETS}t\"\n"
    ));
    out.push_str("    STATUS current\n");
    out.push_str(&description_clause(
        4,
        "A UTF-8 encoded string of at most 512 octets. The size limit is \
         measured in octets, not characters.",
    ));
    out.push_str(&format!(
        "    SYNTAX OCTET STRING (SIZE (0..{UTF8_STRING_MAX_OCTETS}))\n\n"
    ));
}

fn push_object_type(out: &mut String, property: Property) {
    out.push_str(&format!("{} OBJECT-TYPE\n", property.symbol()));
    out.push_str(&format!("    SYNTAX {}\n", property.syntax().smi_name()));
    out.push_str(&format!("    MAX-ACCESS {MAX_ACCESS}\n"));
    out.push_str("    STATUS current\n");
    out.push_str(&description_clause(4, property.description()));
    out.push_str(&format!(
        "    ::= {{ {} {} }}\n\n",
        module::PROPERTIES_SYMBOL,
        property.arc()
    ));
}

fn push_notification_type(out: &mut String, notification: Notification) {
    out.push_str(&format!("{} NOTIFICATION-TYPE\n", notification.symbol()));
    out.push_str("    OBJECTS {\n");
    push_symbol_list(out, notification.objects().iter().map(|p| p.symbol()));
    out.push_str("    }\n");
    out.push_str("    STATUS current\n");
    out.push_str(&description_clause(4, notification.description()));
    out.push_str(&format!(
        "    ::= {{ {} {} }}\n\n",
        module::NOTIFICATIONS_SYMBOL,
        notification.arc()
    ));
}

fn push_groups(out: &mut String) {
    for group in ConformanceGroup::ALL {
        let (kind, clause) = match group {
            ConformanceGroup::Notifications => ("NOTIFICATION-GROUP", "NOTIFICATIONS"),
            ConformanceGroup::Properties => ("OBJECT-GROUP", "OBJECTS"),
        };
        out.push_str(&format!("{} {kind}\n", group.symbol()));
        out.push_str(&format!("    {clause} {{\n"));
        push_symbol_list(out, group.members().into_iter());
        out.push_str("    }\n");
        out.push_str("    STATUS current\n");
        out.push_str(&description_clause(4, group.description()));
        out.push_str(&format!(
            "    ::= {{ {} {} }}\n\n",
            module::GROUPS_SYMBOL,
            group.arc()
        ));
    }
}

fn push_compliance(out: &mut String) {
    out.push_str(&format!("{COMPLIANCE_SYMBOL} MODULE-COMPLIANCE\n"));
    out.push_str("    STATUS current\n");
    out.push_str(&description_clause(
        4,
        "Compliance statement for SNMP entities that emit cloudify workflow \
         notifications. Both conformance groups are mandatory.",
    ));
    out.push_str("    MODULE -- this module\n");
    out.push_str("        MANDATORY-GROUPS {\n");
    for (index, group) in ConformanceGroup::ALL.iter().enumerate() {
        let separator = if index + 1 < ConformanceGroup::ALL.len() { "," } else { "" };
        out.push_str(&format!("            {}{separator}\n", group.symbol()));
    }
    out.push_str("        }\n");
    out.push_str(&format!(
        "    ::= {{ {} {COMPLIANCE_ARC} }}\n\n",
        module::COMPLIANCES_SYMBOL
    ));
}

/// Emit `symbol,` lines at member-list indentation, no trailing comma.
fn push_symbol_list<'a>(out: &mut String, symbols: impl ExactSizeIterator<Item = &'a str>) {
    let count = symbols.len();
    for (index, symbol) in symbols.enumerate() {
        let separator = if index + 1 < count { "," } else { "" };
        out.push_str(&format!("        {symbol}{separator}\n"));
    }
}

/// A DESCRIPTION clause with the quoted text word-wrapped under it.
fn description_clause(indent: usize, text: &str) -> String {
    let lead = " ".repeat(indent);
    let body_lead = " ".repeat(indent + 4);

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && body_lead.len() + line.len() + 1 + word.len() > WRAP_COLUMN {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    lines.push(line);

    let last = lines.len() - 1;
    let mut clause = format!("{lead}DESCRIPTION\n");
    for (index, line) in lines.iter().enumerate() {
        let open = if index == 0 { "\"" } else { "" };
        let close = if index == last { "\"" } else { "" };
        clause.push_str(&format!("{body_lead}{open}{line}{close}\n"));
    }
    clause
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_a_complete_module() {
        let text = render_mib();
        assert!(text.starts_with("CLOUDIFY-MIB DEFINITIONS ::= BEGIN"));
        assert!(text.trim_end().ends_with("END"));
    }

    #[test]
    fn test_every_declared_symbol_appears() {
        let text = render_mib();
        for property in Property::ALL {
            assert!(text.contains(&format!("{} OBJECT-TYPE", property.symbol())));
        }
        for notification in Notification::ALL {
            assert!(text.contains(&format!("{} NOTIFICATION-TYPE", notification.symbol())));
        }
        assert!(text.contains("cloudify1NotificationsGroup NOTIFICATION-GROUP"));
        assert!(text.contains("cloudify1PropertiesGroup OBJECT-GROUP"));
        assert!(text.contains("cloudify1Compliance MODULE-COMPLIANCE"));
    }

    #[test]
    fn test_registration_tree_is_spelled_out() {
        let text = render_mib();
        assert!(text.contains("::= { enterprises 52312 }"));
        assert!(text.contains("cloudify1 OBJECT IDENTIFIER ::= { cloudify 1 }"));
        assert!(text.contains("cloudify1Notifications OBJECT IDENTIFIER ::= { cloudify1 0 }"));
        assert!(text.contains("cloudify1Compliances OBJECT IDENTIFIER ::= { cloudify1 1000 }"));
        assert!(text.contains("cloudify1Groups OBJECT IDENTIFIER ::= { cloudify1 1001 }"));
    }

    #[test]
    fn test_utf8_string_convention_carries_the_size_bound() {
        let text = render_mib();
        assert!(text.contains("UTF8String ::= TEXTUAL-CONVENTION"));
        assert!(text.contains("SYNTAX OCTET STRING (SIZE (0..512))"));
    }

    #[test]
    fn test_failed_notification_lists_error_details() {
        let text = render_mib();
        let failed = text
            .split("cloudifyWorkflowFailed NOTIFICATION-TYPE")
            .nth(1)
            .unwrap();
        let objects = failed.split("STATUS").next().unwrap();
        assert!(objects.contains("cloudifyErrorDetails"));

        let queued = text
            .split("cloudifyWorkflowQueued NOTIFICATION-TYPE")
            .nth(1)
            .unwrap();
        let objects = queued.split("STATUS").next().unwrap();
        assert!(!objects.contains("cloudifyErrorDetails"));
    }

    #[test]
    fn test_mandatory_groups_name_both_groups() {
        let text = render_mib();
        let compliance = text.split("MANDATORY-GROUPS").nth(1).unwrap();
        assert!(compliance.contains("cloudify1NotificationsGroup"));
        assert!(compliance.contains("cloudify1PropertiesGroup"));
    }
}
