//! The cloudify registration tree.
//!
//! Everything in this schema hangs off the IANA private enterprise
//! assignment `{ enterprises 52312 }`. Version 1 of the schema occupies the
//! `cloudify1` subtree below it: notifications under the zero arc as SMIv2
//! requires, scalar properties under arc 1, and the conformance region
//! parked high at arcs 1000 and 1001 so future object subtrees can grow
//! between them without renumbering.

use snmp_types::Oid;

/// IANA private enterprise number assigned to cloudify.
pub const ENTERPRISE_NUMBER: u32 = 52312;

/// Name of the MIB module.
pub const MODULE_NAME: &str = "CLOUDIFY-MIB";

/// Symbol of the module identity node.
pub const ROOT_SYMBOL: &str = "cloudify";

/// Symbol of the version 1 subtree.
pub const VERSION_SYMBOL: &str = "cloudify1";

/// Symbol of the notification subtree.
pub const NOTIFICATIONS_SYMBOL: &str = "cloudify1Notifications";

/// Symbol of the scalar property subtree.
pub const PROPERTIES_SYMBOL: &str = "cloudify1Properties";

/// Symbol of the compliance subtree.
pub const COMPLIANCES_SYMBOL: &str = "cloudify1Compliances";

/// Symbol of the conformance group subtree.
pub const GROUPS_SYMBOL: &str = "cloudify1Groups";

/// `iso.org.dod.internet.private.enterprises`.
pub fn enterprises_oid() -> Oid {
    Oid::new([1, 3, 6, 1, 4, 1])
}

/// `{ enterprises 52312 }`, the root of the cloudify registration tree.
pub fn cloudify_oid() -> Oid {
    enterprises_oid().child(ENTERPRISE_NUMBER)
}

/// `{ cloudify 1 }`, version 1 of the schema.
pub fn cloudify1_oid() -> Oid {
    cloudify_oid().child(1)
}

/// `{ cloudify1 0 }`, the subtree holding all notification types.
pub fn notifications_oid() -> Oid {
    cloudify1_oid().child(0)
}

/// `{ cloudify1 1 }`, the subtree holding all scalar properties.
pub fn properties_oid() -> Oid {
    cloudify1_oid().child(1)
}

/// `{ cloudify1 1000 }`, the subtree holding compliance statements.
pub fn compliances_oid() -> Oid {
    cloudify1_oid().child(1000)
}

/// `{ cloudify1 1001 }`, the subtree holding conformance groups.
pub fn groups_oid() -> Oid {
    cloudify1_oid().child(1001)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_layout() {
        assert_eq!(cloudify_oid().to_string(), "1.3.6.1.4.1.52312");
        assert_eq!(cloudify1_oid().to_string(), "1.3.6.1.4.1.52312.1");
        assert_eq!(notifications_oid().to_string(), "1.3.6.1.4.1.52312.1.0");
        assert_eq!(properties_oid().to_string(), "1.3.6.1.4.1.52312.1.1");
        assert_eq!(compliances_oid().to_string(), "1.3.6.1.4.1.52312.1.1000");
        assert_eq!(groups_oid().to_string(), "1.3.6.1.4.1.52312.1.1001");
    }

    #[test]
    fn test_subtrees_nest_under_the_enterprise_root() {
        for subtree in [
            cloudify1_oid(),
            notifications_oid(),
            properties_oid(),
            compliances_oid(),
            groups_oid(),
        ] {
            assert!(subtree.starts_with(&cloudify_oid()));
        }
    }
}
