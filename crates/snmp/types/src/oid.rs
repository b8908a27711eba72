//! Object identifiers.
//!
//! An OID is an ordered sequence of non-negative integer arcs naming a node
//! in the global registration tree. OIDs compare lexicographically, which is
//! exactly the tree order. Values are immutable once built; [`Oid::child`]
//! derives the OID one level down and is the only way the schema tables
//! extend an OID, so every declared object sits at its parent plus exactly
//! one arc.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An object identifier: a dotted sequence of integer arcs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(Vec<u32>);

impl Oid {
    /// Create an OID from its arcs.
    pub fn new(arcs: impl Into<Vec<u32>>) -> Self {
        Self(arcs.into())
    }

    /// The OID one arc below this one.
    pub fn child(&self, arc: u32) -> Self {
        let mut arcs = self.0.clone();
        arcs.push(arc);
        Self(arcs)
    }

    /// The arcs of this OID, in order.
    pub fn arcs(&self) -> &[u32] {
        &self.0
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `prefix` is this OID or one of its ancestors.
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// The trailing arc, if any.
    pub fn last_arc(&self) -> Option<u32> {
        self.0.last().copied()
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self(arcs.to_vec())
    }
}

impl From<Vec<u32>> for Oid {
    fn from(arcs: Vec<u32>) -> Self {
        Self(arcs)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

/// Errors from parsing the dotted text form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OidParseError {
    #[error("empty OID string")]
    Empty,

    #[error("invalid arc '{0}': arcs are non-negative integers")]
    InvalidArc(String),
}

impl FromStr for Oid {
    type Err = OidParseError;

    /// Parse the dotted decimal form. A single leading dot (the form some
    /// SNMP tools print) is accepted and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('.').unwrap_or(s);
        if s.is_empty() {
            return Err(OidParseError::Empty);
        }
        let mut arcs = Vec::new();
        for part in s.split('.') {
            let arc = part
                .parse::<u32>()
                .map_err(|_| OidParseError::InvalidArc(part.to_string()))?;
            arcs.push(arc);
        }
        Ok(Self(arcs))
    }
}

// The wire-facing form is the dotted string, so that is what serde sees.

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dotted() {
        let oid = Oid::new([1, 3, 6, 1, 4, 1, 52312]);
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.52312");
    }

    #[test]
    fn test_parse_dotted() {
        let oid: Oid = "1.3.6.1.4.1.52312.1".parse().unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 4, 1, 52312, 1]);
    }

    #[test]
    fn test_parse_leading_dot() {
        let oid: Oid = ".1.3.6".parse().unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6]);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<Oid>(), Err(OidParseError::Empty));
        assert_eq!(".".parse::<Oid>(), Err(OidParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_arc() {
        assert!(matches!(
            "1.x.3".parse::<Oid>(),
            Err(OidParseError::InvalidArc(arc)) if arc == "x"
        ));
        assert!(matches!(
            "1..3".parse::<Oid>(),
            Err(OidParseError::InvalidArc(_))
        ));
        assert!(matches!(
            "-1.3".parse::<Oid>(),
            Err(OidParseError::InvalidArc(_))
        ));
    }

    #[test]
    fn test_child_appends_one_arc() {
        let parent = Oid::new([1, 3, 6]);
        let child = parent.child(1);
        assert_eq!(child.arcs(), &[1, 3, 6, 1]);
        assert_eq!(child.len(), parent.len() + 1);
        assert!(child.starts_with(&parent));
    }

    #[test]
    fn test_starts_with() {
        let root = Oid::new([1, 3, 6, 1, 4, 1, 52312]);
        let inside = Oid::new([1, 3, 6, 1, 4, 1, 52312, 1, 1, 3]);
        let outside = Oid::new([1, 3, 6, 1, 4, 1, 99999, 1]);

        assert!(inside.starts_with(&root));
        assert!(root.starts_with(&root));
        assert!(!outside.starts_with(&root));
        assert!(!root.starts_with(&inside));
    }

    #[test]
    fn test_tree_ordering() {
        let a: Oid = "1.3.6.1".parse().unwrap();
        let b: Oid = "1.3.6.1.0".parse().unwrap();
        let c: Oid = "1.3.6.2".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde_as_dotted_string() {
        let oid = Oid::new([1, 3, 6, 1]);
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, "\"1.3.6.1\"");

        let back: Oid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, oid);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Oid>("\"not.an.oid\"").is_err());
    }
}
