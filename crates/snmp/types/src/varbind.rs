//! Variable bindings: the (OID, value) pairs a notification payload is
//! made of.

use crate::{Oid, SmiValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bound object as carried on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarBind {
    pub oid: Oid,
    pub value: SmiValue,
}

impl VarBind {
    pub fn new(oid: Oid, value: SmiValue) -> Self {
        Self { oid, value }
    }
}

impl fmt::Display for VarBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let vb = VarBind::new(
            Oid::new([1, 3, 6, 1]),
            SmiValue::DisplayString("install".into()),
        );
        assert_eq!(vb.to_string(), "1.3.6.1 = install");
    }

    #[test]
    fn test_serde_round_trip() {
        let vb = VarBind::new(Oid::new([1, 3]), SmiValue::Counter64(9));
        let json = serde_json::to_string(&vb).unwrap();
        let back: VarBind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vb);
    }
}
