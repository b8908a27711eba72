//! SMI syntaxes and their values.
//!
//! The schema uses exactly three syntaxes: an unsigned 64-bit counter, the
//! standard bounded DisplayString, and a UTF-8 octet string bounded by the
//! MIB's own textual convention. String bounds are in octets, not
//! characters; a value is over the bound when its UTF-8 byte length is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum octets in a DisplayString (RFC 2579).
pub const DISPLAY_STRING_MAX_OCTETS: usize = 255;

/// Maximum octets in a UTF8String (the CLOUDIFY-MIB textual convention).
pub const UTF8_STRING_MAX_OCTETS: usize = 512;

// ── Syntax ───────────────────────────────────────────────────────────

/// The declared SMI syntax of a schema object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmiSyntax {
    /// Unsigned 64-bit counter.
    Counter64,
    /// Display string, at most 255 octets.
    DisplayString,
    /// UTF-8 octet string, at most 512 octets.
    Utf8String,
}

impl SmiSyntax {
    /// The syntax name as written in the MIB text.
    pub fn smi_name(&self) -> &'static str {
        match self {
            SmiSyntax::Counter64 => "Counter64",
            SmiSyntax::DisplayString => "DisplayString",
            SmiSyntax::Utf8String => "UTF8String",
        }
    }

    /// The octet bound for string syntaxes; `None` for numeric ones.
    pub fn max_octets(&self) -> Option<usize> {
        match self {
            SmiSyntax::Counter64 => None,
            SmiSyntax::DisplayString => Some(DISPLAY_STRING_MAX_OCTETS),
            SmiSyntax::Utf8String => Some(UTF8_STRING_MAX_OCTETS),
        }
    }
}

impl fmt::Display for SmiSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.smi_name())
    }
}

// ── Value ────────────────────────────────────────────────────────────

/// A value instantiating one of the schema syntaxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmiValue {
    Counter64(u64),
    DisplayString(String),
    Utf8String(String),
}

impl SmiValue {
    /// The syntax this value instantiates.
    pub fn syntax(&self) -> SmiSyntax {
        match self {
            SmiValue::Counter64(_) => SmiSyntax::Counter64,
            SmiValue::DisplayString(_) => SmiSyntax::DisplayString,
            SmiValue::Utf8String(_) => SmiSyntax::Utf8String,
        }
    }

    /// Check this value against a declared syntax.
    ///
    /// Returns the violation detail on failure. The caller knows which
    /// object was being decoded and attaches that context to the error.
    pub fn conforms_to(&self, expected: SmiSyntax) -> Result<(), String> {
        if self.syntax() != expected {
            return Err(format!("expected {}, got {}", expected, self.syntax()));
        }
        if let (Some(max), Some(text)) = (expected.max_octets(), self.as_text()) {
            if text.len() > max {
                return Err(format!(
                    "{} octets exceed the {} bound of {}",
                    text.len(),
                    expected,
                    max
                ));
            }
        }
        Ok(())
    }

    /// The numeric value, when this is a Counter64.
    pub fn as_counter64(&self) -> Option<u64> {
        match self {
            SmiValue::Counter64(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, when this is one of the string syntaxes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SmiValue::DisplayString(s) | SmiValue::Utf8String(s) => Some(s),
            SmiValue::Counter64(_) => None,
        }
    }
}

impl fmt::Display for SmiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmiValue::Counter64(v) => write!(f, "{}", v),
            SmiValue::DisplayString(s) | SmiValue::Utf8String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_of_value() {
        assert_eq!(SmiValue::Counter64(7).syntax(), SmiSyntax::Counter64);
        assert_eq!(
            SmiValue::DisplayString("x".into()).syntax(),
            SmiSyntax::DisplayString
        );
        assert_eq!(
            SmiValue::Utf8String("x".into()).syntax(),
            SmiSyntax::Utf8String
        );
    }

    #[test]
    fn test_conforming_values_pass() {
        assert!(SmiValue::Counter64(u64::MAX)
            .conforms_to(SmiSyntax::Counter64)
            .is_ok());
        assert!(SmiValue::DisplayString("a".repeat(255))
            .conforms_to(SmiSyntax::DisplayString)
            .is_ok());
        assert!(SmiValue::Utf8String("a".repeat(512))
            .conforms_to(SmiSyntax::Utf8String)
            .is_ok());
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let err = SmiValue::Counter64(1)
            .conforms_to(SmiSyntax::DisplayString)
            .unwrap_err();
        assert!(err.contains("expected DisplayString"));
        assert!(err.contains("Counter64"));
    }

    #[test]
    fn test_over_bound_strings_are_reported() {
        let err = SmiValue::DisplayString("a".repeat(256))
            .conforms_to(SmiSyntax::DisplayString)
            .unwrap_err();
        assert!(err.contains("256 octets"));

        let err = SmiValue::Utf8String("a".repeat(513))
            .conforms_to(SmiSyntax::Utf8String)
            .unwrap_err();
        assert!(err.contains("513 octets"));
    }

    #[test]
    fn test_bound_counts_octets_not_chars() {
        // 171 three-octet characters: 171 chars but 513 octets.
        let wide = "€".repeat(171);
        assert_eq!(wide.chars().count(), 171);
        assert!(SmiValue::Utf8String(wide)
            .conforms_to(SmiSyntax::Utf8String)
            .is_err());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(SmiValue::Counter64(42).as_counter64(), Some(42));
        assert_eq!(SmiValue::Counter64(42).as_text(), None);
        assert_eq!(
            SmiValue::DisplayString("acme".into()).as_text(),
            Some("acme")
        );
        assert_eq!(SmiValue::Utf8String("{}".into()).as_text(), Some("{}"));
    }
}
