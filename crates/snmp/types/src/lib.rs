//! Schema primitives for the cloudify SNMP notification subsystem.
//!
//! This crate carries the vocabulary everything else is written in:
//! object identifiers, the SMI syntaxes the schema uses and their typed
//! values, variable bindings, and the shared error taxonomy. It knows
//! nothing about the cloudify tree itself; the schema tables live in
//! `snmp-mib`.

#![deny(unsafe_code)]

pub mod error;
pub mod oid;
pub mod value;
pub mod varbind;

pub use error::{MibError, MibResult};
pub use oid::{Oid, OidParseError};
pub use value::{SmiSyntax, SmiValue, DISPLAY_STRING_MAX_OCTETS, UTF8_STRING_MAX_OCTETS};
pub use varbind::VarBind;
