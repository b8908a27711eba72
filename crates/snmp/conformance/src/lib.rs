//! Compliance checking against the CLOUDIFY-MIB conformance statement.
//!
//! An SNMP entity claiming to implement the schema must support every
//! member of both mandatory groups. [`verify`] takes the entity's declared
//! [`SupportedSet`] and reports pass or fail plus exactly which members
//! are missing, for use in release gates and conformance tooling.

#![deny(unsafe_code)]

pub mod checker;
pub mod report;

pub use checker::{verify, SupportedSet};
pub use report::{ComplianceReport, MissingMember};
