//! The CLOUDIFY-MIB as typed, static schema data.
//!
//! One registration tree under `{ enterprises 52312 }` holds everything
//! the Cloudify manager emits over SNMP: seven scalar properties, five
//! workflow lifecycle notification types, and the conformance region.
//! This crate declares those tables as closed enums and builds the two
//! artifacts everything else works from:
//!
//! - [`MibRegistry`] resolves OIDs to declared objects and decodes
//!   received payloads, with typed errors for every failure shape.
//! - [`render_mib`] generates the SMIv2 module text operators load into
//!   their trap receivers, straight from the same tables.
//!
//! # Example
//!
//! ```rust
//! use snmp_mib::{MibRegistry, Property};
//! use snmp_types::SmiValue;
//!
//! let registry = MibRegistry::new();
//! let decoded = registry
//!     .decode_value(
//!         &Property::TenantName.oid(),
//!         SmiValue::DisplayString("acme".into()),
//!     )
//!     .unwrap();
//! assert_eq!(decoded.symbol(), "cloudifyTenantName");
//! ```

#![deny(unsafe_code)]

pub mod conformance;
pub mod module;
pub mod objects;
pub mod registry;
pub mod render;

pub use conformance::{compliance_oid, ConformanceGroup, COMPLIANCE_SYMBOL};
pub use objects::{Notification, Property, MAX_ACCESS};
pub use registry::{DecodedValue, MibObject, MibRegistry, NotificationRecord};
pub use render::render_mib;
