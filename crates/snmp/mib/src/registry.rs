//! Exact-match lookup from OIDs to schema objects, and notification
//! payload decoding.
//!
//! The registry is built once from the static tables and never mutated
//! afterwards, so receivers can share one instance across threads behind
//! an `Arc` without locking.

use crate::module;
use crate::objects::{Notification, Property};
use serde::{Deserialize, Serialize};
use snmp_types::{MibError, MibResult, Oid, SmiValue, VarBind};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A schema object resolved from an OID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MibObject {
    Property(Property),
    Notification(Notification),
}

impl MibObject {
    /// The symbol of the underlying declaration.
    pub fn symbol(&self) -> &'static str {
        match self {
            MibObject::Property(property) => property.symbol(),
            MibObject::Notification(notification) => notification.symbol(),
        }
    }
}

impl fmt::Display for MibObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One decoded binding: the property it resolved to and the checked value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedValue {
    pub property: Property,
    pub value: SmiValue,
}

impl DecodedValue {
    /// The MIB symbol of the decoded property.
    pub fn symbol(&self) -> &'static str {
        self.property.symbol()
    }
}

/// A fully decoded notification: the resolved type plus its payload in
/// declared order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub notification: Notification,
    pub values: Vec<DecodedValue>,
}

impl NotificationRecord {
    /// The value bound to `property`, if the payload carries it.
    pub fn get(&self, property: Property) -> Option<&SmiValue> {
        self.values
            .iter()
            .find(|decoded| decoded.property == property)
            .map(|decoded| &decoded.value)
    }

    /// The text of a string-typed property, if present.
    pub fn text(&self, property: Property) -> Option<&str> {
        self.get(property).and_then(SmiValue::as_text)
    }

    /// The numeric value of a counter property, if present.
    pub fn counter(&self, property: Property) -> Option<u64> {
        self.get(property).and_then(SmiValue::as_counter64)
    }
}

/// Exact-match registry over the declared schema tables.
///
/// `resolve` distinguishes three failure shapes: an OID outside the
/// cloudify enterprise tree is [`MibError::OutOfDomain`], an OID inside
/// the tree with no declaration at it is [`MibError::UnknownObject`], and
/// anything registered comes back as a [`MibObject`].
#[derive(Clone, Debug)]
pub struct MibRegistry {
    properties: HashMap<Oid, Property>,
    notifications: HashMap<Oid, Notification>,
    root: Oid,
}

impl MibRegistry {
    /// Build the registry from the declared tables.
    pub fn new() -> Self {
        let properties: HashMap<Oid, Property> =
            Property::ALL.iter().map(|property| (property.oid(), *property)).collect();
        let notifications: HashMap<Oid, Notification> = Notification::ALL
            .iter()
            .map(|notification| (notification.oid(), *notification))
            .collect();
        let registry = Self {
            properties,
            notifications,
            root: module::cloudify_oid(),
        };
        debug!(
            properties = registry.properties.len(),
            notifications = registry.notifications.len(),
            "MIB registry built"
        );
        registry
    }

    /// Resolve an OID to the schema object declared at it.
    pub fn resolve(&self, oid: &Oid) -> MibResult<MibObject> {
        if !oid.starts_with(&self.root) {
            return Err(MibError::OutOfDomain(oid.clone()));
        }
        if let Some(property) = self.properties.get(oid) {
            return Ok(MibObject::Property(*property));
        }
        if let Some(notification) = self.notifications.get(oid) {
            return Ok(MibObject::Notification(*notification));
        }
        Err(MibError::UnknownObject(oid.clone()))
    }

    /// Decode a single received binding against the schema.
    ///
    /// The OID must name a scalar property and the value must conform to
    /// its declared syntax, type and size bound both.
    pub fn decode_value(&self, oid: &Oid, value: SmiValue) -> MibResult<DecodedValue> {
        let property = match self.resolve(oid)? {
            MibObject::Property(property) => property,
            // Nothing bindable lives at a notification OID.
            MibObject::Notification(_) => return Err(MibError::UnknownObject(oid.clone())),
        };
        check_syntax(property, &value)?;
        Ok(DecodedValue { property, value })
    }

    /// Decode a full notification payload.
    ///
    /// The trap OID must name a notification type and the bindings must
    /// match its OBJECTS clause exactly: same properties, same order,
    /// nothing missing, nothing extra. Every value is checked against its
    /// property's declared syntax.
    pub fn decode_notification(
        &self,
        trap_oid: &Oid,
        bindings: &[VarBind],
    ) -> MibResult<NotificationRecord> {
        let notification = match self.resolve(trap_oid)? {
            MibObject::Notification(notification) => notification,
            MibObject::Property(property) => {
                return Err(MibError::MalformedNotification(format!(
                    "{trap_oid} names scalar object {}, not a notification type",
                    property.symbol()
                )));
            }
        };

        let expected = notification.objects();
        if bindings.len() != expected.len() {
            return Err(MibError::MalformedNotification(format!(
                "{} carries {} objects, payload has {}",
                notification.symbol(),
                expected.len(),
                bindings.len()
            )));
        }

        let mut values = Vec::with_capacity(expected.len());
        for (position, (binding, property)) in bindings.iter().zip(expected).enumerate() {
            if binding.oid != property.oid() {
                return Err(MibError::MalformedNotification(format!(
                    "binding {position} of {} must be {}, payload has {}",
                    notification.symbol(),
                    property.symbol(),
                    binding.oid
                )));
            }
            check_syntax(*property, &binding.value)?;
            values.push(DecodedValue {
                property: *property,
                value: binding.value.clone(),
            });
        }

        debug!(notification = notification.symbol(), "notification decoded");
        Ok(NotificationRecord {
            notification,
            values,
        })
    }
}

impl Default for MibRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_syntax(property: Property, value: &SmiValue) -> MibResult<()> {
    value
        .conforms_to(property.syntax())
        .map_err(|detail| MibError::SyntaxViolation {
            object: property.symbol().to_string(),
            detail,
        })
}
