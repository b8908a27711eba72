//! The shared error taxonomy for encoding and decoding.
//!
//! Every variant is a local, synchronous validation failure. None of them
//! are transient, so there is no retry machinery anywhere; callers surface
//! them directly to their own caller.

use crate::Oid;

/// Errors from encoding events into notifications and decoding received
/// bindings back against the schema.
#[derive(Debug, thiserror::Error)]
pub enum MibError {
    /// The execution state has no notification type in the schema.
    #[error("execution state '{0}' has no corresponding notification type")]
    InvalidEventKind(String),

    /// A required event field was absent at encode time.
    #[error("cannot encode notification: {0}")]
    EncodingError(String),

    /// No object is registered at this OID inside the cloudify tree.
    #[error("no object registered at OID {0}")]
    UnknownObject(Oid),

    /// The OID does not belong to the cloudify enterprise tree at all.
    #[error("OID {0} is outside the cloudify enterprise tree")]
    OutOfDomain(Oid),

    /// A received value does not conform to its object's declared syntax.
    #[error("value for {object} violates its declared syntax: {detail}")]
    SyntaxViolation { object: String, detail: String },

    /// A notification payload does not match the declared OBJECTS list.
    #[error("malformed notification payload: {0}")]
    MalformedNotification(String),
}

/// Result type alias for schema operations.
pub type MibResult<T> = Result<T, MibError>;
