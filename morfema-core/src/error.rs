//! Core error types

use thiserror::Error;

/// Errors produced by record construction and tag decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An attribute value outside its closed domain, or a required
    /// attribute that was never supplied
    #[error("invalid {attribute} value: {value:?}")]
    InvalidAttribute {
        /// The attribute whose domain was violated
        attribute: &'static str,
        /// The offending value ("<missing>" for an absent required field)
        value: String,
    },

    /// A tag string that cannot be decoded for the requested POS kind
    #[error("cannot decode {tag:?} as {kind}: {reason}")]
    Decode {
        /// The tag that failed to decode
        tag: String,
        /// The POS kind the caller asked for
        kind: &'static str,
        /// Why decoding failed
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn missing(attribute: &'static str) -> Self {
        CoreError::InvalidAttribute {
            attribute,
            value: "<missing>".to_string(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
