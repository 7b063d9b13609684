//! Error types for zkSync transaction encoding.

use std::fmt;

use alloy_primitives::U256;
use thiserror::Error;

/// Which packed numeric format a value failed to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingKind {
    Amount,
    Fee,
}

impl fmt::Display for PackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount => write!(f, "amount"),
            Self::Fee => write!(f, "fee"),
        }
    }
}

/// Errors raised while serializing a field into its canonical bytes.
///
/// Encoding stops at the first failing field; no partial output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A numeric value does not fit its fixed-width field.
    #[error("{field} value {value} does not fit in {bytes} bytes")]
    Range {
        field: &'static str,
        value: U256,
        bytes: usize,
    },

    /// Malformed hex, address, content hash or decimal input.
    #[error("invalid {field}: {reason}")]
    Format { field: &'static str, reason: String },

    /// The value has no exact mantissa/exponent representation.
    #[error("{kind} {value} is not packable")]
    Packing { kind: PackingKind, value: U256 },

    /// A token registry snapshot could not be parsed.
    #[error("invalid token registry: {0}")]
    Registry(String),
}

impl EncodeError {
    pub(crate) fn range(field: &'static str, value: U256, bytes: usize) -> Self {
        tracing::debug!(field, %value, bytes, "value out of range");
        Self::Range {
            field,
            value,
            bytes,
        }
    }

    pub(crate) fn format(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(field, %reason, "malformed input");
        Self::Format { field, reason }
    }

    pub(crate) fn packing(kind: PackingKind, value: U256) -> Self {
        tracing::debug!(%kind, %value, "value is not packable");
        Self::Packing { kind, value }
    }
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
