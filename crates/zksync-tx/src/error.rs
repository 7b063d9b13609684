//! Error types for transaction encoding and signing.

use thiserror::Error;
use zksync_tx_core::{EncodeError, TxType};

/// Errors reported by the external signing and hashing capabilities.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("signing failed: {0}")]
    Signing(String),

    #[error("order hashing failed: {0}")]
    Hashing(String),
}

/// Errors that can occur while encoding, signing or packaging a transaction.
#[derive(Debug, Error)]
pub enum TxError {
    /// A field failed its serializer's precondition.
    #[error("encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// The signer or order hasher failed.
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    /// The transaction has no layer-2 signature attached.
    #[error("{0} transaction is not signed")]
    MissingSignature(TxType),
}

/// Result type for transaction operations.
pub type Result<T> = std::result::Result<T, TxError>;
