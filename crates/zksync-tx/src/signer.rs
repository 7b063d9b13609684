//! Signing and order-hashing capabilities.
//!
//! The cryptography behind these traits is provided by the caller. The
//! encoder only hands them bytes and attaches what they return.

use zksync_tx_core::TxSignature;

use crate::error::SignerError;

/// Produces a layer-2 signature over an encoded message.
pub trait TxSigner: Send + Sync {
    fn sign(&self, message: &[u8]) -> Result<TxSignature, SignerError>;
}

/// Hashes the concatenated encodings of a swap's two orders.
pub trait OrderHasher: Send + Sync {
    fn hash_orders(&self, orders: &[u8]) -> Result<[u8; 32], SignerError>;
}

impl<F> OrderHasher for F
where
    F: Fn(&[u8]) -> Result<[u8; 32], SignerError> + Send + Sync,
{
    fn hash_orders(&self, orders: &[u8]) -> Result<[u8; 32], SignerError> {
        self(orders)
    }
}
