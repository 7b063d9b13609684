//! A signed transaction paired with its layer-1 wallet signature, ready for
//! submission.

use serde_json::{json, Value};
use zksync_tx_core::TxEthSignature;

use crate::error::{Result, TxError};
use crate::tx::{EncodedTx, Transaction};

#[derive(Debug, Clone)]
pub struct TransactionWithSignature {
    tx: Transaction,
    signature: TxEthSignature,
}

impl TransactionWithSignature {
    /// Wrap a transaction that already carries its layer-2 signature.
    pub fn new(tx: impl Into<Transaction>, signature: TxEthSignature) -> Result<Self> {
        let tx = tx.into();
        if tx.signature().is_none() {
            return Err(TxError::MissingSignature(tx.tx_type()));
        }
        Ok(Self { tx, signature })
    }

    pub fn tx(&self) -> &Transaction {
        &self.tx
    }

    pub fn signature(&self) -> &TxEthSignature {
        &self.signature
    }

    pub fn into_parts(self) -> (Transaction, TxEthSignature) {
        (self.tx, self.signature)
    }

    pub fn to_transport_dict(&self) -> Value {
        json!({
            "tx": self.tx.to_transport_dict(),
            "signature": self.signature.to_transport_dict(),
        })
    }
}
