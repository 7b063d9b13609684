//! Atomic exchange of two [`Order`]s, submitted by a third party.
//!
//! The swap payload commits to its orders through a 32-byte hash of their
//! concatenated encodings. The hash function is supplied by the caller.

use std::fmt;
use std::sync::Arc;

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_nonce, serialize_token_id,
};
use zksync_tx_core::{pack_amount, pack_fee, Token, TxSignature, TxType, U256};

use super::{payload_header, signature_dict, trace_encoded, EncodedTx, Order};
use crate::error::Result;
use crate::signer::OrderHasher;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 4 + 32 + 4 + 1 + 5 + 5;

#[derive(Clone)]
pub struct Swap {
    pub submitter_id: u64,
    pub submitter_address: String,
    /// Amount traded by each leg, in order.
    pub amounts: [U256; 2],
    pub orders: [Order; 2],
    pub fee_token: Token,
    pub fee: U256,
    pub nonce: u64,
    pub signature: Option<TxSignature>,
    pub hasher: Arc<dyn OrderHasher>,
}

impl Swap {
    /// Concatenated encodings of both orders, in leg order.
    pub fn orders_message(&self) -> Result<Vec<u8>> {
        let mut buf = self.orders[0].encoded_message()?;
        buf.extend_from_slice(&self.orders[1].encoded_message()?);
        Ok(buf)
    }

    pub fn orders_hash(&self) -> Result<[u8; 32]> {
        let message = self.orders_message()?;
        Ok(self.hasher.hash_orders(&message)?)
    }
}

impl fmt::Debug for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swap")
            .field("submitter_id", &self.submitter_id)
            .field("submitter_address", &self.submitter_address)
            .field("amounts", &self.amounts)
            .field("orders", &self.orders)
            .field("fee_token", &self.fee_token)
            .field("fee", &self.fee)
            .field("nonce", &self.nonce)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl EncodedTx for Swap {
    fn tx_type(&self) -> TxType {
        TxType::Swap
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let orders_hash = self.orders_hash()?;
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.submitter_id)?);
        buf.extend_from_slice(&serialize_address(&self.submitter_address)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&orders_hash);
        buf.extend_from_slice(&serialize_token_id(self.fee_token.id)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&pack_amount(self.amounts[0])?);
        buf.extend_from_slice(&pack_amount(self.amounts[1])?);
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        let nonce = format!("Nonce: {}", self.nonce);
        if self.fee.is_zero() {
            return nonce;
        }
        format!(
            "Swap fee: {} {}\n{nonce}",
            self.fee_token.decimal_str_amount(self.fee),
            self.fee_token.symbol
        )
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "submitterId": self.submitter_id,
            "submitterAddress": self.submitter_address,
            "feeToken": self.fee_token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "signature": signature_dict(self.signature.as_ref()),
            "amounts": [self.amounts[0].to_string(), self.amounts[1].to_string()],
            "orders": [self.orders[0].to_transport_dict(), self.orders[1].to_transport_dict()],
        })
    }

    fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    fn set_signature(&mut self, signature: TxSignature) {
        self.signature = Some(signature);
    }
}
