//! Withdrawal from layer 2 to a layer-1 address.
//!
//! Unlike a transfer, the amount is not packed: it is sent as a full
//! 16-byte integer so no precision is lost on exit.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    int_to_bytes, serialize_account_id, serialize_address, serialize_nonce, serialize_timestamp,
    serialize_token_id, RAW_AMOUNT_BYTES,
};
use zksync_tx_core::{pack_fee, TimeRange, Token, TxSignature, TxType, U256};

use super::{fee_line, payload_header, signature_dict, trace_encoded, EncodedTx};
use crate::error::Result;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 20 + 4 + RAW_AMOUNT_BYTES + 1 + 4 + 8 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    pub account_id: u64,
    pub from: String,
    /// Layer-1 recipient.
    pub to: String,
    pub token: Token,
    /// Must fit in 16 bytes.
    pub amount: U256,
    /// Must be exactly packable.
    pub fee: U256,
    pub nonce: u64,
    pub time_range: TimeRange,
    pub signature: Option<TxSignature>,
}

impl EncodedTx for Withdraw {
    fn tx_type(&self) -> TxType {
        TxType::Withdraw
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.account_id)?);
        buf.extend_from_slice(&serialize_address(&self.from)?);
        buf.extend_from_slice(&serialize_address(&self.to)?);
        buf.extend_from_slice(&serialize_token_id(self.token.id)?);
        buf.extend_from_slice(&int_to_bytes("amount", self.amount, RAW_AMOUNT_BYTES)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_from));
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_until));
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        let mut lines = Vec::with_capacity(3);
        if !self.amount.is_zero() {
            lines.push(format!(
                "Withdraw {} {} to: {}",
                self.token.decimal_str_amount(self.amount),
                self.token.symbol,
                self.to.to_lowercase()
            ));
        }
        if !self.fee.is_zero() {
            lines.push(fee_line(&self.token, self.fee));
        }
        lines.push(format!("Nonce: {}", self.nonce));
        lines.join("\n")
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "accountId": self.account_id,
            "from": self.from,
            "to": self.to,
            "token": self.token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "signature": signature_dict(self.signature.as_ref()),
            "amount": self.amount.to_string(),
            "validFrom": self.time_range.valid_from,
            "validUntil": self.time_range.valid_until,
        })
    }

    fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    fn set_signature(&mut self, signature: TxSignature) {
        self.signature = Some(signature);
    }
}
