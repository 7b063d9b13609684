//! Minting an NFT identified by its content hash.
//!
//! Mints carry no validity window.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_content_hash, serialize_nonce,
    serialize_token_id,
};
use zksync_tx_core::{pack_fee, Token, TxSignature, TxType, U256};

use super::{fee_line, payload_header, signature_dict, trace_encoded, EncodedTx};
use crate::error::Result;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 32 + 20 + 4 + 1 + 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintNFT {
    pub creator_id: u64,
    pub creator_address: String,
    /// 32-byte hex hash of the NFT content.
    pub content_hash: String,
    pub recipient: String,
    pub fee: U256,
    pub fee_token: Token,
    pub nonce: u64,
    pub signature: Option<TxSignature>,
}

impl EncodedTx for MintNFT {
    fn tx_type(&self) -> TxType {
        TxType::MintNFT
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.creator_id)?);
        buf.extend_from_slice(&serialize_address(&self.creator_address)?);
        buf.extend_from_slice(&serialize_content_hash(&self.content_hash)?);
        buf.extend_from_slice(&serialize_address(&self.recipient)?);
        buf.extend_from_slice(&serialize_token_id(self.fee_token.id)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        [
            format!("MintNFT {} for: {}", self.content_hash, self.recipient.to_lowercase()),
            fee_line(&self.fee_token, self.fee),
            format!("Nonce: {}", self.nonce),
        ]
        .join("\n")
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "creatorId": self.creator_id,
            "creatorAddress": self.creator_address,
            "contentHash": self.content_hash,
            "recipient": self.recipient,
            "feeToken": self.fee_token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "signature": signature_dict(self.signature.as_ref()),
        })
    }

    fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    fn set_signature(&mut self, signature: TxSignature) {
        self.signature = Some(signature);
    }
}
