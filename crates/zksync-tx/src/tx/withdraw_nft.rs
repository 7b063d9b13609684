//! Withdrawal of an NFT to layer 1.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_nonce, serialize_timestamp,
    serialize_token_id,
};
use zksync_tx_core::{pack_fee, TimeRange, Token, TxSignature, TxType, U256};

use super::{fee_line, payload_header, signature_dict, trace_encoded, EncodedTx};
use crate::error::Result;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 20 + 4 + 4 + 1 + 4 + 8 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawNFT {
    pub account_id: u64,
    pub from: String,
    pub to: String,
    pub fee_token: Token,
    pub fee: U256,
    pub nonce: u64,
    pub time_range: TimeRange,
    /// Id of the NFT being withdrawn.
    pub token_id: u64,
    pub signature: Option<TxSignature>,
}

impl EncodedTx for WithdrawNFT {
    fn tx_type(&self) -> TxType {
        TxType::WithdrawNFT
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.account_id)?);
        buf.extend_from_slice(&serialize_address(&self.from)?);
        buf.extend_from_slice(&serialize_address(&self.to)?);
        buf.extend_from_slice(&serialize_token_id(self.token_id)?);
        buf.extend_from_slice(&serialize_token_id(self.fee_token.id)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_from));
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_until));
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        [
            format!("WithdrawNFT {} to: {}", self.token_id, self.to.to_lowercase()),
            fee_line(&self.fee_token, self.fee),
            format!("Nonce: {}", self.nonce),
        ]
        .join("\n")
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "accountId": self.account_id,
            "from": self.from,
            "to": self.to,
            "feeToken": self.fee_token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "validFrom": self.time_range.valid_from,
            "validUntil": self.time_range.valid_until,
            "token": self.token_id,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::test_support::*;

    fn withdraw_nft() -> WithdrawNFT {
        WithdrawNFT {
            account_id: 3,
            from: ALICE.into(),
            to: BOB.into(),
            fee_token: usdc(),
            fee: U256::from(150u64),
            nonce: 2,
            time_range: TimeRange::default(),
            token_id: 65_540,
            signature: None,
        }
    }

    #[test]
    fn test_nft_id_precedes_fee_token() {
        let bytes = withdraw_nft().encoded_message().unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(&bytes[..2], &[0xf5, 0x01]);
        assert_eq!(&bytes[46..50], &65_540u32.to_be_bytes());
        assert_eq!(&bytes[50..54], &[0, 0, 0, 2]);
        assert_eq!(bytes[54], 0x1f);
        assert_eq!(&bytes[55..59], &[0, 0, 0, 2]);
    }

    #[test]
    fn test_message() {
        assert_eq!(
            withdraw_nft().human_readable_message(),
            "WithdrawNFT 65540 to: 0x19aa2ed8712072e918632259780e587698ef58df\nFee: 0.00015 USDC\nNonce: 2"
        );
    }

    #[test]
    fn test_transport_dict() {
        let dict = withdraw_nft().to_transport_dict();
        assert_eq!(dict["type"], "WithdrawNFT");
        assert_eq!(dict["token"], 65_540);
        assert_eq!(dict["feeToken"], 2);
        assert_eq!(dict["fee"], "150");
        assert_eq!(dict["validUntil"], 4_294_967_295u64);
    }
}
