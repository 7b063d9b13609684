//! Forced withdrawal of an inactive account's balance to its layer-1 address.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_nonce, serialize_timestamp,
    serialize_token_id,
};
use zksync_tx_core::{pack_fee, TimeRange, Token, TxSignature, TxType, U256};

use super::{fee_line, payload_header, signature_dict, trace_encoded, EncodedTx};
use crate::error::Result;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 4 + 1 + 4 + 8 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedExit {
    /// Account paying the fee.
    pub initiator_account_id: u64,
    /// Account whose balance is withdrawn.
    pub target: String,
    pub token: Token,
    pub fee: U256,
    pub nonce: u64,
    pub time_range: TimeRange,
    pub signature: Option<TxSignature>,
}

impl EncodedTx for ForcedExit {
    fn tx_type(&self) -> TxType {
        TxType::ForcedExit
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.initiator_account_id)?);
        buf.extend_from_slice(&serialize_address(&self.target)?);
        buf.extend_from_slice(&serialize_token_id(self.token.id)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_from));
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_until));
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        [
            format!("ForcedExit {} to: {}", self.token.symbol, self.target.to_lowercase()),
            fee_line(&self.token, self.fee),
            format!("Nonce: {}", self.nonce),
        ]
        .join("\n")
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "initiatorAccountId": self.initiator_account_id,
            "target": self.target,
            "token": self.token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "signature": signature_dict(self.signature.as_ref()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::test_support::*;

    fn forced_exit(fee: u64) -> ForcedExit {
        ForcedExit {
            initiator_account_id: 9,
            target: BOB.into(),
            token: usdc(),
            fee: U256::from(fee),
            nonce: 1,
            time_range: TimeRange::new(100, 200),
            signature: None,
        }
    }

    #[test]
    fn test_encoded_layout() {
        let bytes = forced_exit(10).encoded_message().unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(&bytes[..2], &[0xf7, 0x01]);
        assert_eq!(&bytes[2..6], &[0, 0, 0, 9]);
        assert_eq!(&bytes[26..30], &[0, 0, 0, 2]);
        assert_eq!(bytes[30], 0x11);
        assert_eq!(&bytes[31..35], &[0, 0, 0, 1]);
        assert_eq!(&bytes[35..43], &100u64.to_be_bytes());
        assert_eq!(&bytes[43..51], &200u64.to_be_bytes());
    }

    #[test]
    fn test_message_always_has_fee_line() {
        assert_eq!(
            forced_exit(0).human_readable_message(),
            "ForcedExit USDC to: 0x19aa2ed8712072e918632259780e587698ef58df\nFee: 0.0 USDC\nNonce: 1"
        );
    }

    #[test]
    fn test_transport_dict() {
        let dict = forced_exit(10).to_transport_dict();
        assert_eq!(dict["type"], "ForcedExit");
        assert_eq!(dict["initiatorAccountId"], 9);
        assert_eq!(dict["target"], BOB);
        assert_eq!(dict["token"], 2);
        assert_eq!(dict["fee"], "10");
        assert_eq!(dict["validFrom"], 100);
        assert!(dict["signature"].is_null());
    }
}
