//! Setting or rotating an account's layer-2 signing key.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_nonce, serialize_timestamp,
    serialize_token_id,
};
use zksync_tx_core::{pack_fee, TimeRange, Token, TxEthSignature, TxSignature, TxType, U256};

use super::{payload_header, signature_dict, trace_encoded, EncodedTx};
use crate::error::Result;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 20 + 4 + 1 + 4 + 8 + 8;

/// Layer-1 authorization of a key change.
///
/// A key change without authorization data must be approved on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePubKeyAuth {
    /// Authorized by an ECDSA signature from the account's wallet.
    Ecdsa { batch_hash: [u8; 32] },
    /// Authorized by deriving the account from a CREATE2 deployment.
    Create2 {
        /// Deploying factory. Only the salt and code hash are transported.
        creator_address: String,
        salt_arg: [u8; 32],
        code_hash: [u8; 32],
    },
}

impl ChangePubKeyAuth {
    /// ECDSA authorization with the all-zero batch hash.
    pub fn ecdsa() -> Self {
        Self::Ecdsa {
            batch_hash: [0u8; 32],
        }
    }

    /// Bytes appended to the layer-1 signing payload.
    pub fn signing_suffix(&self) -> &[u8] {
        match self {
            Self::Ecdsa { batch_hash } => batch_hash,
            Self::Create2 { salt_arg, .. } => salt_arg,
        }
    }

    pub fn to_transport_dict(&self, eth_signature: Option<&TxEthSignature>) -> Value {
        match self {
            Self::Ecdsa { batch_hash } => json!({
                "type": "ECDSA",
                "ethSignature": eth_signature.map(|sig| sig.signature.as_str()),
                "batchHash": format!("0x{}", hex::encode(batch_hash)),
            }),
            Self::Create2 {
                salt_arg,
                code_hash,
                ..
            } => json!({
                "type": "CREATE2",
                "saltArg": format!("0x{}", hex::encode(salt_arg)),
                "codeHash": format!("0x{}", hex::encode(code_hash)),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePubKey {
    pub account_id: u64,
    /// Layer-1 address of the account.
    pub account: String,
    /// New public key hash, usually `sync:`-prefixed.
    pub new_pk_hash: String,
    pub fee_token: Token,
    pub fee: U256,
    pub nonce: u64,
    pub time_range: TimeRange,
    pub auth: Option<ChangePubKeyAuth>,
    pub eth_signature: Option<TxEthSignature>,
    pub signature: Option<TxSignature>,
}

impl ChangePubKey {
    /// Payload signed by the layer-1 wallet to authorize the key change:
    /// new key hash, nonce, account id, then the authorization suffix.
    pub fn eth_signing_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(20 + 4 + 4 + 32);
        buf.extend_from_slice(&serialize_address(&self.new_pk_hash)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_account_id(self.account_id)?);
        if let Some(auth) = &self.auth {
            buf.extend_from_slice(auth.signing_suffix());
        }
        Ok(buf)
    }

    /// The `ethAuthData` transport object.
    pub fn auth_data(&self) -> Value {
        match &self.auth {
            None => json!({ "type": "Onchain" }),
            Some(auth) => auth.to_transport_dict(self.eth_signature.as_ref()),
        }
    }
}

impl EncodedTx for ChangePubKey {
    fn tx_type(&self) -> TxType {
        TxType::ChangePubKey
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = payload_header(self.tx_type(), ENCODED_LEN);
        buf.extend_from_slice(&serialize_account_id(self.account_id)?);
        buf.extend_from_slice(&serialize_address(&self.account)?);
        buf.extend_from_slice(&serialize_address(&self.new_pk_hash)?);
        buf.extend_from_slice(&serialize_token_id(self.fee_token.id)?);
        buf.push(pack_fee(self.fee)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_from));
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_until));
        trace_encoded(self.tx_type(), &buf);
        Ok(buf)
    }

    fn human_readable_message(&self) -> String {
        let pk_hash = self.new_pk_hash.replace("sync:", "").to_lowercase();
        let mut lines = vec![format!("Set signing key: {pk_hash}")];
        // Wallets sign the fee in base units here, not as a decimal.
        if !self.fee.is_zero() {
            lines.push(format!("Fee: {} {}", self.fee, self.fee_token.symbol));
        }
        lines.push(format!("Nonce: {}", self.nonce));
        lines.join("\n")
    }

    fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.tx_type().name(),
            "accountId": self.account_id,
            "account": self.account,
            "newPkHash": self.new_pk_hash,
            "fee_token": self.fee_token.id,
            "fee": self.fee.to_string(),
            "nonce": self.nonce,
            "ethAuthData": self.auth_data(),
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

    fn change_pub_key(auth: Option<ChangePubKeyAuth>) -> ChangePubKey {
        ChangePubKey {
            account_id: 55,
            account: ALICE.into(),
            new_pk_hash: PK_HASH.into(),
            fee_token: Token::eth(),
            fee: U256::ZERO,
            nonce: 0,
            time_range: TimeRange::default(),
            auth,
            eth_signature: None,
            signature: None,
        }
    }

    #[test]
    fn test_encoded_layout() {
        let bytes = change_pub_key(None).encoded_message().unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(&bytes[..2], &[0xf8, 0x01]);
        assert_eq!(&bytes[2..6], &[0, 0, 0, 55]);
        assert_eq!(&bytes[6..26], &hex::decode("ede35562d3555e61120a151b3c8e8e91d83a378a").unwrap()[..]);
        assert_eq!(&bytes[26..46], &hex::decode("18e8446d7748f2de52b28345bdbc76160e6b35eb").unwrap()[..]);
        assert_eq!(&bytes[46..50], &[0, 0, 0, 0]);
        assert_eq!(bytes[50], 0);
    }

    #[test]
    fn test_auth_data_is_not_part_of_payload() {
        let onchain = change_pub_key(None).encoded_message().unwrap();
        let create2 = change_pub_key(Some(ChangePubKeyAuth::Create2 {
            creator_address: BOB.into(),
            salt_arg: [0x11; 32],
            code_hash: [0x22; 32],
        }))
        .encoded_message()
        .unwrap();
        assert_eq!(onchain, create2);
    }

    #[test]
    fn test_eth_signing_bytes() {
        let plain = change_pub_key(None).eth_signing_bytes().unwrap();
        assert_eq!(plain.len(), 28);
        assert_eq!(&plain[24..], &[0, 0, 0, 55]);

        let ecdsa = change_pub_key(Some(ChangePubKeyAuth::Ecdsa {
            batch_hash: [0xab; 32],
        }))
        .eth_signing_bytes()
        .unwrap();
        assert_eq!(&ecdsa[..28], &plain[..]);
        assert_eq!(&ecdsa[28..], &[0xab; 32]);

        let create2 = change_pub_key(Some(ChangePubKeyAuth::Create2 {
            creator_address: BOB.into(),
            salt_arg: [0x11; 32],
            code_hash: [0x22; 32],
        }))
        .eth_signing_bytes()
        .unwrap();
        assert_eq!(&create2[28..], &[0x11; 32]);
    }

    #[test]
    fn test_message() {
        let mut tx = change_pub_key(None);
        assert_eq!(
            tx.human_readable_message(),
            "Set signing key: 18e8446d7748f2de52b28345bdbc76160e6b35eb\nNonce: 0"
        );

        tx.fee = U256::from(50_000_000_000_000u64);
        tx.nonce = 4;
        assert_eq!(
            tx.human_readable_message(),
            "Set signing key: 18e8446d7748f2de52b28345bdbc76160e6b35eb\nFee: 50000000000000 ETH\nNonce: 4"
        );
    }

    #[test]
    fn test_message_fee_is_in_base_units() {
        let mut tx = change_pub_key(None);
        tx.fee_token = usdc();
        tx.fee = U256::from(1_500_000u64);
        let message = tx.human_readable_message();
        assert!(message.contains("Fee: 1500000 USDC"), "{message}");
        assert!(!message.contains("1.5"));
    }

    #[test]
    fn test_auth_data_shapes() {
        assert_eq!(change_pub_key(None).auth_data(), json!({"type": "Onchain"}));

        let mut ecdsa = change_pub_key(Some(ChangePubKeyAuth::ecdsa()));
        assert!(ecdsa.auth_data()["ethSignature"].is_null());
        ecdsa.eth_signature = Some(TxEthSignature::ethereum("0xsig"));
        let data = ecdsa.auth_data();
        assert_eq!(data["type"], "ECDSA");
        assert_eq!(data["ethSignature"], "0xsig");
        assert_eq!(data["batchHash"], format!("0x{}", "00".repeat(32)));

        let create2 = change_pub_key(Some(ChangePubKeyAuth::Create2 {
            creator_address: BOB.into(),
            salt_arg: [0x11; 32],
            code_hash: [0x22; 32],
        }));
        let data = create2.auth_data();
        assert_eq!(data["type"], "CREATE2");
        assert!(data.get("creatorAddress").is_none());
        assert_eq!(data.as_object().unwrap().len(), 3);
        assert_eq!(data["saltArg"], format!("0x{}", "11".repeat(32)));
        assert_eq!(data["codeHash"], format!("0x{}", "22".repeat(32)));
    }

    #[test]
    fn test_transport_dict() {
        let dict = change_pub_key(None).to_transport_dict();
        assert_eq!(dict["type"], "ChangePubKey");
        assert_eq!(dict["accountId"], 55);
        assert_eq!(dict["newPkHash"], PK_HASH);
        assert_eq!(dict["fee_token"], 0);
        assert_eq!(dict["ethAuthData"]["type"], "Onchain");
    }
}
