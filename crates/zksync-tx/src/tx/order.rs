//! Limit orders, the two legs of a [`Swap`](super::Swap).
//!
//! An order is signed on its own but never submitted alone, so it has no
//! transaction tag. Its payload starts with [`ORDER_MSG_TYPE`] instead.

use serde_json::{json, Value};
use zksync_tx_core::serialize::{
    serialize_account_id, serialize_address, serialize_nonce, serialize_ratio_part,
    serialize_timestamp, serialize_token_id,
};
use zksync_tx_core::{
    pack_amount, Ratio, TimeRange, Token, TxEthSignature, TxSignature, ORDER_MSG_TYPE,
    TRANSACTION_VERSION, U256,
};

use crate::error::Result;
use crate::signer::TxSigner;

const ENCODED_LEN: usize = 1 + 1 + 4 + 20 + 4 + 4 + 4 + 16 + 16 + 5 + 8 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub account_id: u64,
    /// Receiver of the bought tokens.
    pub recipient: String,
    pub nonce: u64,
    pub token_sell: Token,
    pub token_buy: Token,
    /// Amount of `token_sell` to sell; zero makes this a limit order.
    pub amount: U256,
    /// Price as `token_sell : token_buy` in smallest units.
    pub ratio: Ratio,
    pub time_range: TimeRange,
    pub signature: Option<TxSignature>,
    pub eth_signature: Option<TxEthSignature>,
}

impl Order {
    pub fn msg_type(&self) -> u8 {
        ORDER_MSG_TYPE
    }

    pub fn encoded_message(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(ENCODED_LEN);
        buf.push(self.msg_type());
        buf.push(TRANSACTION_VERSION);
        buf.extend_from_slice(&serialize_account_id(self.account_id)?);
        buf.extend_from_slice(&serialize_address(&self.recipient)?);
        buf.extend_from_slice(&serialize_nonce(self.nonce)?);
        buf.extend_from_slice(&serialize_token_id(self.token_sell.id)?);
        buf.extend_from_slice(&serialize_token_id(self.token_buy.id)?);
        buf.extend_from_slice(&serialize_ratio_part(self.ratio.numerator)?);
        buf.extend_from_slice(&serialize_ratio_part(self.ratio.denominator)?);
        buf.extend_from_slice(&pack_amount(self.amount)?);
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_from));
        buf.extend_from_slice(&serialize_timestamp(self.time_range.valid_until));
        tracing::trace!(len = buf.len(), "encoded order");
        Ok(buf)
    }

    pub fn human_readable_message(&self) -> String {
        let header = if self.amount.is_zero() {
            format!("Limit order for {} -> {}", self.token_sell.symbol, self.token_buy.symbol)
        } else {
            format!(
                "Order for {} {} -> {}",
                self.token_sell.decimal_str_amount(self.amount),
                self.token_sell.symbol,
                self.token_buy.symbol
            )
        };
        [
            header,
            format!("Ratio: {}", self.ratio),
            format!("Address: {}", self.recipient.to_lowercase()),
            format!("Nonce: {}", self.nonce),
        ]
        .join("\n")
    }

    pub fn to_transport_dict(&self) -> Value {
        json!({
            "accountId": self.account_id,
            "recipient": self.recipient,
            "nonce": self.nonce,
            "tokenSell": self.token_sell.id,
            "tokenBuy": self.token_buy.id,
            "amount": self.amount.to_string(),
            "ratio": [self.ratio.numerator.to_string(), self.ratio.denominator.to_string()],
            "validFrom": self.time_range.valid_from,
            "validUntil": self.time_range.valid_until,
            "signature": self.signature.as_ref().map(TxSignature::to_transport_dict),
            "ethSignature": self.eth_signature.as_ref().map(TxEthSignature::to_transport_dict),
        })
    }

    /// Encode, sign with `signer`, and attach the signature.
    pub fn sign_with(&mut self, signer: &dyn TxSigner) -> Result<()> {
        let message = self.encoded_message()?;
        self.signature = Some(signer.sign(&message)?);
        tracing::debug!(account_id = self.account_id, "attached order signature");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TxError;
    use crate::tx::test_support::*;
    use zksync_tx_core::EncodeError;

    fn order(amount: u64) -> Order {
        Order {
            account_id: 7,
            recipient: ALICE.into(),
            nonce: 18,
            token_sell: usdc(),
            token_buy: Token::eth(),
            amount: U256::from(amount),
            ratio: Ratio::from_parts(1, 2),
            time_range: TimeRange::default(),
            signature: None,
            eth_signature: None,
        }
    }

    #[test]
    fn test_encoded_layout() {
        let bytes = order(1_000_000).encoded_message().unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(bytes[0], b'o');
        assert_eq!(bytes[1], 0x01);
        assert_eq!(&bytes[2..6], &[0, 0, 0, 7]);
        assert_eq!(&bytes[26..30], &[0, 0, 0, 18]);
        assert_eq!(&bytes[30..34], &[0, 0, 0, 2]);
        assert_eq!(&bytes[34..38], &[0, 0, 0, 0]);
        assert_eq!(bytes[53], 1);
        assert_eq!(bytes[69], 2);
        assert_eq!(&bytes[70..75], &[0x00, 0x01, 0xe8, 0x48, 0x00]);
    }

    #[test]
    fn test_oversized_ratio_fails() {
        let mut tx = order(0);
        tx.ratio = Ratio::new(U256::from(u128::MAX) + U256::from(1u64), U256::from(1u64));
        assert!(matches!(
            tx.encoded_message(),
            Err(TxError::Encode(EncodeError::Range { field: "ratio part", .. }))
        ));
    }

    #[test]
    fn test_message_headers() {
        assert_eq!(
            order(0).human_readable_message(),
            "Limit order for USDC -> ETH\nRatio: 1:2\nAddress: 0xede35562d3555e61120a151b3c8e8e91d83a378a\nNonce: 18"
        );
        assert_eq!(
            order(2_500_000).human_readable_message(),
            "Order for 2.5 USDC -> ETH\nRatio: 1:2\nAddress: 0xede35562d3555e61120a151b3c8e8e91d83a378a\nNonce: 18"
        );
    }

    #[test]
    fn test_transport_dict() {
        let mut tx = order(5);
        tx.eth_signature = Some(TxEthSignature::ethereum("0xeth"));
        tx.sign_with(&EchoSigner).unwrap();
        let dict = tx.to_transport_dict();

        assert!(dict.get("type").is_none());
        assert_eq!(dict["tokenSell"], 2);
        assert_eq!(dict["tokenBuy"], 0);
        assert_eq!(dict["amount"], "5");
        assert_eq!(dict["ratio"], json!(["1", "2"]));
        assert_eq!(dict["signature"]["signature"], format!("len:{ENCODED_LEN}"));
        assert_eq!(dict["ethSignature"]["type"], "EthereumSignature");
    }
}
