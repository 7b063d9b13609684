//! Transaction variants.
//!
//! Every top-level variant produces three views of itself:
//! - the canonical signing payload ([`EncodedTx::encoded_message`]),
//! - the text shown to a wallet signer ([`EncodedTx::human_readable_message`]),
//! - the JSON object sent to the operator ([`EncodedTx::to_transport_dict`]).
//!
//! A payload starts with `0xFF - tag` followed by [`TRANSACTION_VERSION`],
//! then the variant's fields in protocol order.

mod change_pub_key;
mod forced_exit;
mod mint_nft;
mod order;
mod swap;
mod transfer;
mod withdraw;
mod withdraw_nft;

pub use change_pub_key::{ChangePubKey, ChangePubKeyAuth};
pub use forced_exit::ForcedExit;
pub use mint_nft::MintNFT;
pub use order::Order;
pub use swap::Swap;
pub use transfer::Transfer;
pub use withdraw::Withdraw;
pub use withdraw_nft::WithdrawNFT;

use serde_json::Value;
use zksync_tx_core::{Token, TxSignature, TxType, TRANSACTION_VERSION, U256};

use crate::error::Result;
use crate::signer::TxSigner;

/// The capability set shared by all top-level transactions.
pub trait EncodedTx {
    /// Protocol tag of this transaction.
    fn tx_type(&self) -> TxType;

    /// Canonical bytes handed to the signer.
    ///
    /// Fails on the first field that violates its serializer's precondition.
    fn encoded_message(&self) -> Result<Vec<u8>>;

    /// Text a wallet shows before signing.
    fn human_readable_message(&self) -> String;

    /// JSON object for the operator API.
    fn to_transport_dict(&self) -> Value;

    fn signature(&self) -> Option<&TxSignature>;

    fn set_signature(&mut self, signature: TxSignature);

    /// Encode, sign with `signer`, and attach the signature.
    fn sign_with(&mut self, signer: &dyn TxSigner) -> Result<()> {
        let message = self.encoded_message()?;
        let signature = signer.sign(&message)?;
        tracing::debug!(tx_type = %self.tx_type(), "attached signature");
        self.set_signature(signature);
        Ok(())
    }
}

/// Any top-level transaction.
#[derive(Debug, Clone)]
pub enum Transaction {
    ChangePubKey(ChangePubKey),
    Transfer(Transfer),
    Withdraw(Withdraw),
    ForcedExit(ForcedExit),
    Swap(Swap),
    MintNFT(MintNFT),
    WithdrawNFT(WithdrawNFT),
}

macro_rules! dispatch {
    ($self:expr, $tx:ident => $body:expr) => {
        match $self {
            Transaction::ChangePubKey($tx) => $body,
            Transaction::Transfer($tx) => $body,
            Transaction::Withdraw($tx) => $body,
            Transaction::ForcedExit($tx) => $body,
            Transaction::Swap($tx) => $body,
            Transaction::MintNFT($tx) => $body,
            Transaction::WithdrawNFT($tx) => $body,
        }
    };
}

impl EncodedTx for Transaction {
    fn tx_type(&self) -> TxType {
        dispatch!(self, tx => tx.tx_type())
    }

    fn encoded_message(&self) -> Result<Vec<u8>> {
        dispatch!(self, tx => tx.encoded_message())
    }

    fn human_readable_message(&self) -> String {
        dispatch!(self, tx => tx.human_readable_message())
    }

    fn to_transport_dict(&self) -> Value {
        dispatch!(self, tx => tx.to_transport_dict())
    }

    fn signature(&self) -> Option<&TxSignature> {
        dispatch!(self, tx => tx.signature())
    }

    fn set_signature(&mut self, signature: TxSignature) {
        dispatch!(self, tx => tx.set_signature(signature))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Transaction {
                fn from(tx: $variant) -> Self {
                    Transaction::$variant(tx)
                }
            }
        )*
    };
}

impl_from_variant!(ChangePubKey, Transfer, Withdraw, ForcedExit, Swap, MintNFT, WithdrawNFT);

/// Start a payload with the discriminator and version bytes.
pub(crate) fn payload_header(tx_type: TxType, capacity: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(capacity);
    buf.push(tx_type.discriminator());
    buf.push(TRANSACTION_VERSION);
    buf
}

pub(crate) fn trace_encoded(tx_type: TxType, buf: &[u8]) {
    tracing::trace!(%tx_type, len = buf.len(), "encoded transaction");
}

pub(crate) fn signature_dict(signature: Option<&TxSignature>) -> Value {
    signature.map_or(Value::Null, TxSignature::to_transport_dict)
}

/// `Fee: {amount} {symbol}` rendered with the token's decimals.
pub(crate) fn fee_line(token: &Token, fee: U256) -> String {
    format!("Fee: {} {}", token.decimal_str_amount(fee), token.symbol)
}


#[cfg(test)]
pub(crate) mod test_support {
    use zksync_tx_core::{Token, TxSignature};

    use crate::error::SignerError;
    use crate::signer::TxSigner;

    pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
    pub const ALICE: &str = "0xEDE35562d3555e61120a151B3c8e8e91d83a378a";
    pub const BOB: &str = "0x19aa2ed8712072e918632259780e587698ef58df";
    pub const PK_HASH: &str = "sync:18E8446D7748F2DE52B28345BDBC76160E6B35EB";

    pub fn usdc() -> Token {
        Token::new(2, "0xeb8f08a975ab53e34d8a0330e0d34de942c95926", "USDC", 6)
    }

    /// Signs by echoing the message length, so tests can see what was signed.
    pub struct EchoSigner;

    impl TxSigner for EchoSigner {
        fn sign(&self, message: &[u8]) -> Result<TxSignature, SignerError> {
            Ok(TxSignature::new("pk", format!("len:{}", message.len())))
        }
    }

    pub struct FailingSigner;

    impl TxSigner for FailingSigner {
        fn sign(&self, _message: &[u8]) -> Result<TxSignature, SignerError> {
            Err(SignerError::Signing("key unavailable".into()))
        }
    }
}
