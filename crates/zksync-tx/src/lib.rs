//! # zkSync Transactions
//!
//! Encoding of zkSync layer-2 transactions into the three forms the network
//! and its wallets consume:
//!
//! - **Signing payload**: canonical bytes handed to the layer-2 signer
//! - **Human-readable message**: text a layer-1 wallet shows before signing
//! - **Transport dictionary**: JSON object submitted to the operator
//!
//! ## Key Concepts
//!
//! - **Transaction**: Closed set of top-level variants, see [`Transaction`].
//! - **Order**: One leg of a [`Swap`]. Signed on its own, never submitted alone.
//! - **Capabilities**: Signing ([`TxSigner`]) and order hashing
//!   ([`OrderHasher`]) are supplied by the caller.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zksync_tx::{EncodedTx, TimeRange, Token, Transfer, U256};
//!
//! let transfer = Transfer {
//!     account_id: 5,
//!     from: "0x0000000000000000000000000000000000000000".into(),
//!     to: "0x0000000000000000000000000000000000000000".into(),
//!     token: Token::eth(),
//!     amount: U256::from(1_000_000_000_000_000_000u128),
//!     fee: U256::ZERO,
//!     nonce: 0,
//!     time_range: TimeRange::default(),
//!     signature: None,
//! };
//!
//! let payload = transfer.encoded_message().unwrap();
//! assert_eq!(payload.len(), 76);
//! ```
//!
//! ## Re-exports
//!
//! - `zksync_tx::core` - Serializers, packing, tokens and the registry

pub mod envelope;
pub mod error;
pub mod signer;
pub mod tx;

pub use zksync_tx_core as core;

pub use envelope::TransactionWithSignature;
pub use error::{Result, SignerError, TxError};
pub use signer::{OrderHasher, TxSigner};
pub use tx::{
    ChangePubKey, ChangePubKeyAuth, EncodedTx, ForcedExit, MintNFT, Order, Swap, Transaction,
    Transfer, Withdraw, WithdrawNFT,
};

pub use zksync_tx_core::{
    EncodeError, EthSignatureType, Ratio, RatioType, TimeRange, Token, TokenLike, Tokens, TxEthSignature,
    TxSignature, TxType, U256,
};
