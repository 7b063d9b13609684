//! # zkSync Transaction Core
//!
//! Pure primitives for encoding zkSync transactions: fixed-width field
//! serializers, the packed amount/fee format, tokens and the token registry.
//!
//! This crate contains no I/O, no networking and no signing. Every function
//! is deterministic over its inputs.
//!
//! ## Key Types
//!
//! - [`Token`] - Asset identity and decimal precision
//! - [`Tokens`] - Registry snapshot with lookups by id, address or symbol
//! - [`TxType`] - Protocol tag of a top-level transaction
//! - [`Ratio`] - Exchange rate carried by an order
//! - [`TimeRange`] - Validity window
//!
//! ## Packing
//!
//! Amounts and fees are stored as `mantissa * 10^exponent`. See [`packing`].

pub mod error;
pub mod packing;
pub mod registry;
pub mod serialize;
pub mod signature;
pub mod token;
pub mod types;

pub use error::{EncodeError, PackingKind, Result};
pub use packing::{
    closest_packable_amount, closest_packable_fee, is_amount_packable, is_fee_packable,
    pack_amount, pack_fee, unpack_amount, unpack_fee,
};
pub use registry::Tokens;
pub use signature::{EthSignatureType, TxEthSignature, TxSignature};
pub use token::{Token, TokenLike, DEFAULT_TOKEN_ADDRESS};
pub use types::{Ratio, RatioType, TimeRange, TxType, ORDER_MSG_TYPE, TRANSACTION_VERSION};

pub use alloy_primitives::U256;
