//! Shared protocol types and constants.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};
use crate::token::Token;

/// Transaction-format version, the second byte of every signing payload.
pub const TRANSACTION_VERSION: u8 = 0x01;

/// Discriminator byte of an Order message (ASCII `'o'`).
pub const ORDER_MSG_TYPE: u8 = b'o';

/// Default upper bound of a validity window.
pub const DEFAULT_VALID_UNTIL: u64 = u32::MAX as u64;

/// The kind of a top-level transaction.
///
/// The tag values are fixed by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TxType {
    Withdraw = 3,
    Transfer = 5,
    ChangePubKey = 7,
    ForcedExit = 8,
    MintNFT = 9,
    WithdrawNFT = 10,
    Swap = 11,
}

impl TxType {
    /// Convert to the protocol tag.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from a protocol tag.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Withdraw),
            5 => Some(Self::Transfer),
            7 => Some(Self::ChangePubKey),
            8 => Some(Self::ForcedExit),
            9 => Some(Self::MintNFT),
            10 => Some(Self::WithdrawNFT),
            11 => Some(Self::Swap),
            _ => None,
        }
    }

    /// The first byte of the signing payload: `0xFF - tag`.
    pub fn discriminator(self) -> u8 {
        0xff - self.to_u8()
    }

    /// Name used in the `type` field of transport dictionaries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
            Self::ChangePubKey => "ChangePubKey",
            Self::ForcedExit => "ForcedExit",
            Self::MintNFT => "MintNFT",
            Self::WithdrawNFT => "WithdrawNFT",
            Self::Swap => "Swap",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An exchange rate between the sell and buy token of an Order.
///
/// Stored exactly as given; it is never reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub numerator: U256,
    pub denominator: U256,
}

impl Ratio {
    pub fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Convenience constructor for small ratios.
    pub fn from_parts(numerator: u128, denominator: u128) -> Self {
        Self::new(U256::from(numerator), U256::from(denominator))
    }

    /// Build an Order ratio from textual parts in the given unit.
    ///
    /// `Token` parts are decimal amounts of `sell` and `buy` and are scaled
    /// to base units; `Wei` parts must already be base-unit integers.
    pub fn parse(
        ratio_type: RatioType,
        sell: &Token,
        buy: &Token,
        sell_part: &str,
        buy_part: &str,
    ) -> Result<Self> {
        match ratio_type {
            RatioType::Token => Ok(Self::new(
                sell.from_decimal(sell_part)?,
                buy.from_decimal(buy_part)?,
            )),
            RatioType::Wei => Ok(Self::new(parse_base_units(sell_part)?, parse_base_units(buy_part)?)),
        }
    }
}

fn parse_base_units(part: &str) -> Result<U256> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodeError::format("ratio", format!("'{part}' is not a base-unit integer")));
    }
    U256::from_str_radix(part, 10).map_err(|e| EncodeError::format("ratio", e.to_string()))
}

/// Unit in which the parts of a [`Ratio`] are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioType {
    /// Smallest denomination of each token (wei for ETH).
    Wei,
    /// Whole tokens, scaled by each token's decimals.
    Token,
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Validity window of a transaction, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub valid_from: u64,
    pub valid_until: u64,
}

impl TimeRange {
    pub fn new(valid_from: u64, valid_until: u64) -> Self {
        Self {
            valid_from,
            valid_until,
        }
    }

    /// Whether `timestamp` lies inside the window (both ends inclusive).
    pub fn contains(&self, timestamp: u64) -> bool {
        self.valid_from <= timestamp && timestamp <= self.valid_until
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::new(0, DEFAULT_VALID_UNTIL)
    }
}
