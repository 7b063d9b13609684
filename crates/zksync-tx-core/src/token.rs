//! Fungible token identity and decimal conversions.
//!
//! Amounts travel through the encoder as integers in the token's smallest
//! unit. Decimal strings are only used for the human-readable messages shown
//! to signers and for parsing user input.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};

/// Contract address of the native ETH token.
pub const DEFAULT_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// A fungible token known to the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Layer-1 contract address (20-byte hex).
    pub address: String,
    /// Numeric id assigned by the network.
    pub id: u64,
    pub symbol: String,
    /// Precision of the smallest unit.
    pub decimals: u8,
}

impl Token {
    pub fn new(id: u64, address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            id,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// The native ETH token: id 0, zero address, 18 decimals.
    pub fn eth() -> Self {
        Self::new(0, DEFAULT_TOKEN_ADDRESS, "ETH", 18)
    }

    pub fn is_eth(&self) -> bool {
        self.symbol == "ETH" && self.address == DEFAULT_TOKEN_ADDRESS
    }

    /// Exact decimal value of `amount`, without trailing zeros.
    ///
    /// `1_500_000` with 6 decimals gives `"1.5"`, `1_000_000` gives `"1"`.
    pub fn decimal_amount(&self, amount: U256) -> String {
        let (integer, fraction) = self.split_units(amount);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            integer
        } else {
            format!("{integer}.{fraction}")
        }
    }

    /// Decimal rendering used in signing messages.
    ///
    /// Never uses scientific notation and always keeps at least one
    /// fractional digit: `"1.0"`, `"1.5"`, `"0.0"`.
    pub fn decimal_str_amount(&self, amount: U256) -> String {
        let (integer, fraction) = self.split_units(amount);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            format!("{integer}.0")
        } else {
            format!("{integer}.{fraction}")
        }
    }

    /// Parse a decimal string into the token's smallest unit.
    ///
    /// The conversion is exact: digits below the token's precision must be
    /// zero.
    pub fn from_decimal(&self, amount: &str) -> Result<U256> {
        let amount = amount.trim();
        let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
            return Err(EncodeError::format("decimal amount", format!("'{amount}' is not a decimal number")));
        }

        let fraction = fraction.trim_end_matches('0');
        let decimals = usize::from(self.decimals);
        if fraction.len() > decimals {
            return Err(EncodeError::format(
                "decimal amount",
                format!("'{amount}' has more than {decimals} fractional digits for {}", self.symbol),
            ));
        }

        let digits = format!("{integer}{fraction:0<decimals$}");
        U256::from_str_radix(&digits, 10)
            .map_err(|e| EncodeError::format("decimal amount", e.to_string()))
    }

    /// Split `amount` into integer and zero-padded fractional digit strings.
    fn split_units(&self, amount: U256) -> (String, String) {
        let digits = amount.to_string();
        let decimals = usize::from(self.decimals);
        if decimals == 0 {
            return (digits, String::new());
        }
        let padded = format!("{digits:0>width$}", width = decimals + 1);
        let (integer, fraction) = padded.split_at(padded.len() - decimals);
        (integer.to_string(), fraction.to_string())
    }
}

/// A token reference as supplied by callers: a numeric id, or a string that
/// is either a contract address or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenLike {
    Id(u64),
    Str(String),
}

impl From<u64> for TokenLike {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<u32> for TokenLike {
    fn from(id: u32) -> Self {
        Self::Id(u64::from(id))
    }
}

impl From<&str> for TokenLike {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for TokenLike {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn usdc() -> Token {
        Token::new(2, "0xeb8f08a975ab53e34d8a0330e0d34de942c95926", "USDC", 6)
    }

    #[test]
    fn test_eth_token() {
        let eth = Token::eth();
        assert_eq!(eth.id, 0);
        assert_eq!(eth.decimals, 18);
        assert!(eth.is_eth());
        assert!(!usdc().is_eth());
    }

    #[test]
    fn test_decimal_str_amount() {
        let token = usdc();
        assert_eq!(token.decimal_str_amount(U256::from(1_000_000u64)), "1.0");
        assert_eq!(token.decimal_str_amount(U256::from(1_500_000u64)), "1.5");
        assert_eq!(token.decimal_str_amount(U256::ZERO), "0.0");
        assert_eq!(token.decimal_str_amount(U256::from(1u64)), "0.000001");
        assert_eq!(token.decimal_str_amount(U256::from(123_000_010u64)), "123.00001");
    }

    #[test]
    fn test_decimal_str_amount_no_scientific_notation() {
        let eth = Token::eth();
        assert_eq!(eth.decimal_str_amount(U256::from(10u64)), "0.00000000000000001");
        assert_eq!(
            eth.decimal_str_amount(U256::from(1_000_000_000_000_000_000u128)),
            "1.0"
        );
    }

    #[test]
    fn test_decimal_str_amount_zero_decimals() {
        let token = Token::new(7, DEFAULT_TOKEN_ADDRESS, "PTS", 0);
        assert_eq!(token.decimal_str_amount(U256::from(50u64)), "50.0");
        assert_eq!(token.decimal_amount(U256::from(50u64)), "50");
    }

    #[test]
    fn test_from_decimal() {
        let token = usdc();
        assert_eq!(token.from_decimal("1.5").unwrap(), U256::from(1_500_000u64));
        assert_eq!(token.from_decimal("42").unwrap(), U256::from(42_000_000u64));
        assert_eq!(token.from_decimal(".25").unwrap(), U256::from(250_000u64));
        assert_eq!(token.from_decimal("0.1000000").unwrap(), U256::from(100_000u64));
    }

    #[test]
    fn test_from_decimal_rejects_inexact_and_malformed() {
        let token = usdc();
        assert!(matches!(
            token.from_decimal("0.0000001"),
            Err(EncodeError::Format { .. })
        ));
        assert!(token.from_decimal("").is_err());
        assert!(token.from_decimal(".").is_err());
        assert!(token.from_decimal("-1").is_err());
        assert!(token.from_decimal("1e5").is_err());
        assert!(token.from_decimal("1.2.3").is_err());
    }

    #[test]
    fn test_token_deserializes_from_operator_json() {
        let json = r#"{"address":"0x0000000000000000000000000000000000000000","id":0,"symbol":"ETH","decimals":18}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token, Token::eth());
    }

    proptest! {
        #[test]
        fn prop_decimal_roundtrip(units in any::<u64>(), decimals in 0u8..=18) {
            let token = Token::new(1, DEFAULT_TOKEN_ADDRESS, "TST", decimals);
            let amount = U256::from(units);
            let decimal = token.decimal_amount(amount);
            prop_assert_eq!(token.from_decimal(&decimal).unwrap(), amount);
            prop_assert_eq!(token.decimal_amount(token.from_decimal(&decimal).unwrap()), decimal);
        }

        #[test]
        fn prop_decimal_str_always_has_point(units in any::<u64>(), decimals in 0u8..=18) {
            let token = Token::new(1, DEFAULT_TOKEN_ADDRESS, "TST", decimals);
            let rendered = token.decimal_str_amount(U256::from(units));
            prop_assert!(rendered.contains('.'));
            prop_assert!(!rendered.ends_with('.'));
            prop_assert!(!rendered.contains('e') && !rendered.contains('E'));
        }
    }
}
