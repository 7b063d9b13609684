//! Packed numeric format for amounts and fees.
//!
//! A packed value is `mantissa * 10^exponent`. The network's consensus layer
//! stores amounts and fees in this format, so encoding must be exact: a value
//! without an exact representation is rejected, never rounded. Callers that
//! want rounding use [`closest_packable_amount`] / [`closest_packable_fee`]
//! before building a transaction.
//!
//! Layouts:
//! - fee: 1 byte, high nibble exponent, low nibble mantissa
//! - amount: 5 bytes, big-endian `(mantissa << 5) | exponent`

use alloy_primitives::U256;

use crate::error::{EncodeError, PackingKind, Result};

pub const FEE_BYTES: usize = 1;
pub const FEE_MANTISSA_MAX: u64 = 0x0f;
pub const FEE_EXPONENT_MAX: u32 = 0x0f;

pub const AMOUNT_BYTES: usize = 5;
pub const AMOUNT_MANTISSA_BITS: u32 = 35;
pub const AMOUNT_EXPONENT_BITS: u32 = 5;
pub const AMOUNT_MANTISSA_MAX: u64 = (1 << AMOUNT_MANTISSA_BITS) - 1;
pub const AMOUNT_EXPONENT_MAX: u32 = (1 << AMOUNT_EXPONENT_BITS) - 1;

fn pow10(exponent: u32) -> U256 {
    U256::from(10u64).pow(U256::from(exponent))
}

fn low_u64(value: U256) -> u64 {
    value.as_limbs()[0]
}

/// Pack a fee into its 1-byte form.
///
/// Picks the largest exponent that reproduces `fee` exactly. Zero packs
/// to `0x00`.
pub fn pack_fee(fee: U256) -> Result<u8> {
    if fee.is_zero() {
        return Ok(0);
    }
    let mantissa_max = U256::from(FEE_MANTISSA_MAX);
    for exponent in (0..=FEE_EXPONENT_MAX).rev() {
        let base = pow10(exponent);
        if !(fee % base).is_zero() {
            continue;
        }
        let mantissa = fee / base;
        if mantissa > mantissa_max {
            break;
        }
        return Ok(((exponent as u8) << 4) | low_u64(mantissa) as u8);
    }
    Err(EncodeError::packing(PackingKind::Fee, fee))
}

/// Decode a packed fee byte.
pub fn unpack_fee(packed: u8) -> U256 {
    let exponent = u32::from(packed >> 4);
    let mantissa = U256::from(packed & 0x0f);
    mantissa * pow10(exponent)
}

/// Pack an amount into its 5-byte form.
///
/// Uses the smallest exponent whose mantissa fits in 35 bits, which is the
/// canonical form produced by the network.
pub fn pack_amount(amount: U256) -> Result<[u8; AMOUNT_BYTES]> {
    let mantissa_max = U256::from(AMOUNT_MANTISSA_MAX);
    for exponent in 0..=AMOUNT_EXPONENT_MAX {
        let base = pow10(exponent);
        if !(amount % base).is_zero() {
            break;
        }
        let mantissa = amount / base;
        if mantissa <= mantissa_max {
            let word = (low_u64(mantissa) << AMOUNT_EXPONENT_BITS) | u64::from(exponent);
            let mut out = [0u8; AMOUNT_BYTES];
            out.copy_from_slice(&word.to_be_bytes()[8 - AMOUNT_BYTES..]);
            return Ok(out);
        }
    }
    Err(EncodeError::packing(PackingKind::Amount, amount))
}

/// Decode a packed amount.
pub fn unpack_amount(packed: &[u8; AMOUNT_BYTES]) -> U256 {
    let mut word_bytes = [0u8; 8];
    word_bytes[8 - AMOUNT_BYTES..].copy_from_slice(packed);
    let word = u64::from_be_bytes(word_bytes);
    let exponent = (word & u64::from(AMOUNT_EXPONENT_MAX)) as u32;
    let mantissa = U256::from(word >> AMOUNT_EXPONENT_BITS);
    mantissa * pow10(exponent)
}

/// Largest packable fee that does not exceed `fee`.
pub fn closest_packable_fee(fee: U256) -> U256 {
    closest_packable(fee, FEE_MANTISSA_MAX, FEE_EXPONENT_MAX)
}

/// Largest packable amount that does not exceed `amount`.
pub fn closest_packable_amount(amount: U256) -> U256 {
    closest_packable(amount, AMOUNT_MANTISSA_MAX, AMOUNT_EXPONENT_MAX)
}

pub fn is_fee_packable(fee: U256) -> bool {
    closest_packable_fee(fee) == fee
}

pub fn is_amount_packable(amount: U256) -> bool {
    closest_packable_amount(amount) == amount
}

fn closest_packable(value: U256, mantissa_max: u64, exponent_max: u32) -> U256 {
    let mantissa_max = U256::from(mantissa_max);
    (0..=exponent_max)
        .map(|exponent| {
            let base = pow10(exponent);
            (value / base).min(mantissa_max) * base
        })
        .max()
        .unwrap_or(U256::ZERO)
}
