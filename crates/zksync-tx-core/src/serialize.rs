//! Fixed-width serializers for the scalar fields of a signing payload.
//!
//! Every serializer validates its input and returns an [`EncodeError`]
//! instead of truncating. All integers are big-endian.

use alloy_primitives::U256;

use crate::error::{EncodeError, Result};

/// Width of an account id, token id or nonce.
pub const U32_BYTES: usize = 4;
/// Width of a timestamp.
pub const TIMESTAMP_BYTES: usize = 8;
/// Width of an address or public key hash.
pub const ADDRESS_BYTES: usize = 20;
/// Width of an NFT content hash.
pub const CONTENT_HASH_BYTES: usize = 32;
/// Width of each ratio part.
pub const RATIO_PART_BYTES: usize = 16;
/// Width of an unpacked withdraw amount.
pub const RAW_AMOUNT_BYTES: usize = 16;

/// Strip a `0x`, `0X` or `sync:` prefix from an address or public key hash.
pub fn remove_address_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .or_else(|| address.strip_prefix("sync:"))
        .unwrap_or(address)
}

/// Encode `value` big-endian into exactly `length` bytes.
pub fn int_to_bytes(field: &'static str, value: U256, length: usize) -> Result<Vec<u8>> {
    if value.bit_len() > length * 8 {
        return Err(EncodeError::range(field, value, length));
    }
    let be = value.to_be_bytes::<32>();
    let n = length.min(be.len());
    let mut out = vec![0u8; length];
    out[length - n..].copy_from_slice(&be[be.len() - n..]);
    Ok(out)
}

fn serialize_u32(field: &'static str, value: u64) -> Result<[u8; U32_BYTES]> {
    u32::try_from(value)
        .map(u32::to_be_bytes)
        .map_err(|_| EncodeError::range(field, U256::from(value), U32_BYTES))
}

pub fn serialize_account_id(account_id: u64) -> Result<[u8; U32_BYTES]> {
    serialize_u32("account id", account_id)
}

pub fn serialize_token_id(token_id: u64) -> Result<[u8; U32_BYTES]> {
    serialize_u32("token id", token_id)
}

pub fn serialize_nonce(nonce: u64) -> Result<[u8; U32_BYTES]> {
    serialize_u32("nonce", nonce)
}

pub fn serialize_timestamp(timestamp: u64) -> [u8; TIMESTAMP_BYTES] {
    timestamp.to_be_bytes()
}

/// Decode a 20-byte address or `sync:` public key hash.
pub fn serialize_address(address: &str) -> Result<[u8; ADDRESS_BYTES]> {
    decode_fixed_hex("address", remove_address_prefix(address))
}

/// Decode a 32-byte NFT content hash.
pub fn serialize_content_hash(content_hash: &str) -> Result<[u8; CONTENT_HASH_BYTES]> {
    let hex_str = content_hash.strip_prefix("0x").unwrap_or(content_hash);
    decode_fixed_hex("content hash", hex_str)
}

/// Encode one side of a [`Ratio`](crate::types::Ratio).
pub fn serialize_ratio_part(part: U256) -> Result<[u8; RATIO_PART_BYTES]> {
    let mut out = [0u8; RATIO_PART_BYTES];
    out.copy_from_slice(&int_to_bytes("ratio part", part, RATIO_PART_BYTES)?);
    Ok(out)
}

fn decode_fixed_hex<const N: usize>(field: &'static str, hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).map_err(|e| EncodeError::format(field, e.to_string()))?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        EncodeError::format(field, format!("expected {} bytes, got {}", N, bytes.len()))
    })
}
