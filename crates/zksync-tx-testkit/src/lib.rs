//! # zkSync Transaction Testkit
//!
//! Testing utilities for zkSync transaction encoding.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known transactions with expected signing payloads
//! - **Generators**: Proptest strategies for packable amounts, addresses and transfers
//! - **Fixtures**: A deterministic ed25519 test signer, a blake3 order hasher
//!   and a sample token registry
//!
//! ## Golden Vectors
//!
//! ```rust
//! use zksync_tx_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{name}: {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use zksync_tx::EncodedTx;
//! use zksync_tx_testkit::generators::{transfer_from_params, TransferParams};
//!
//! proptest! {
//!     #[test]
//!     fn transfer_is_76_bytes(params: TransferParams) {
//!         let payload = transfer_from_params(&params).encoded_message().unwrap();
//!         prop_assert_eq!(payload.len(), 76);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use zksync_tx::{EncodedTx, U256};
//! use zksync_tx_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([1; 32]);
//! let mut transfer = fixture.make_transfer(&fixture.address, "ETH", U256::from(1u64), 0);
//! transfer.sign_with(&fixture.signer).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, sample_tokens, Blake3OrderHasher, Ed25519TestSigner, TestFixture};
pub use generators::{transfer_from_params, TransferParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
