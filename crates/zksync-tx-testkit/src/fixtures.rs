//! Test fixtures and helpers.
//!
//! Deterministic stand-ins for the signing and order-hashing capabilities,
//! plus a small token registry to build transactions against.

use std::sync::Arc;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use zksync_tx::{
    OrderHasher, Order, Ratio, SignerError, Swap, TimeRange, Token, Tokens, Transfer, TxSigner,
    TxSignature, U256,
};

/// Signs messages with an ed25519 key.
///
/// Not the network's signature scheme; only used to exercise signing flows
/// with real, verifiable signatures.
pub struct Ed25519TestSigner {
    key: SigningKey,
}

impl Ed25519TestSigner {
    /// Create a signer with a random key.
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create a signer with a deterministic key from seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(seed),
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    /// Check a signature produced by this signer.
    pub fn verify(&self, message: &[u8], signature: &TxSignature) -> bool {
        let Ok(bytes) = hex::decode(&signature.signature) else {
            return false;
        };
        let Ok(signature) = ed25519_dalek::Signature::from_slice(&bytes) else {
            return false;
        };
        self.verifying_key().verify_strict(message, &signature).is_ok()
    }
}

impl TxSigner for Ed25519TestSigner {
    fn sign(&self, message: &[u8]) -> Result<TxSignature, SignerError> {
        let signature = self.key.sign(message);
        Ok(TxSignature::new(
            hex::encode(self.verifying_key().as_bytes()),
            hex::encode(signature.to_bytes()),
        ))
    }
}

/// Hashes order encodings with blake3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3OrderHasher;

impl OrderHasher for Blake3OrderHasher {
    fn hash_orders(&self, orders: &[u8]) -> Result<[u8; 32], SignerError> {
        Ok(*blake3::hash(orders).as_bytes())
    }
}

/// The tokens every fixture registry contains.
pub fn sample_tokens() -> Vec<Token> {
    vec![
        Token::eth(),
        Token::new(1, "0x3b00ef435fa4fcff5c209a37d1f3dcff37c705ad", "USDT", 6),
        Token::new(2, "0xeb8f08a975ab53e34d8a0330e0d34de942c95926", "USDC", 6),
        Token::new(3, "0x2655f7a4c1e5c3d0e1b2c8a8f1d29eff1d1b3d83", "DAI", 18),
    ]
}

/// A test fixture with a signer, an order hasher and a token registry.
pub struct TestFixture {
    pub signer: Ed25519TestSigner,
    pub hasher: Arc<dyn OrderHasher>,
    pub tokens: Tokens,
    pub account_id: u64,
    pub address: String,
}

impl TestFixture {
    /// Create a new test fixture with a random key.
    pub fn new() -> Self {
        Self::with_signer(Ed25519TestSigner::generate(), 1)
    }

    /// Create with a deterministic key from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_signer(Ed25519TestSigner::from_seed(&seed), u64::from(seed[0]) + 1)
    }

    fn with_signer(signer: Ed25519TestSigner, account_id: u64) -> Self {
        // Account address: last 20 bytes of the key's blake3 hash.
        let digest = blake3::hash(signer.verifying_key().as_bytes());
        let address = format!("0x{}", hex::encode(&digest.as_bytes()[12..]));
        Self {
            signer,
            hasher: Arc::new(Blake3OrderHasher),
            tokens: Tokens::new(sample_tokens()),
            account_id,
            address,
        }
    }

    /// Look up a sample token by symbol.
    ///
    /// Panics if the symbol is not one of [`sample_tokens`].
    pub fn token(&self, symbol: &str) -> Token {
        self.tokens
            .find_by_symbol(symbol)
            .cloned()
            .unwrap_or_else(|| panic!("fixture has no token {symbol}"))
    }

    /// An unsigned transfer from this fixture's account.
    pub fn make_transfer(&self, to: &str, symbol: &str, amount: U256, nonce: u64) -> Transfer {
        Transfer {
            account_id: self.account_id,
            from: self.address.clone(),
            to: to.to_string(),
            token: self.token(symbol),
            amount,
            fee: U256::ZERO,
            nonce,
            time_range: TimeRange::default(),
            signature: None,
        }
    }

    /// An unsigned limit order selling `sell` for `buy` at 1:1.
    pub fn make_order(&self, sell: &str, buy: &str, nonce: u64) -> Order {
        Order {
            account_id: self.account_id,
            recipient: self.address.clone(),
            nonce,
            token_sell: self.token(sell),
            token_buy: self.token(buy),
            amount: U256::ZERO,
            ratio: Ratio::from_parts(1, 1),
            time_range: TimeRange::default(),
            signature: None,
            eth_signature: None,
        }
    }

    /// An unsigned swap of two orders, submitted by this fixture.
    pub fn make_swap(&self, orders: [Order; 2], amounts: [U256; 2], nonce: u64) -> Swap {
        Swap {
            submitter_id: self.account_id,
            submitter_address: self.address.clone(),
            amounts,
            orders,
            fee_token: Token::eth(),
            fee: U256::ZERO,
            nonce,
            signature: None,
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}
