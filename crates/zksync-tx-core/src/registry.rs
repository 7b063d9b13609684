//! In-memory token registry.
//!
//! A registry is an immutable snapshot of the operator's token list. The
//! lookup indices are built on the first query and shared afterwards, so a
//! snapshot can be read from many threads.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};
use crate::token::{Token, TokenLike};

/// An ordered list of tokens with lookups by address, id and symbol.
///
/// When a key repeats, the first token in list order wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tokens {
    tokens: Vec<Token>,
    #[serde(skip)]
    index: OnceLock<TokenIndex>,
}

#[derive(Debug, Clone, Default)]
struct TokenIndex {
    by_address: HashMap<String, usize>,
    by_id: HashMap<u64, usize>,
    by_symbol: HashMap<String, usize>,
}

/// Accepted shapes of a registry snapshot.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    List(Vec<Token>),
    Wrapped { tokens: Vec<Token> },
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: OnceLock::new(),
        }
    }

    /// Load a snapshot from JSON: either a bare array of tokens or an
    /// object with a `tokens` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(|e| EncodeError::Registry(e.to_string()))?;
        let tokens = match snapshot {
            Snapshot::List(tokens) | Snapshot::Wrapped { tokens } => tokens,
        };
        Ok(Self::new(tokens))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn find_by_address(&self, address: &str) -> Option<&Token> {
        self.index().by_address.get(address).map(|&i| &self.tokens[i])
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Token> {
        self.index().by_id.get(&id).map(|&i| &self.tokens[i])
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Token> {
        self.index().by_symbol.get(symbol).map(|&i| &self.tokens[i])
    }

    /// Resolve a token reference.
    ///
    /// Ids are looked up by id; strings are tried as an address first and
    /// then as a symbol. A miss returns `None`.
    pub fn find(&self, token: impl Into<TokenLike>) -> Option<&Token> {
        match token.into() {
            TokenLike::Id(id) => self.find_by_id(id),
            TokenLike::Str(s) => self.find_by_address(&s).or_else(|| self.find_by_symbol(&s)),
        }
    }

    fn index(&self) -> &TokenIndex {
        self.index.get_or_init(|| {
            let mut index = TokenIndex::default();
            for (i, token) in self.tokens.iter().enumerate() {
                insert_first(&mut index.by_address, token.address.clone(), i, "address");
                insert_first(&mut index.by_id, token.id, i, "id");
                insert_first(&mut index.by_symbol, token.symbol.clone(), i, "symbol");
            }
            index
        })
    }
}

fn insert_first<K: Hash + Eq>(map: &mut HashMap<K, usize>, key: K, position: usize, kind: &str) {
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(position);
        }
        Entry::Occupied(existing) => {
            tracing::warn!(
                kind,
                first = *existing.get(),
                duplicate = position,
                "duplicate token key in registry, keeping first"
            );
        }
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_ADDRESS: &str = "0xeb8f08a975ab53e34d8a0330e0d34de942c95926";

    fn registry() -> Tokens {
        Tokens::new(vec![
            Token::eth(),
            Token::new(2, USDC_ADDRESS, "USDC", 6),
            Token::new(3, "0x1111111111111111111111111111111111111111", "DAI", 18),
        ])
    }

    #[test]
    fn test_find_by_each_index() {
        let tokens = registry();
        assert_eq!(tokens.find_by_id(2).unwrap().symbol, "USDC");
        assert_eq!(tokens.find_by_address(USDC_ADDRESS).unwrap().id, 2);
        assert_eq!(tokens.find_by_symbol("DAI").unwrap().id, 3);
        assert!(tokens.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_token_like() {
        let tokens = registry();
        assert_eq!(tokens.find(0u64).unwrap().symbol, "ETH");
        assert_eq!(tokens.find(3u32).unwrap().symbol, "DAI");
        assert_eq!(tokens.find(USDC_ADDRESS).unwrap().symbol, "USDC");
        assert_eq!(tokens.find("USDC").unwrap().id, 2);
        assert!(tokens.find("WBTC").is_none());
    }

    #[test]
    fn test_address_is_tried_before_symbol() {
        // A symbol that collides with another token's address resolves to the address owner.
        let tokens = Tokens::new(vec![
            Token::new(1, "AAA", "XYZ", 0),
            Token::new(2, "0x2222222222222222222222222222222222222222", "AAA", 0),
        ]);
        assert_eq!(tokens.find("AAA").unwrap().id, 1);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let tokens = Tokens::new(vec![
            Token::new(5, "0x01", "DUP", 6),
            Token::new(5, "0x02", "DUP", 8),
        ]);
        assert_eq!(tokens.find_by_id(5).unwrap().address, "0x01");
        assert_eq!(tokens.find_by_symbol("DUP").unwrap().decimals, 6);
        assert_eq!(tokens.find_by_address("0x02").unwrap().decimals, 8);
    }

    #[test]
    fn test_from_json_shapes() {
        let list = r#"[{"address":"0x0000000000000000000000000000000000000000","id":0,"symbol":"ETH","decimals":18}]"#;
        let tokens = Tokens::from_json(list).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens.find("ETH").unwrap().is_eth());

        let wrapped = r#"{"tokens":[{"address":"0x01","id":4,"symbol":"LINK","decimals":18}]}"#;
        let tokens = Tokens::from_json(wrapped).unwrap();
        assert_eq!(tokens.find(4u64).unwrap().symbol, "LINK");

        assert!(matches!(Tokens::from_json("{"), Err(EncodeError::Registry(_))));
    }

    #[test]
    fn test_empty_registry() {
        let tokens = Tokens::default();
        assert!(tokens.is_empty());
        assert!(tokens.find("ETH").is_none());
    }
}
