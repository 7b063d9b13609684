//! Signature values attached to transactions.
//!
//! The signing algorithms live outside this crate. These types only carry
//! the results and render them for transport.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A layer-2 signature over a transaction's encoded message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxSignature {
    #[serde(rename = "pubKey")]
    pub public_key: String,
    pub signature: String,
}

impl TxSignature {
    pub fn new(public_key: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            signature: signature.into(),
        }
    }

    pub fn to_transport_dict(&self) -> Value {
        json!({
            "pubKey": self.public_key,
            "signature": self.signature,
        })
    }
}

/// Kind of a layer-1 (wallet) signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EthSignatureType {
    #[serde(rename = "EthereumSignature")]
    Ethereum,
    #[serde(rename = "EIP1271Signature")]
    Eip1271,
}

impl EthSignatureType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "EthereumSignature",
            Self::Eip1271 => "EIP1271Signature",
        }
    }
}

impl fmt::Display for EthSignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer-1 wallet signature over a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxEthSignature {
    #[serde(rename = "type")]
    pub sig_type: EthSignatureType,
    pub signature: String,
}

impl TxEthSignature {
    pub fn new(sig_type: EthSignatureType, signature: impl Into<String>) -> Self {
        Self {
            sig_type,
            signature: signature.into(),
        }
    }

    pub fn ethereum(signature: impl Into<String>) -> Self {
        Self::new(EthSignatureType::Ethereum, signature)
    }

    pub fn to_transport_dict(&self) -> Value {
        json!({
            "type": self.sig_type.as_str(),
            "signature": self.signature,
        })
    }
}
