use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// SLP token identifier — the txid of the token's genesis transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId([u8; 32]);

impl TokenId {
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a token id from its 64-character hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidTokenId(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| Error::InvalidTokenId(format!("expected 32 bytes, got {}", v.len())))?;
        Ok(Self(bytes))
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Token descriptor as published by the token registry.
///
/// `decimals` is the declared decimal precision (0–18); one raw on-chain unit
/// represents `10^-decimals` display units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlpToken {
    pub token_id: TokenId,
    pub ticker: String,
    pub decimals: u8,
}

/// Token-registry capability: resolve a token id to its descriptor.
///
/// Implementations are expected to be read-only lookups; a missing entry is
/// [`Error::UnknownToken`].
pub trait TokenRegistry {
    fn token_details(&self, token_id: &TokenId) -> Result<SlpToken>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_ID: &str = "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf";

    #[test]
    fn token_id_hex_round_trip() {
        let id = TokenId::from_hex(HEX_ID).unwrap();
        assert_eq!(id.to_hex(), HEX_ID);
        assert_eq!(id.to_string(), HEX_ID);
    }

    #[test]
    fn token_id_rejects_bad_hex() {
        assert!(TokenId::from_hex("not hex").is_err());
        // Right charset, wrong length.
        assert!(TokenId::from_hex("deadbeef").is_err());
    }
}
