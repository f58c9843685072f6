use bitcoin::{OutPoint, ScriptBuf};

use crate::token::TokenId;

/// A spendable plain (non-token) output from the wallet's snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    pub outpoint: OutPoint,
    /// Value in satoshi.
    pub value: u64,
    pub script_pubkey: ScriptBuf,
}

/// A token-bearing output: a plain UTXO plus the token it carries.
///
/// `raw_amount` is the token quantity in raw on-chain units at the token's
/// declared decimal precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlpUtxo {
    pub token_id: TokenId,
    pub raw_amount: u64,
    pub utxo: Utxo,
}
