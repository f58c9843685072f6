use bitcoin::{ScriptBuf, Transaction};

use crate::error::Result;
use crate::utxo::{SlpUtxo, Utxo};

/// Wallet capability consumed by the build operations.
///
/// The UTXO accessors return point-in-time snapshots; this crate never
/// mutates wallet state and performs no reservation. If concurrent build
/// calls may select overlapping UTXOs, the wallet must serialize reservation
/// around them — double-spend protection is its problem, not ours.
pub trait SlpWallet {
    /// Current token-bearing UTXO set, across all tokens.
    fn slp_utxos(&self) -> Vec<SlpUtxo>;

    /// Current plain (non-token) UTXO set.
    fn utxos(&self) -> Vec<Utxo>;

    /// Fresh script for receiving token change.
    fn fresh_slp_change_script(&self) -> ScriptBuf;

    /// Fresh script for receiving satoshi change.
    fn fresh_change_script(&self) -> ScriptBuf;

    /// The network's minimum relayable output value.
    fn min_non_dust(&self) -> u64;

    /// Sign the assembled transaction in place. `aes_key` unlocks an
    /// encrypted keystore when the wallet has one.
    fn sign_transaction(&self, tx: &mut Transaction, aes_key: Option<&[u8]>) -> Result<()>;

    /// Record the signed transaction as pending in the wallet.
    fn commit_transaction(&self, tx: &Transaction) -> Result<()>;
}
