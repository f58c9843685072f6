//! Shared fixtures for exercising the build pipeline without a live wallet
//! or token registry.

use std::sync::atomic::{AtomicUsize, Ordering};

use bitcoin::hashes::Hash;
use bitcoin::{OutPoint, ScriptBuf, Transaction, Txid};

use crate::error::{Error, Result};
use crate::payment::PaymentSession;
use crate::script::send_op_return_prefix;
use crate::token::{SlpToken, TokenId, TokenRegistry};
use crate::utxo::{SlpUtxo, Utxo};
use crate::wallet::SlpWallet;

/// Script tag handed out by [`FixtureWallet::fresh_slp_change_script`].
pub const SLP_CHANGE_TAG: u8 = 0xAA;
/// Script tag handed out by [`FixtureWallet::fresh_change_script`].
pub const CHANGE_TAG: u8 = 0xBB;

pub fn outpoint(vout: u32) -> OutPoint {
    OutPoint {
        txid: Txid::all_zeros(),
        vout,
    }
}

/// A recognizable stand-in script pubkey; `tag` keeps fixtures tellable
/// apart in assertions.
pub fn script(tag: u8) -> ScriptBuf {
    ScriptBuf::from_bytes(vec![0x76, 0xa9, tag])
}

pub fn test_token(decimals: u8) -> SlpToken {
    SlpToken {
        token_id: TokenId::from_bytes([0x42; 32]),
        ticker: "FIX".into(),
        decimals,
    }
}

pub fn plain_utxo(value: u64, vout: u32) -> Utxo {
    Utxo {
        outpoint: outpoint(vout),
        value,
        script_pubkey: script(0),
    }
}

pub fn slp_utxo(token_id: &TokenId, raw_amount: u64, value: u64, vout: u32) -> SlpUtxo {
    SlpUtxo {
        token_id: *token_id,
        raw_amount,
        utxo: Utxo {
            outpoint: outpoint(vout),
            value,
            script_pubkey: script(0),
        },
    }
}

/// A partial SEND script plus destinations, as the payment collaborator
/// would deliver them.
pub fn payment_session(token_id: &TokenId, num_destinations: u8) -> PaymentSession {
    PaymentSession {
        op_return: send_op_return_prefix(token_id),
        destinations: (1..=num_destinations).map(script).collect(),
    }
}

/// In-memory wallet over fixed UTXO snapshots. Records sign/commit calls so
/// tests can assert that failures leave no side effects.
pub struct FixtureWallet {
    pub slp: Vec<SlpUtxo>,
    pub plain: Vec<Utxo>,
    pub min_non_dust: u64,
    pub fail_signing: bool,
    pub signs: AtomicUsize,
    pub commits: AtomicUsize,
}

impl FixtureWallet {
    pub fn new(slp: Vec<SlpUtxo>, plain: Vec<Utxo>) -> Self {
        Self {
            slp,
            plain,
            min_non_dust: 546,
            fail_signing: false,
            signs: AtomicUsize::new(0),
            commits: AtomicUsize::new(0),
        }
    }

    pub fn with_failing_signer(mut self) -> Self {
        self.fail_signing = true;
        self
    }
}

impl SlpWallet for FixtureWallet {
    fn slp_utxos(&self) -> Vec<SlpUtxo> {
        self.slp.clone()
    }

    fn utxos(&self) -> Vec<Utxo> {
        self.plain.clone()
    }

    fn fresh_slp_change_script(&self) -> ScriptBuf {
        script(SLP_CHANGE_TAG)
    }

    fn fresh_change_script(&self) -> ScriptBuf {
        script(CHANGE_TAG)
    }

    fn min_non_dust(&self) -> u64 {
        self.min_non_dust
    }

    fn sign_transaction(&self, _tx: &mut Transaction, _aes_key: Option<&[u8]>) -> Result<()> {
        if self.fail_signing {
            return Err(Error::Signer("fixture signer unavailable".into()));
        }
        self.signs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn commit_transaction(&self, _tx: &Transaction) -> Result<()> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fixed token registry backed by a list of descriptors.
pub struct FixtureRegistry {
    pub tokens: Vec<SlpToken>,
}

impl FixtureRegistry {
    pub fn single(token: SlpToken) -> Self {
        Self {
            tokens: vec![token],
        }
    }
}

impl TokenRegistry for FixtureRegistry {
    fn token_details(&self, token_id: &TokenId) -> Result<SlpToken> {
        self.tokens
            .iter()
            .find(|t| t.token_id == *token_id)
            .cloned()
            .ok_or_else(|| Error::UnknownToken(token_id.to_hex()))
    }
}
