//! Coin selection and transaction assembly for SLP token SEND transactions
//! on a Bitcoin-Cash-like chain.
//!
//! The crate selects token-bearing and plain UTXOs under integer-only
//! arithmetic, encodes the SEND OP_RETURN payload, and assembles an unsigned
//! transaction skeleton which an injected [`SlpWallet`] signs and commits.
//! Key custody, UTXO bookkeeping, address handling and broadcast all live
//! behind the wallet seam.

pub use bitcoin;

pub mod amount;
pub mod assembly;
pub mod builder;
pub mod error;
pub mod fees;
pub mod node;
pub mod payment;
pub mod script;
pub mod selection;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod token;
pub mod utxo;
pub mod wallet;

// Core types
pub use error::{Error, NodeError, Result};
pub use fees::FeeSchedule;
pub use payment::PaymentSession;
pub use selection::TokenSelection;
pub use token::{SlpToken, TokenId, TokenRegistry};
pub use utxo::{SlpUtxo, Utxo};
pub use wallet::SlpWallet;

// Conversion and fee helpers
pub use amount::to_raw_amount;

// Selection entry points
pub use selection::{select_for_payment, select_for_send, select_token_utxos};

// OP_RETURN encoding
pub use script::{
    LOKAD_ID, QUANTITY_PUSH_BYTES, SEND_ENVELOPE_BYTES, TOKEN_TYPE, payment_op_return,
    send_op_return, send_op_return_prefix,
};

// Assembly and build operations
pub use assembly::assemble_transaction;
pub use builder::{build_payment_transaction, build_send_transaction};
pub use node::SlpNode;
