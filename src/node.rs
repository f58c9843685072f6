//! `SlpNode` — async dispatch over the synchronous build core.
//!
//! The core has no suspension points; each build call is one blocking
//! computation over a wallet snapshot. This coordinator owns the wallet and
//! registry behind `Arc` and dispatches builds via
//! `tokio::task::spawn_blocking` so async callers get a single eventual
//! transaction or failure.

use std::sync::Arc;

use bitcoin::{ScriptBuf, Transaction};
use rust_decimal::Decimal;

use crate::builder::{build_payment_transaction, build_send_transaction};
use crate::error::NodeError;
use crate::fees::FeeSchedule;
use crate::payment::PaymentSession;
use crate::token::{TokenId, TokenRegistry};
use crate::wallet::SlpWallet;

pub struct SlpNode<W, R> {
    wallet: Arc<W>,
    registry: Arc<R>,
    schedule: FeeSchedule,
}

impl<W, R> SlpNode<W, R>
where
    W: SlpWallet + Send + Sync + 'static,
    R: TokenRegistry + Send + Sync + 'static,
{
    pub fn new(wallet: Arc<W>, registry: Arc<R>) -> Self {
        Self::with_schedule(wallet, registry, FeeSchedule::default())
    }

    pub fn with_schedule(wallet: Arc<W>, registry: Arc<R>, schedule: FeeSchedule) -> Self {
        Self {
            wallet,
            registry,
            schedule,
        }
    }

    /// Dispatch a single-recipient send off the async runtime.
    ///
    /// Selection failures are terminal for the call; retrying with updated
    /// inputs is the caller's decision.
    pub async fn send_token(
        &self,
        token_id: TokenId,
        amount: Decimal,
        destination: ScriptBuf,
        aes_key: Option<Vec<u8>>,
    ) -> Result<Transaction, NodeError> {
        let wallet = Arc::clone(&self.wallet);
        let registry = Arc::clone(&self.registry);
        let schedule = self.schedule;
        tokio::task::spawn_blocking(move || {
            build_send_transaction(
                &*wallet,
                &*registry,
                &token_id,
                amount,
                destination,
                &schedule,
                aes_key.as_deref(),
            )
        })
        .await
        .map_err(|e| NodeError::Task(e.to_string()))?
        .map_err(NodeError::Build)
    }

    /// Dispatch a multi-recipient payment-session send off the async runtime.
    pub async fn pay_session(
        &self,
        token_id: TokenId,
        raw_amounts: Vec<u64>,
        session: PaymentSession,
        aes_key: Option<Vec<u8>>,
    ) -> Result<Transaction, NodeError> {
        let wallet = Arc::clone(&self.wallet);
        let registry = Arc::clone(&self.registry);
        let schedule = self.schedule;
        tokio::task::spawn_blocking(move || {
            build_payment_transaction(
                &*wallet,
                &*registry,
                &token_id,
                &raw_amounts,
                &session,
                &schedule,
                aes_key.as_deref(),
            )
        })
        .await
        .map_err(|e| NodeError::Task(e.to_string()))?
        .map_err(NodeError::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{FixtureRegistry, FixtureWallet, plain_utxo, script, slp_utxo, test_token};

    #[tokio::test]
    async fn dispatched_send_resolves_to_a_transaction() {
        let token = test_token(8);
        let wallet = Arc::new(FixtureWallet::new(
            vec![slp_utxo(&token.token_id, 200_000_000, 10_000, 0)],
            vec![plain_utxo(5_000, 1)],
        ));
        let registry = Arc::new(FixtureRegistry::single(token.clone()));
        let node = SlpNode::new(wallet, registry);

        let tx = node
            .send_token(token.token_id, "1.5".parse().unwrap(), script(1), None)
            .await
            .unwrap();
        assert_eq!(tx.output.len(), 4);
    }

    #[tokio::test]
    async fn dispatched_failure_resolves_to_the_build_error() {
        let token = test_token(8);
        let wallet = Arc::new(FixtureWallet::new(vec![], vec![]));
        let registry = Arc::new(FixtureRegistry::single(token.clone()));
        let node = SlpNode::new(wallet, registry);

        let err = node
            .send_token(token.token_id, "1.5".parse().unwrap(), script(1), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NodeError::Build(Error::InsufficientTokenBalance { .. })
        ));
    }
}
