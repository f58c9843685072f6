use bitcoin::{ScriptBuf, Transaction};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::fees::FeeSchedule;
use crate::payment::PaymentSession;
use crate::script::{payment_op_return, send_op_return};
use crate::selection::{select_for_payment, select_for_send};
use crate::token::{TokenId, TokenRegistry};
use crate::wallet::SlpWallet;

/// Build, sign and commit a single-recipient token send.
///
/// Resolves the token through the registry, runs selection over the wallet's
/// current UTXO snapshots, encodes the SEND OP_RETURN, assembles the
/// skeleton, then hands it to the wallet for signing and commit. Every
/// failure propagates before any wallet side effect: the skeleton is only
/// signed once selection and encoding have both succeeded.
pub fn build_send_transaction<W, R>(
    wallet: &W,
    registry: &R,
    token_id: &TokenId,
    amount: Decimal,
    destination: ScriptBuf,
    schedule: &FeeSchedule,
    aes_key: Option<&[u8]>,
) -> Result<Transaction>
where
    W: SlpWallet + ?Sized,
    R: TokenRegistry + ?Sized,
{
    let token = registry.token_details(token_id)?;
    let selection = select_for_send(
        &token,
        amount,
        &wallet.slp_utxos(),
        &wallet.utxos(),
        schedule,
    )?;

    let op_return = send_op_return(token_id, &selection.quantities);
    let token_change_script = (selection.quantities.len() == 2)
        .then(|| wallet.fresh_slp_change_script());

    let mut tx = crate::assembly::assemble_transaction(
        &selection,
        op_return,
        std::slice::from_ref(&destination),
        token_change_script,
        wallet.fresh_change_script(),
        wallet.min_non_dust(),
        schedule.dust_limit,
    );

    wallet.sign_transaction(&mut tx, aes_key)?;
    wallet.commit_transaction(&tx)?;
    log::info!(
        "sent {amount} of token {token_id} in a {}-input transaction",
        tx.input.len()
    );
    Ok(tx)
}

/// Build, sign and commit a multi-recipient token send driven by a payment
/// session.
///
/// `raw_amounts` carries one already-raw quantity per session destination,
/// in destination order. The session's partial OP_RETURN is completed by
/// appending those amounts and, when owed, the token change.
pub fn build_payment_transaction<W, R>(
    wallet: &W,
    registry: &R,
    token_id: &TokenId,
    raw_amounts: &[u64],
    session: &PaymentSession,
    schedule: &FeeSchedule,
    aes_key: Option<&[u8]>,
) -> Result<Transaction>
where
    W: SlpWallet + ?Sized,
    R: TokenRegistry + ?Sized,
{
    let token = registry.token_details(token_id)?;
    let selection = select_for_payment(
        &token,
        raw_amounts,
        &wallet.slp_utxos(),
        &wallet.utxos(),
        schedule,
    )?;

    let token_change = selection.quantities.get(1).copied();
    let op_return = payment_op_return(&session.op_return, raw_amounts, token_change);
    let token_change_script = token_change.map(|_| wallet.fresh_slp_change_script());

    let mut tx = crate::assembly::assemble_transaction(
        &selection,
        op_return,
        &session.destinations,
        token_change_script,
        wallet.fresh_change_script(),
        wallet.min_non_dust(),
        schedule.dust_limit,
    );

    wallet.sign_transaction(&mut tx, aes_key)?;
    wallet.commit_transaction(&tx)?;
    log::info!(
        "paid {} destinations of token {token_id} in a {}-input transaction",
        session.destinations.len(),
        tx.input.len()
    );
    Ok(tx)
}
