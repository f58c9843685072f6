use rust_decimal::Decimal;

use crate::amount::to_raw_amount;
use crate::error::{Error, Result};
use crate::fees::FeeSchedule;
use crate::token::{SlpToken, TokenId};
use crate::utxo::{SlpUtxo, Utxo};

/// Outcome of UTXO selection for one SEND transaction.
///
/// `quantities[0]` is the raw amount leaving the wallet; `quantities[1]`, if
/// present, is the token change returned to the sender. Consumed immediately
/// by assembly, never persisted.
#[derive(Debug, Clone)]
pub struct TokenSelection {
    pub token_id: TokenId,
    pub quantities: Vec<u64>,
    pub change_satoshi: u64,
    /// Token-bearing inputs first, then plain inputs, each in ascending
    /// value order.
    pub selected_utxos: Vec<Utxo>,
}

/// Interactive single-recipient selection: one decimal amount, one
/// dust-limit output to the recipient.
///
/// Output and quantity counts are fixed assumptions for this path: three
/// outputs besides the OP_RETURN (recipient, possible token change, satoshi
/// change) and two quantities (send amount, possible token change).
pub fn select_for_send(
    token: &SlpToken,
    amount: Decimal,
    slp_utxos: &[SlpUtxo],
    plain_utxos: &[Utxo],
    schedule: &FeeSchedule,
) -> Result<TokenSelection> {
    let target_raw = to_raw_amount(amount, token)?;
    select_token_utxos(
        &token.token_id,
        target_raw,
        schedule.dust_limit,
        3,
        2,
        slp_utxos,
        plain_utxos,
        schedule,
    )
}

/// Multi-recipient selection: one already-raw amount per destination,
/// summed into a single required token total.
pub fn select_for_payment(
    token: &SlpToken,
    raw_amounts: &[u64],
    slp_utxos: &[SlpUtxo],
    plain_utxos: &[Utxo],
    schedule: &FeeSchedule,
) -> Result<TokenSelection> {
    let target_raw = raw_amounts
        .iter()
        .try_fold(0u64, |acc, &q| acc.checked_add(q))
        .ok_or(Error::AmountOverflow)?;
    select_token_utxos(
        &token.token_id,
        target_raw,
        schedule.dust_limit * raw_amounts.len() as u64,
        raw_amounts.len() + 1,
        raw_amounts.len(),
        slp_utxos,
        plain_utxos,
        schedule,
    )
}

/// Two-phase greedy selection shared by both entry points.
///
/// Phase one accumulates token-bearing UTXOs (ascending by raw amount,
/// smallest first to consolidate dust) until the running token total meets
/// `target_raw`; the crossing UTXO is included. Phase two tops up with plain
/// UTXOs (ascending by value) until the running satoshi total strictly
/// exceeds the required spend plus fee.
///
/// Every input contributes `value - per_input` satoshi; inputs worth less
/// than the deduction contribute negatively. `base_satoshi_spend` is the
/// dust-limit spend for the destination outputs; one more dust limit is
/// added when token change is owed.
#[allow(clippy::too_many_arguments)]
pub fn select_token_utxos(
    token_id: &TokenId,
    target_raw: u64,
    base_satoshi_spend: u64,
    num_outputs: usize,
    num_quantities: usize,
    slp_utxos: &[SlpUtxo],
    plain_utxos: &[Utxo],
    schedule: &FeeSchedule,
) -> Result<TokenSelection> {
    let mut send_satoshi = base_satoshi_spend;
    let per_input = schedule.per_input as i64;

    // Stable sort: equal raw amounts keep their snapshot order.
    let mut candidates: Vec<&SlpUtxo> = slp_utxos
        .iter()
        .filter(|u| u.token_id == *token_id)
        .collect();
    candidates.sort_by_key(|u| u.raw_amount);

    let mut input_tokens: u64 = 0;
    let mut input_satoshi: i64 = 0;
    let mut selected: Vec<Utxo> = Vec::new();
    for candidate in candidates {
        if input_tokens >= target_raw {
            break;
        }
        input_tokens = input_tokens
            .checked_add(candidate.raw_amount)
            .ok_or(Error::AmountOverflow)?;
        input_satoshi += candidate.utxo.value as i64 - per_input;
        selected.push(candidate.utxo.clone());
    }

    if input_tokens < target_raw {
        return Err(Error::InsufficientTokenBalance {
            required: target_raw,
            available: input_tokens,
        });
    }
    if input_tokens > target_raw {
        // Token change needs its own dust-limit output.
        send_satoshi += schedule.dust_limit;
    }

    let fee = schedule.required_fee(num_outputs, num_quantities);
    let required = send_satoshi + fee;

    if input_satoshi <= required as i64 {
        let mut plain: Vec<&Utxo> = plain_utxos.iter().collect();
        plain.sort_by_key(|u| u.value);
        for utxo in plain {
            if input_satoshi > required as i64 {
                break;
            }
            input_satoshi += utxo.value as i64 - per_input;
            selected.push(utxo.clone());
        }
    }

    let change_satoshi = input_satoshi - required as i64;
    if change_satoshi < 0 {
        return Err(Error::InsufficientCurrencyBalance {
            required,
            available: input_satoshi,
        });
    }

    let mut quantities = vec![target_raw];
    // Explicit positivity check: callers may hand us exactly-matching totals.
    let change_tokens = input_tokens - target_raw;
    if change_tokens > 0 {
        quantities.push(change_tokens);
    }

    log::debug!(
        "selected {} inputs for token {token_id}: raw {input_tokens} against target \
         {target_raw}, change {change_satoshi} sat after {fee} sat fee",
        selected.len(),
    );

    Ok(TokenSelection {
        token_id: *token_id,
        quantities,
        change_satoshi: change_satoshi as u64,
        selected_utxos: selected,
    })
}
