use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{Amount, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness};

use crate::selection::TokenSelection;

/// Assemble the unsigned transaction skeleton from a selection result.
///
/// Output order is fixed by the SLP convention: the OP_RETURN first (raw
/// amounts are matched positionally to the outputs that follow it), then one
/// output per destination, then token change, then satoshi change. Inputs
/// are the selected UTXOs in selection order with empty script_sigs; signing
/// belongs to the wallet.
///
/// Satoshi change below `dust_limit` is forfeited to fee rather than
/// emitted as an unrelayable output.
pub fn assemble_transaction(
    selection: &TokenSelection,
    op_return: ScriptBuf,
    destinations: &[ScriptBuf],
    token_change_script: Option<ScriptBuf>,
    change_script: ScriptBuf,
    min_non_dust: u64,
    dust_limit: u64,
) -> Transaction {
    let mut output = Vec::with_capacity(destinations.len() + 3);
    output.push(TxOut {
        value: Amount::ZERO,
        script_pubkey: op_return,
    });
    for destination in destinations {
        output.push(TxOut {
            value: Amount::from_sat(min_non_dust),
            script_pubkey: destination.clone(),
        });
    }
    if let Some(script_pubkey) = token_change_script {
        output.push(TxOut {
            value: Amount::from_sat(min_non_dust),
            script_pubkey,
        });
    }
    if selection.change_satoshi >= dust_limit {
        output.push(TxOut {
            value: Amount::from_sat(selection.change_satoshi),
            script_pubkey: change_script,
        });
    }

    let input = selection
        .selected_utxos
        .iter()
        .map(|utxo| TxIn {
            previous_output: utxo.outpoint,
            script_sig: ScriptBuf::new(),
            sequence: Sequence::MAX,
            witness: Witness::default(),
        })
        .collect();

    Transaction {
        version: Version::ONE,
        lock_time: LockTime::ZERO,
        input,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::send_op_return;
    use crate::testing::{outpoint, script, test_token};
    use crate::utxo::Utxo;

    fn selection(quantities: Vec<u64>, change_satoshi: u64) -> TokenSelection {
        TokenSelection {
            token_id: test_token(0).token_id,
            quantities,
            change_satoshi,
            selected_utxos: vec![
                Utxo {
                    outpoint: outpoint(0),
                    value: 2000,
                    script_pubkey: script(9),
                },
                Utxo {
                    outpoint: outpoint(1),
                    value: 3000,
                    script_pubkey: script(9),
                },
            ],
        }
    }

    #[test]
    fn orders_outputs_op_return_first_then_changes_last() {
        let sel = selection(vec![100, 20], 1000);
        let op_return = send_op_return(&sel.token_id, &sel.quantities);
        let tx = assemble_transaction(
            &sel,
            op_return.clone(),
            &[script(1)],
            Some(script(2)),
            script(3),
            546,
            546,
        );

        assert_eq!(tx.output.len(), 4);
        assert_eq!(tx.output[0].value, Amount::ZERO);
        assert_eq!(tx.output[0].script_pubkey, op_return);
        assert_eq!(tx.output[1].script_pubkey, script(1));
        assert_eq!(tx.output[1].value, Amount::from_sat(546));
        assert_eq!(tx.output[2].script_pubkey, script(2));
        assert_eq!(tx.output[3].script_pubkey, script(3));
        assert_eq!(tx.output[3].value, Amount::from_sat(1000));
    }

    #[test]
    fn inputs_preserve_selection_order_and_stay_unsigned() {
        let sel = selection(vec![100], 1000);
        let tx = assemble_transaction(
            &sel,
            send_op_return(&sel.token_id, &sel.quantities),
            &[script(1)],
            None,
            script(3),
            546,
            546,
        );
        assert_eq!(tx.input.len(), 2);
        assert_eq!(tx.input[0].previous_output, outpoint(0));
        assert_eq!(tx.input[1].previous_output, outpoint(1));
        assert!(tx.input.iter().all(|i| i.script_sig.is_empty()));
    }

    #[test]
    fn change_at_dust_limit_is_kept() {
        let sel = selection(vec![100], 546);
        let tx = assemble_transaction(
            &sel,
            send_op_return(&sel.token_id, &sel.quantities),
            &[script(1)],
            None,
            script(3),
            546,
            546,
        );
        assert_eq!(tx.output.len(), 3);
        assert_eq!(tx.output[2].value, Amount::from_sat(546));
    }

    #[test]
    fn change_below_dust_limit_is_forfeited() {
        let sel = selection(vec![100], 545);
        let tx = assemble_transaction(
            &sel,
            send_op_return(&sel.token_id, &sel.quantities),
            &[script(1)],
            None,
            script(3),
            546,
            546,
        );
        assert_eq!(tx.output.len(), 2);
    }

    #[test]
    fn multi_destination_output_count() {
        let sel = selection(vec![200, 100], 2000);
        let destinations = [script(1), script(4), script(5)];
        let tx = assemble_transaction(
            &sel,
            send_op_return(&sel.token_id, &sel.quantities),
            &destinations,
            Some(script(2)),
            script(3),
            546,
            546,
        );
        // OP_RETURN + 3 destinations + token change + satoshi change.
        assert_eq!(tx.output.len(), 6);
    }
}
