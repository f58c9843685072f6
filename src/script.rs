use bitcoin::opcodes::all::OP_RETURN;
use bitcoin::script::{Builder, Script, ScriptBuf};

use crate::token::TokenId;

/// SLP protocol identifier, the first push of every SLP OP_RETURN.
pub const LOKAD_ID: [u8; 4] = *b"SLP\0";

/// Token type 1 (fungible), pushed as a single byte.
pub const TOKEN_TYPE: [u8; 1] = [1];

const SEND_ACTION: [u8; 4] = *b"SEND";

/// Serialized size of one raw-amount push: length prefix plus 8 big-endian
/// bytes.
pub const QUANTITY_PUSH_BYTES: usize = 9;

/// Serialized size of the SEND envelope before any quantity pushes:
/// OP_RETURN, lokad id, token type, "SEND", 32-byte token id, each
/// length-prefixed.
pub const SEND_ENVELOPE_BYTES: usize = 1 + 5 + 2 + 5 + 33;

/// Shared SEND envelope: everything up to, but not including, the quantity
/// pushes. The payment-negotiation collaborator hands us a script in exactly
/// this form.
pub fn send_op_return_prefix(token_id: &TokenId) -> ScriptBuf {
    Builder::new()
        .push_opcode(OP_RETURN)
        .push_slice(LOKAD_ID)
        .push_slice(TOKEN_TYPE)
        .push_slice(SEND_ACTION)
        .push_slice(*token_id.as_bytes())
        .into_script()
}

/// Build a complete SEND OP_RETURN locally: envelope plus one 8-byte
/// big-endian push per quantity.
///
/// Other network participants parse this script to recognize and value the
/// transfer, so the byte layout here is interoperability-critical; the
/// payment path in [`payment_op_return`] must converge on identical bytes.
pub fn send_op_return(token_id: &TokenId, quantities: &[u64]) -> ScriptBuf {
    let mut script = send_op_return_prefix(token_id);
    for &quantity in quantities {
        script.push_slice(quantity.to_be_bytes());
    }
    script
}

/// Complete a partially-built SEND script from a payment session: append one
/// push per destination amount, then the token-change amount when owed.
/// Destination amounts always precede the change amount.
pub fn payment_op_return(
    partial: &Script,
    raw_amounts: &[u64],
    token_change: Option<u64>,
) -> ScriptBuf {
    let mut script = partial.to_owned();
    for &quantity in raw_amounts {
        script.push_slice(quantity.to_be_bytes());
    }
    if let Some(change) = token_change {
        script.push_slice(change.to_be_bytes());
    }
    script
}
