use bitcoin::ScriptBuf;

/// The consumed surface of a BIP-70-style payment negotiation: the merchant's
/// partially-built SEND script (envelope only, no quantity pushes yet) and
/// the scripts of the destinations it pays.
///
/// Negotiation itself — fetching, validating and acknowledging the payment
/// request — happens outside this crate.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    pub op_return: ScriptBuf,
    pub destinations: Vec<ScriptBuf>,
}
