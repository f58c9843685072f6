use serde::{Deserialize, Serialize};

/// Fee and dust policy used by UTXO selection.
///
/// These are empirical network-policy figures, not protocol constants, so
/// they live in an overridable struct; [`FeeSchedule::default`] carries the
/// BCH mainnet values. All figures are satoshi-equivalent cost units at a
/// 1 sat/byte fee rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Approximate serialized cost of one output.
    pub per_output: u64,
    /// Deducted from each input's contributed value to cover the input's own
    /// spend cost.
    pub per_input: u64,
    /// Base size budgeted for the SEND OP_RETURN envelope.
    pub op_return_base: u64,
    /// Size budgeted per raw-amount push in the OP_RETURN.
    pub per_quantity: u64,
    /// Flat margin: transactions priced exactly at the minimum relay rate
    /// propagate unreliably.
    pub propagation_extra: u64,
    /// Minimum output value the network relays.
    pub dust_limit: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            per_output: 34,
            per_input: 148,
            op_return_base: 55,
            per_quantity: 9,
            propagation_extra: 50,
            dust_limit: 546,
        }
    }
}

impl FeeSchedule {
    /// Fee attributable to `num_outputs` outputs.
    pub fn output_fee(&self, num_outputs: usize) -> u64 {
        num_outputs as u64 * self.per_output
    }

    /// Budgeted size of a SEND OP_RETURN carrying `num_quantities` amounts.
    pub fn op_return_size(&self, num_quantities: usize) -> u64 {
        self.op_return_base + num_quantities as u64 * self.per_quantity
    }

    /// Total fee required for a transaction with the given output and
    /// quantity counts.
    pub fn required_fee(&self, num_outputs: usize, num_quantities: usize) -> u64 {
        self.output_fee(num_outputs) + self.op_return_size(num_quantities) + self.propagation_extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_defaults() {
        let s = FeeSchedule::default();
        assert_eq!(s.output_fee(3), 102);
        assert_eq!(s.op_return_size(2), 73);
        // 3 outputs, 2 quantities: 102 + 73 + 50.
        assert_eq!(s.required_fee(3, 2), 225);
    }

    #[test]
    fn overridden_schedule_is_honored() {
        let s = FeeSchedule {
            propagation_extra: 0,
            ..FeeSchedule::default()
        };
        assert_eq!(s.required_fee(3, 2), 175);
    }
}
