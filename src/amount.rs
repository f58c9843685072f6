use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};
use crate::token::SlpToken;

/// Convert a display-precision decimal amount into the token's raw on-chain
/// `u64` representation.
///
/// Checks, in order:
/// 1. The decimal amount itself must not exceed `u64::MAX`
///    ([`Error::AmountTooLarge`]).
/// 2. Zero-decimal tokens truncate any fractional part silently — no
///    precision error is raised for them.
/// 3. Otherwise the amount may not carry more fractional digits than the
///    token declares ([`Error::PrecisionExceeded`]).
///
/// The amount is then scaled by `10^decimals` and truncated. A scaled value
/// that no longer fits an unsigned 64-bit integer (including any negative
/// input) is [`Error::AmountTooLarge`].
pub fn to_raw_amount(amount: Decimal, token: &SlpToken) -> Result<u64> {
    let max_raw = Decimal::from(u64::MAX);

    let amount = if amount > max_raw {
        return Err(Error::AmountTooLarge);
    } else if token.decimals == 0 {
        amount.trunc()
    } else if amount.scale() > u32::from(token.decimals) {
        return Err(Error::PrecisionExceeded {
            ticker: token.ticker.clone(),
            decimals: token.decimals,
            amount,
        });
    } else {
        amount
    };

    let factor = Decimal::from(10u64.pow(u32::from(token.decimals)));
    amount
        .checked_mul(factor)
        .and_then(|scaled| scaled.trunc().to_u64())
        .ok_or(Error::AmountTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenId;

    fn token(decimals: u8) -> SlpToken {
        SlpToken {
            token_id: TokenId::from_bytes([0xab; 32]),
            ticker: "TEST".into(),
            decimals,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn scales_by_declared_decimals() {
        assert_eq!(to_raw_amount(dec("1.5"), &token(8)).unwrap(), 150_000_000);
        assert_eq!(to_raw_amount(dec("0.00000001"), &token(8)).unwrap(), 1);
        assert_eq!(to_raw_amount(dec("42"), &token(0)).unwrap(), 42);
    }

    #[test]
    fn round_trips_when_precision_fits() {
        let t = token(8);
        let raw = to_raw_amount(dec("123.45678901"), &t).unwrap();
        assert_eq!(raw, 12_345_678_901);
        let back = Decimal::from(raw) / Decimal::from(10u64.pow(8));
        assert_eq!(back, dec("123.45678901"));
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        // Nine fractional digits on an eight-decimal token.
        let err = to_raw_amount(dec("1.123456789"), &token(8)).unwrap_err();
        assert!(matches!(err, Error::PrecisionExceeded { decimals: 8, .. }));
    }

    #[test]
    fn zero_decimal_tokens_truncate_silently() {
        assert_eq!(to_raw_amount(dec("1.9"), &token(0)).unwrap(), 1);
    }

    #[test]
    fn rejects_amount_above_u64() {
        let over = Decimal::from(u64::MAX) + Decimal::ONE;
        assert!(matches!(
            to_raw_amount(over, &token(0)),
            Err(Error::AmountTooLarge)
        ));
    }

    #[test]
    fn rejects_scaled_overflow() {
        // Fits u64 unscaled, overflows once scaled by 10^8.
        let amount = Decimal::from(u64::MAX / 10);
        assert!(matches!(
            to_raw_amount(amount, &token(8)),
            Err(Error::AmountTooLarge)
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            to_raw_amount(dec("-1.5"), &token(8)),
            Err(Error::AmountTooLarge)
        ));
    }

    #[test]
    fn accepts_u64_max_for_zero_decimals() {
        assert_eq!(
            to_raw_amount(Decimal::from(u64::MAX), &token(0)).unwrap(),
            u64::MAX
        );
    }
}
