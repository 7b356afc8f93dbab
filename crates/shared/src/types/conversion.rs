//! Minor-units conversion and rounding policy.
//!
//! CRITICAL: Rounding strategy for display amounts:
//! - Always round to the currency's minor-units exponent
//! - Use banker's rounding (round half to even)
//! - Never round implicitly; `to_minor_units` truncates whatever is already there

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Returns `10^exponent` as a decimal.
///
/// # Panics
///
/// Panics if `exponent` exceeds 28.
#[must_use]
pub fn minor_units_coefficient(exponent: u8) -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(u32::from(exponent)), 0)
}

/// Scales an exact amount into an integral count of minor units.
///
/// Digits below the minor unit are truncated toward zero; no rounding step
/// is applied.
///
/// ```
/// use rust_decimal_macros::dec;
/// use coinage_shared::types::conversion::to_minor_units;
///
/// assert_eq!(to_minor_units(dec!(10.01), 2).unwrap(), 1001);
/// assert_eq!(to_minor_units(dec!(10.019), 2).unwrap(), 1001);
/// assert_eq!(to_minor_units(dec!(-10.019), 2).unwrap(), -1001);
/// ```
///
/// # Errors
///
/// Returns [`MoneyError::MinorUnitsOverflow`] if the scaled amount does not
/// fit in an `i64`.
pub fn to_minor_units(amount: Decimal, exponent: u8) -> MoneyResult<i64> {
    amount
        .checked_mul(minor_units_coefficient(exponent))
        .and_then(|scaled| scaled.trunc().to_i64())
        .ok_or(MoneyError::MinorUnitsOverflow { amount, exponent })
}

/// Converts a minor-units count back into an exact amount. Lossless.
///
/// # Panics
///
/// Panics if `exponent` exceeds 28.
#[must_use]
pub fn from_minor_units(units: i64, exponent: u8) -> Decimal {
    Decimal::new(units, u32::from(exponent))
}

/// Rounds an amount to `exponent` fractional digits using banker's rounding.
///
/// Uses `RoundingStrategy::MidpointNearestEven`, which:
/// - Rounds 2.5 → 2 (to nearest even)
/// - Rounds 3.5 → 4 (to nearest even)
/// - Rounds 2.25 → 2.2 (to nearest even at 1 decimal)
#[must_use]
pub fn round_to_exponent(amount: Decimal, exponent: u8) -> Decimal {
    amount.round_dp_with_strategy(u32::from(exponent), RoundingStrategy::MidpointNearestEven)
}

/// Rounds with banker's rounding, then scales into minor units.
///
/// This is the single rounding boundary used when a computed share becomes
/// a concrete amount of money.
pub fn round_and_scale(amount: Decimal, exponent: u8) -> MoneyResult<i64> {
    to_minor_units(round_to_exponent(amount, exponent), exponent)
}

/// Negates a raw minor-units count.
///
/// `i64::MIN` has no positive counterpart and clamps to `i64::MAX`.
#[must_use]
pub const fn negate_minor_units(units: i64) -> i64 {
    match units.checked_neg() {
        Some(negated) => negated,
        None => i64::MAX,
    }
}
