//! Value-conserving allocation of monetary values.
//!
//! Both strategies work on minor units, so every part is an exact multiple
//! of the currency's smallest denomination and the parts always sum to the
//! source value's minor-units count. Digits below the minor unit are
//! truncated before splitting.
//!
//! - Even split: integer division, with the remainder handed out one unit
//!   at a time to the leading parts.
//! - Proportional split: each leading part is its banker's-rounded share of
//!   the truncated total, and the final part absorbs whatever rounding left
//!   over. The running total never passes the truncated total, so with
//!   non-negative weights no part has the opposite sign of the source.

use coinage_shared::types::conversion;
use coinage_shared::{Money, MoneyError};
use rust_decimal::Decimal;

use super::error::AllocationError;

/// Allocation utility for splitting monetary values.
///
/// Guarantees for every successful call:
/// - Every part has the source value's currency
/// - Sum of parts EXACTLY equals the source value's minor units
/// - No minor unit is lost or gained
pub struct Allocation;

impl Allocation {
    /// Splits `total` into `parts` values that differ by at most one minor unit.
    ///
    /// The leading parts receive the extra unit, away from zero for negative
    /// values. A non-positive `parts` count yields no parts.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::currency::Allocation;
    /// use coinage_shared::types::iso4217::USD;
    /// use coinage_shared::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// // 15.01 / 3 = [5.01, 5.00, 5.00]
    /// let parts = Allocation::distribute_evenly(&Money::new(dec!(15.01), USD), 3);
    /// assert_eq!(parts[0], Money::new(dec!(5.01), USD));
    /// assert_eq!(parts[1], Money::new(dec!(5.00), USD));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `total` has more minor units than fit in an `i64`.
    #[must_use]
    pub fn distribute_evenly(total: &Money, parts: i64) -> Vec<Money> {
        let Ok(count) = usize::try_from(parts) else {
            return vec![];
        };
        if count == 0 {
            return vec![];
        }

        let currency = total.currency();
        let units = total.minor_units();

        let base = units / parts;
        let remainder = units.unsigned_abs() % parts.unsigned_abs();
        let extra_count = usize::try_from(remainder).unwrap_or(0);

        tracing::trace!(%currency, units, parts, extra_count, "distributing evenly");

        // Unused when the remainder is zero
        let larger = Money::from_minor_units(base.saturating_add(units.signum()), currency);
        let smaller = Money::from_minor_units(base, currency);

        // Distribute: first N parts get the extra unit
        (0..count)
            .map(|i| if i < extra_count { larger } else { smaller })
            .collect()
    }

    /// Splits `total` in proportion to `weights`.
    ///
    /// Returns one part per weight, in weight order. Each part but the last
    /// is `total * weight / sum(weights)` rounded half-to-even to the minor
    /// unit, where `total` is first truncated to whole minor units. A share
    /// that would carry the running total past `total` is cut back to what
    /// remains. The last part is the remainder, so it may differ from its
    /// own rounded share. Empty weights yield no parts, and a zero total
    /// yields zero parts without consulting the weights.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::currency::Allocation;
    /// use coinage_shared::types::iso4217::USD;
    /// use coinage_shared::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let weights = [Money::new(dec!(5), USD), Money::new(dec!(8.25), USD)];
    /// let parts = Allocation::distribute_proportionally(&Money::new(dec!(-10), USD), &weights).unwrap();
    /// assert_eq!(parts, vec![Money::new(dec!(-3.77), USD), Money::new(dec!(-6.23), USD)]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AllocationError::ZeroWeightTotal`] if the weights sum to zero
    /// - [`AllocationError::Money`] if a weight has another currency, or
    ///   the amounts overflow
    pub fn distribute_proportionally(
        total: &Money,
        weights: &[Money],
    ) -> Result<Vec<Money>, AllocationError> {
        let Some((_, leading)) = weights.split_last() else {
            return Ok(vec![]);
        };

        let currency = total.currency();
        if let Some(other) = weights.iter().find(|w| w.currency() != currency) {
            return Err(MoneyError::CurrencyMismatch {
                expected: currency.alphabetic_code(),
                found: other.currency().alphabetic_code(),
            }
            .into());
        }

        let desired = total.try_minor_units()?;
        if desired == 0 {
            return Ok(vec![Money::zero(currency); weights.len()]);
        }

        let weight_total = weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(w.exact_amount()))
            .ok_or(MoneyError::Overflow("addition"))?;
        if weight_total.is_zero() {
            tracing::warn!(%total, weights = weights.len(), "weights sum to zero");
            return Err(AllocationError::ZeroWeightTotal { total: *total });
        }

        let exponent = currency.minor_units();
        let base = conversion::from_minor_units(desired, exponent);
        let mut allocated: i64 = 0;
        let mut parts = Vec::with_capacity(weights.len());

        for weight in leading {
            let proportion = weight
                .exact_amount()
                .checked_div(weight_total)
                .ok_or(MoneyError::Overflow("division"))?;
            let share = base
                .checked_mul(proportion)
                .ok_or(MoneyError::Overflow("multiplication"))?;
            let rounded = conversion::round_and_scale(share, exponent)?;
            let remaining = desired
                .checked_sub(allocated)
                .ok_or(MoneyError::Overflow("subtraction"))?;
            // Never allocate past the desired total
            let units = if desired > 0 {
                rounded.min(remaining)
            } else {
                rounded.max(remaining)
            };
            allocated = allocated
                .checked_add(units)
                .ok_or(MoneyError::Overflow("addition"))?;
            parts.push(Money::from_minor_units(units, currency));
        }

        // Last part absorbs the rounding remainder
        let last = desired
            .checked_sub(allocated)
            .ok_or(MoneyError::Overflow("subtraction"))?;
        parts.push(Money::from_minor_units(last, currency));

        tracing::trace!(%currency, desired, parts = parts.len(), "distributed proportionally");

        Ok(parts)
    }
}
