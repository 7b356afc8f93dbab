//! Property-based tests for money distribution.
//!
//! - Property 1: Minor Units Round Trip
//! - Property 2: Banker's Rounding Correctness
//! - Property 3: Even Split Invariants
//! - Property 4: Proportional Split Invariants

use coinage_shared::types::iso4217::{BHD, JPY, KWD, USD, UYW};
use coinage_shared::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::Allocation;
use super::conversion;
use super::sum::MoneySum;

/// Strategy to pick currencies with exponents 0, 2, 3 and 4.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![JPY, USD, BHD, KWD, UYW])
}

/// Strategy to generate minor-units counts, either sign.
fn minor_units() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..10_000_000_000i64
}

/// Strategy to generate split counts (1 to 100).
fn part_count() -> impl Strategy<Value = i64> {
    1i64..100
}

/// Strategy to generate 1 to 10 positive weights (0.01 to 10,000.00).
fn weights() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)), 1..10)
}

/// Strategy to generate values with two digits below the minor unit.
fn fractional_total(max_raw: i64) -> impl Strategy<Value = Money> {
    (currency(), -max_raw..max_raw).prop_map(|(currency, raw)| {
        Money::new(Decimal::new(raw, u32::from(currency.minor_units()) + 2), currency)
    })
}

/// Strategy mixing large totals with totals of only a few minor units.
fn any_fractional_total() -> impl Strategy<Value = Money> {
    prop_oneof![fractional_total(1_000_000_000_000), fractional_total(10_000)]
}

fn same_sign(part: &Money, total: &Money) -> bool {
    part.signum() * total.signum() >= 0
}

fn units_of(parts: &[Money]) -> i64 {
    parts.iter().map(Money::minor_units).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Minor Units Round Trip
    // =========================================================================

    /// Property 1.1: Converting minor units to an amount and back is lossless.
    #[test]
    fn prop_minor_units_round_trip(units in any::<i64>(), exponent in 0u8..=4) {
        let amount = conversion::from_minor_units(units, exponent);
        prop_assert_eq!(conversion::to_minor_units(amount, exponent).unwrap(), units);
    }

    /// Property 1.2: A value built from minor units reports the same count.
    #[test]
    fn prop_money_minor_units_round_trip(units in minor_units(), currency in currency()) {
        let value = Money::from_minor_units(units, currency);
        prop_assert_eq!(value.minor_units(), units);
        prop_assert_eq!(value.rounded_amount(), value.exact_amount());
    }

    // =========================================================================
    // Property 2: Banker's Rounding Correctness
    // =========================================================================

    /// Property 2.1: Midpoints round to the even neighbour.
    #[test]
    fn prop_midpoint_rounds_to_even(k in -1_000_000i64..1_000_000, exponent in 0u8..=4) {
        // (2k + 0.5) and (2k + 1.5) in the last kept digit
        let even_low = Decimal::new(k * 20 + 5, u32::from(exponent) + 1);
        let odd_low = Decimal::new(k * 20 + 15, u32::from(exponent) + 1);

        prop_assert_eq!(
            conversion::round_and_scale(even_low, exponent).unwrap(),
            k * 2
        );
        prop_assert_eq!(
            conversion::round_and_scale(odd_low, exponent).unwrap(),
            k * 2 + 2
        );
    }

    /// Property 2.2: Rounding moves an amount by at most half a minor unit.
    #[test]
    fn prop_rounding_within_half_unit(raw in any::<i64>(), exponent in 0u8..=4) {
        let amount = Decimal::new(raw, u32::from(exponent) + 3);
        let rounded = conversion::round_to_exponent(amount, exponent);
        let half_unit = Decimal::new(5, u32::from(exponent) + 1);
        prop_assert!((rounded - amount).abs() <= half_unit);
    }

    // =========================================================================
    // Property 3: Even Split Invariants
    // =========================================================================

    /// Property 3.1: Even split conserves the total and has `n` parts.
    #[test]
    fn prop_even_split_sum_invariant(
        units in minor_units(),
        currency in currency(),
        n in part_count(),
    ) {
        let total = Money::from_minor_units(units, currency);
        let parts = Allocation::distribute_evenly(&total, n);

        prop_assert_eq!(i64::try_from(parts.len()).unwrap(), n);
        prop_assert_eq!(parts.iter().copied().sum_money(currency).unwrap(), total);
    }

    /// Property 3.2: Even parts differ by at most one minor unit, largest first.
    #[test]
    fn prop_even_split_is_fair(
        units in minor_units(),
        currency in currency(),
        n in part_count(),
    ) {
        let total = Money::from_minor_units(units, currency);
        let counts: Vec<i64> = Allocation::distribute_evenly(&total, n)
            .iter()
            .map(Money::minor_units)
            .collect();

        let max = counts.iter().copied().max().unwrap();
        let min = counts.iter().copied().min().unwrap();
        prop_assert!(max - min <= 1);
        prop_assert!(counts.windows(2).all(|w| w[0].abs() >= w[1].abs()));
    }

    /// Property 3.3: Splitting a negated value negates every part.
    #[test]
    fn prop_even_split_sign_equivariance(
        units in minor_units(),
        currency in currency(),
        n in part_count(),
    ) {
        let total = Money::from_minor_units(units, currency);
        let negated_parts = Allocation::distribute_evenly(&total.negated(), n);
        let parts_negated: Vec<Money> = Allocation::distribute_evenly(&total, n)
            .iter()
            .map(Money::negated)
            .collect();
        prop_assert_eq!(negated_parts, parts_negated);
    }

    /// Property 3.4: Non-positive part counts produce nothing.
    #[test]
    fn prop_even_split_non_positive_count(units in minor_units(), n in i64::MIN..=0) {
        let total = Money::from_minor_units(units, USD);
        prop_assert!(Allocation::distribute_evenly(&total, n).is_empty());
    }

    /// Property 3.5: Sub-unit digits are dropped, and no part flips sign.
    #[test]
    fn prop_even_split_fractional_total(total in any_fractional_total(), n in part_count()) {
        let parts = Allocation::distribute_evenly(&total, n);

        prop_assert_eq!(i64::try_from(parts.len()).unwrap(), n);
        prop_assert_eq!(units_of(&parts), total.minor_units());
        prop_assert!(parts.iter().all(|p| same_sign(p, &total)));
    }

    // =========================================================================
    // Property 4: Proportional Split Invariants
    // =========================================================================

    /// Property 4.1: Proportional split conserves the total, one part per weight.
    #[test]
    fn prop_proportional_split_sum_invariant(
        units in minor_units(),
        currency in currency(),
        weights in weights(),
    ) {
        let total = Money::from_minor_units(units, currency);
        let weights: Vec<Money> = weights.iter().map(|w| Money::new(*w, currency)).collect();
        let parts = Allocation::distribute_proportionally(&total, &weights).unwrap();

        prop_assert_eq!(parts.len(), weights.len());
        prop_assert!(parts.iter().all(|p| p.currency() == currency));
        prop_assert_eq!(units_of(&parts), units);
    }

    /// Property 4.2: A single weight receives the whole value.
    #[test]
    fn prop_proportional_split_single_weight(
        units in minor_units(),
        currency in currency(),
        weight in 1i64..1_000_000,
    ) {
        let total = Money::from_minor_units(units, currency);
        let weights = [Money::from_minor_units(weight, currency)];
        let parts = Allocation::distribute_proportionally(&total, &weights).unwrap();
        prop_assert_eq!(parts, vec![total]);
    }

    /// Property 4.3: Sub-unit digits are dropped, and with non-negative
    /// weights no part has the opposite sign of the total.
    #[test]
    fn prop_proportional_split_fractional_total(
        total in any_fractional_total(),
        weights in weights(),
    ) {
        let currency = total.currency();
        let weights: Vec<Money> = weights.iter().map(|w| Money::new(*w, currency)).collect();
        let parts = Allocation::distribute_proportionally(&total, &weights).unwrap();

        prop_assert_eq!(parts.len(), weights.len());
        prop_assert_eq!(units_of(&parts), total.minor_units());
        prop_assert!(
            parts.iter().all(|p| same_sign(p, &total)),
            "{} split as {:?}",
            total,
            parts
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Property 2: Banker's Rounding - Specific Examples
    // =========================================================================

    /// Specific example: 2.5 rounds to 2 (nearest even).
    #[test]
    fn test_bankers_rounding_2_5() {
        assert_eq!(conversion::round_to_exponent(dec!(2.5), 0), dec!(2));
    }

    /// Specific example: 0.125 USD rounds to 0.12.
    #[test]
    fn test_bankers_rounding_usd_midpoint() {
        let value = Money::new(dec!(0.125), USD);
        assert_eq!(value.rounded_amount(), dec!(0.12));
    }

    // =========================================================================
    // Property 3: Even Split - Specific Examples
    // =========================================================================

    /// Specific example: 100/3 = [33.34, 33.33, 33.33], sum = 100.00.
    #[test]
    fn test_distribute_evenly_100_by_3() {
        let parts = Allocation::distribute_evenly(&Money::new(dec!(100), USD), 3);
        assert_eq!(parts[0], Money::new(dec!(33.34), USD));
        assert_eq!(parts[1], Money::new(dec!(33.33), USD));
        assert_eq!(parts[2], Money::new(dec!(33.33), USD));
        assert_eq!(units_of(&parts), 10_000);
    }

    /// Specific example: 0.01/3 = [0.01, 0.00, 0.00].
    #[test]
    fn test_distribute_evenly_penny_by_3() {
        let parts = Allocation::distribute_evenly(&Money::new(dec!(0.01), USD), 3);
        assert_eq!(units_of(&parts), 1);
        assert_eq!(parts[0], Money::new(dec!(0.01), USD));
    }
}
