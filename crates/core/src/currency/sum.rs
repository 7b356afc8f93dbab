//! Sums over sequences of monetary values.

use coinage_shared::{Currency, Money, MoneyResult};

/// Currency-checked summation for iterators of [`Money`].
///
/// The sum of an empty sequence is zero in the requested currency.
///
/// ```
/// use coinage_core::currency::MoneySum;
/// use coinage_shared::types::iso4217::USD;
/// use coinage_shared::Money;
/// use rust_decimal_macros::dec;
///
/// let values = [Money::new(dec!(1.25), USD), Money::new(dec!(2.50), USD)];
/// let total = values.iter().copied().sum_money(USD).unwrap();
/// assert_eq!(total, Money::new(dec!(3.75), USD));
/// ```
pub trait MoneySum: Iterator<Item = Money> + Sized {
    /// Adds every value, starting from zero in `currency`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` on the first value in another
    /// currency, or `MoneyError::Overflow` if the sum overflows.
    fn sum_money(mut self, currency: Currency) -> MoneyResult<Money> {
        self.try_fold(Money::zero(currency), |acc, value| acc.checked_add(&value))
    }

    /// Adds the values accepted by `predicate`.
    ///
    /// Rejected values are never checked for currency.
    ///
    /// # Errors
    ///
    /// Same as [`MoneySum::sum_money`], for the accepted values.
    fn sum_money_where<P>(self, currency: Currency, predicate: P) -> MoneyResult<Money>
    where
        P: FnMut(&Money) -> bool,
    {
        self.filter(predicate).sum_money(currency)
    }
}

impl<I: Iterator<Item = Money>> MoneySum for I {}
