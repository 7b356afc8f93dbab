//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact arithmetic.
//!
//! A `Money` stores the exact amount it was given. Rounding happens only when
//! a caller asks for `rounded_amount()` or `minor_units()`, so chains of
//! arithmetic never accumulate rounding error.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion;
use super::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

/// An exact decimal amount denominated in a specific currency.
///
/// Equality, ordering and hashing all use the exact amount:
/// `USD 30.226 != USD 30.23` even though both round to `30.23`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// A scalar operand for `Money` arithmetic.
///
/// Returns `None` when the value has no decimal representation (NaN,
/// infinities, or integers beyond the decimal's 96-bit range).
pub trait Scalar {
    /// Converts the scalar into a decimal, if representable.
    fn to_decimal(self) -> Option<Decimal>;
}

impl Scalar for Decimal {
    fn to_decimal(self) -> Option<Decimal> {
        Some(self)
    }
}

macro_rules! impl_scalar {
    ($($t:ty => $from:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn to_decimal(self) -> Option<Decimal> {
                    Decimal::$from(self)
                }
            }
        )*
    };
}

impl_scalar!(
    i32 => from_i32,
    i64 => from_i64,
    i128 => from_i128,
    u32 => from_u32,
    u64 => from_u64,
    u128 => from_u128,
    f64 => from_f64,
);

impl Money {
    /// Creates a new Money instance holding `amount` exactly.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Creates a value from an integral count of the currency's minor units.
    ///
    /// `Money::from_minor_units(101, USD)` is `USD 1.01`.
    #[must_use]
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self::new(
            conversion::from_minor_units(units, currency.minor_units()),
            currency,
        )
    }

    /// Creates a value from a float that may not be a number.
    ///
    /// Returns `None` for NaN and infinities. Any other value is converted
    /// without rounding to the currency's precision.
    #[must_use]
    pub fn from_f64(amount: f64, currency: Currency) -> Option<Self> {
        Decimal::from_f64(amount).map(|amount| Self::new(amount, currency))
    }

    /// Creates a value from untrusted decimal text.
    ///
    /// Returns `None` when the text is not a decimal number, including `"NaN"`.
    #[must_use]
    pub fn from_str_amount(amount: &str, currency: Currency) -> Option<Self> {
        let amount = amount.trim();
        Decimal::from_str(amount)
            .or_else(|_| Decimal::from_scientific(amount))
            .ok()
            .map(|amount| Self::new(amount, currency))
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn exact_amount(&self) -> Decimal {
        self.amount
    }

    /// The currency this amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The amount as a whole number of minor units, truncating sub-unit digits.
    ///
    /// # Panics
    ///
    /// Panics if the count does not fit in an `i64`. Use
    /// [`Money::try_minor_units`] to handle that case.
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        match self.try_minor_units() {
            Ok(units) => units,
            Err(err) => panic!("{err}"),
        }
    }

    /// The amount as a whole number of minor units, truncating sub-unit digits.
    pub fn try_minor_units(&self) -> MoneyResult<i64> {
        conversion::to_minor_units(self.amount, self.currency.minor_units())
    }

    /// The "every day" amount, rounded half-to-even to the currency's precision.
    ///
    /// `USD 10.007` → `10.01`, `JPY 100.9` → `101`, `KWD 100.0019` → `100.002`.
    #[must_use]
    pub fn rounded_amount(&self) -> Decimal {
        conversion::round_to_exponent(self.amount, self.currency.minor_units())
    }

    /// Rounds to the currency's precision with an explicit strategy.
    #[must_use]
    pub fn rounded_amount_with(&self, strategy: RoundingStrategy) -> Decimal {
        self.amount
            .round_dp_with_strategy(u32::from(self.currency.minor_units()), strategy)
    }

    /// A new value holding the rounded amount.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self::new(self.rounded_amount(), self.currency)
    }

    /// The additive inverse.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(-self.amount, self.currency)
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// -1, 0 or 1 according to the sign of the amount.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.amount.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.alphabetic_code(),
                found: other.currency.alphabetic_code(),
            })
        }
    }

    /// Adds a value of the same currency.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("addition"))
    }

    /// Subtracts a value of the same currency.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("subtraction"))
    }

    /// Multiplies the exact amount by a decimal factor.
    pub fn checked_mul(&self, factor: Decimal) -> MoneyResult<Self> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("multiplication"))
    }

    /// Divides the exact amount by a decimal divisor.
    pub fn checked_div(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(divisor)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("division"))
    }

    /// Adds a dimensionless scalar in this value's currency.
    pub fn try_add<S: Scalar + Copy + std::fmt::Debug>(&self, scalar: S) -> MoneyResult<Self> {
        let scalar = exact_scalar(scalar)?;
        self.amount
            .checked_add(scalar)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("addition"))
    }

    /// Subtracts a dimensionless scalar in this value's currency.
    pub fn try_sub<S: Scalar + Copy + std::fmt::Debug>(&self, scalar: S) -> MoneyResult<Self> {
        let scalar = exact_scalar(scalar)?;
        self.amount
            .checked_sub(scalar)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow("subtraction"))
    }

    /// Multiplies by a scalar.
    pub fn try_mul<S: Scalar + Copy + std::fmt::Debug>(&self, scalar: S) -> MoneyResult<Self> {
        self.checked_mul(exact_scalar(scalar)?)
    }

    /// Divides by a scalar.
    pub fn try_div<S: Scalar + Copy + std::fmt::Debug>(&self, scalar: S) -> MoneyResult<Self> {
        self.checked_div(exact_scalar(scalar)?)
    }
}

fn exact_scalar<S: Scalar + Copy + std::fmt::Debug>(scalar: S) -> MoneyResult<Decimal> {
    scalar
        .to_decimal()
        .ok_or_else(|| MoneyError::UnrepresentableScalar(format!("{scalar:?}")))
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    /// Amounts of different currencies never compare numerically; they sort
    /// by alphabetic code instead.
    fn cmp(&self, other: &Self) -> Ordering {
        self.currency
            .cmp(&other.currency)
            .then_with(|| self.amount.cmp(&other.amount))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "Currency mismatch: cannot add {} to {}",
            rhs.currency, self.currency
        );
        Self::new(self.amount + rhs.amount, self.currency)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "Currency mismatch: cannot subtract {} from {}",
            rhs.currency, self.currency
        );
        Self::new(self.amount - rhs.amount, self.currency)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Money {
                type Output = Self;

                fn add(self, rhs: $t) -> Self::Output {
                    Self::new(self.amount + Decimal::from(rhs), self.currency)
                }
            }

            impl Sub<$t> for Money {
                type Output = Self;

                fn sub(self, rhs: $t) -> Self::Output {
                    Self::new(self.amount - Decimal::from(rhs), self.currency)
                }
            }

            impl Mul<$t> for Money {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    Self::new(self.amount * Decimal::from(rhs), self.currency)
                }
            }

            impl Div<$t> for Money {
                type Output = Self;

                fn div(self, rhs: $t) -> Self::Output {
                    Self::new(self.amount / Decimal::from(rhs), self.currency)
                }
            }

            impl AddAssign<$t> for Money {
                fn add_assign(&mut self, rhs: $t) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$t> for Money {
                fn sub_assign(&mut self, rhs: $t) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$t> for Money {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$t> for Money {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(Decimal, i64);
