//! Currency descriptors.
//!
//! A `Currency` is static metadata: display name, ISO alphabetic and numeric
//! codes, and the minor-units exponent (the number of decimal digits of the
//! currency's smallest denomination).
//!
//! Identity is nominal. Two descriptors denote the same currency iff their
//! alphabetic codes match, whatever their other fields say.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::iso4217;
use crate::error::MoneyError;

/// Largest supported minor-units exponent (the decimal scale limit).
pub const MAX_MINOR_UNITS: u8 = 28;

/// Compile-time description of a currency.
///
/// Implement this on a marker type to define a currency outside of the
/// ISO 4217 catalog, then lift it into a runtime value with [`Currency::of`].
///
/// ```
/// use coinage_shared::types::{Currency, CurrencyDescriptor};
///
/// struct Credits;
///
/// impl CurrencyDescriptor for Credits {
///     const NAME: &'static str = "Arcade Credits";
///     const ALPHABETIC_CODE: &'static str = "ARC";
///     const NUMERIC_CODE: u16 = 0;
///     const MINOR_UNITS: u8 = 1;
/// }
///
/// const ARC: Currency = Currency::of::<Credits>();
/// assert_eq!(ARC.minor_units(), 1);
/// ```
pub trait CurrencyDescriptor {
    /// Human-readable name, such as "US Dollar".
    const NAME: &'static str;
    /// Three-letter ISO 4217 code, such as "USD".
    const ALPHABETIC_CODE: &'static str;
    /// ISO 4217 numeric code, such as 840.
    const NUMERIC_CODE: u16;
    /// Digits of sub-unit precision: 2 for USD, 0 for JPY, 3 for KWD.
    const MINOR_UNITS: u8;
}

/// Runtime currency descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    name: &'static str,
    alphabetic_code: &'static str,
    numeric_code: u16,
    minor_units: u8,
}

impl Currency {
    /// Creates a currency descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `minor_units` exceeds [`MAX_MINOR_UNITS`]. In a `const`
    /// context this is a compile error.
    #[must_use]
    pub const fn new(
        name: &'static str,
        alphabetic_code: &'static str,
        numeric_code: u16,
        minor_units: u8,
    ) -> Self {
        assert!(
            minor_units <= MAX_MINOR_UNITS,
            "minor units exponent exceeds the decimal scale limit"
        );
        Self {
            name,
            alphabetic_code,
            numeric_code,
            minor_units,
        }
    }

    /// Creates the runtime descriptor for a [`CurrencyDescriptor`] type.
    #[must_use]
    pub const fn of<D: CurrencyDescriptor>() -> Self {
        Self::new(D::NAME, D::ALPHABETIC_CODE, D::NUMERIC_CODE, D::MINOR_UNITS)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 4217 alphabetic code, the identity key.
    #[must_use]
    pub const fn alphabetic_code(&self) -> &'static str {
        self.alphabetic_code
    }

    /// ISO 4217 numeric code.
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Minor-units exponent.
    #[must_use]
    pub const fn minor_units(&self) -> u8 {
        self.minor_units
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.alphabetic_code == other.alphabetic_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alphabetic_code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alphabetic_code.cmp(other.alphabetic_code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alphabetic_code)
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        iso4217::find_by_alphabetic_code(s).ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.alphabetic_code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
