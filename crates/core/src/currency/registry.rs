//! Currency lookup by alphabetic or numeric identifier.
//!
//! The ISO 4217 catalog is always consulted first. Identifiers it does not
//! know are handed to an optional fallback lookup, which can resolve
//! private or regional currencies.

use std::fmt;

use coinage_shared::config::RegistryConfig;
use coinage_shared::types::iso4217;
use coinage_shared::{Currency, Money, MoneyError};
use rust_decimal::Decimal;

/// An alphabetic or numeric currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CurrencyIdentifier {
    /// Three-letter code, stored uppercase.
    Alphabetic(String),
    /// ISO 4217 numeric code.
    Numeric(u16),
}

impl CurrencyIdentifier {
    /// Creates an alphabetic identifier, normalizing to uppercase.
    #[must_use]
    pub fn alphabetic(code: &str) -> Self {
        Self::Alphabetic(code.trim().to_ascii_uppercase())
    }

    /// Creates a numeric identifier.
    #[must_use]
    pub const fn numeric(code: u16) -> Self {
        Self::Numeric(code)
    }
}

impl From<&str> for CurrencyIdentifier {
    fn from(code: &str) -> Self {
        Self::alphabetic(code)
    }
}

impl From<String> for CurrencyIdentifier {
    fn from(code: String) -> Self {
        Self::alphabetic(&code)
    }
}

impl From<u16> for CurrencyIdentifier {
    fn from(code: u16) -> Self {
        Self::Numeric(code)
    }
}

impl fmt::Display for CurrencyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabetic(code) => f.write_str(code),
            Self::Numeric(code) => write!(f, "{code:03}"),
        }
    }
}

/// Lookup consulted for identifiers missing from ISO 4217.
pub type FallbackLookup = Box<dyn Fn(&CurrencyIdentifier) -> Option<Currency> + Send + Sync>;

/// Resolves identifiers to currencies and mints values from them.
pub struct CurrencyRegistry {
    fallback: Option<FallbackLookup>,
}

impl CurrencyRegistry {
    /// Registry that knows ISO 4217 only.
    #[must_use]
    pub fn standard() -> Self {
        Self { fallback: None }
    }

    /// Registry that asks `lookup` about identifiers ISO 4217 does not know.
    #[must_use]
    pub fn with_fallback<F>(lookup: F) -> Self
    where
        F: Fn(&CurrencyIdentifier) -> Option<Currency> + Send + Sync + 'static,
    {
        Self {
            fallback: Some(Box::new(lookup)),
        }
    }

    /// Registry that resolves every unknown identifier to `currency`.
    #[must_use]
    pub fn with_default_currency(currency: Currency) -> Self {
        Self::with_fallback(move |_| Some(currency))
    }

    /// Builds a registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if the configured fallback
    /// currency is not an ISO 4217 code.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, MoneyError> {
        match config.fallback_currency.as_deref() {
            Some(code) => Ok(Self::with_default_currency(code.parse()?)),
            None => Ok(Self::standard()),
        }
    }

    /// Resolves an identifier to a currency.
    #[must_use]
    pub fn resolve(&self, identifier: &CurrencyIdentifier) -> Option<Currency> {
        let found = match identifier {
            CurrencyIdentifier::Alphabetic(code) => iso4217::find_by_alphabetic_code(code),
            CurrencyIdentifier::Numeric(code) => iso4217::find_by_numeric_code(*code),
        };
        if found.is_some() {
            return found;
        }

        let fallback = self.fallback.as_ref()?;
        let resolved = fallback(identifier);
        tracing::debug!(
            %identifier,
            resolved = resolved.as_ref().map(Currency::alphabetic_code),
            "identifier not in ISO 4217, consulted fallback"
        );
        resolved
    }

    /// Creates a value from a minor-units count.
    ///
    /// Returns `None` if the identifier does not resolve.
    #[must_use]
    pub fn make_minor_units(
        &self,
        identifier: impl Into<CurrencyIdentifier>,
        units: i64,
    ) -> Option<Money> {
        let currency = self.resolve(&identifier.into())?;
        Some(Money::from_minor_units(units, currency))
    }

    /// Creates a value holding `amount` exactly.
    ///
    /// Returns `None` if the identifier does not resolve.
    #[must_use]
    pub fn make_amount(
        &self,
        identifier: impl Into<CurrencyIdentifier>,
        amount: Decimal,
    ) -> Option<Money> {
        let currency = self.resolve(&identifier.into())?;
        Some(Money::new(amount, currency))
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_shared::types::iso4217::{EUR, GBP, JPY, MXN, OMR, USD};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const KALTENSTEIN: Currency = Currency::new("Kaltenstein Taler", "KLT", 666, 2);

    #[rstest]
    #[case(CurrencyIdentifier::from("USD"), USD)]
    #[case(CurrencyIdentifier::from("usd"), USD)]
    #[case(CurrencyIdentifier::from(" jpy "), JPY)]
    #[case(CurrencyIdentifier::from(978_u16), EUR)]
    #[case(CurrencyIdentifier::from(512_u16), OMR)]
    fn test_resolve_iso(#[case] identifier: CurrencyIdentifier, #[case] expected: Currency) {
        assert_eq!(CurrencyRegistry::standard().resolve(&identifier), Some(expected));
    }

    #[test]
    fn test_identifier_normalization() {
        assert_eq!(
            CurrencyIdentifier::from("gbp"),
            CurrencyIdentifier::Alphabetic("GBP".into())
        );
        assert_eq!(CurrencyIdentifier::from(8_u16).to_string(), "008");
        assert_eq!(CurrencyIdentifier::from("eur").to_string(), "EUR");
    }

    #[test]
    fn test_make_alphabetic() {
        let registry = CurrencyRegistry::standard();

        let zero = registry.make_minor_units("GBP", 0).unwrap();
        assert_eq!(zero, Money::zero(GBP));

        let yen = registry.make_amount("JPY", dec!(302.98)).unwrap();
        assert_eq!(yen.exact_amount(), dec!(302.98));
        assert_eq!(yen.rounded_amount(), dec!(303));

        let dollars = registry.make_minor_units("USD", 549).unwrap();
        assert_eq!(dollars.exact_amount(), dec!(5.49));
    }

    #[test]
    fn test_make_numeric() {
        let registry = CurrencyRegistry::standard();

        let euros = registry.make_minor_units(978_u16, 0).unwrap();
        assert_eq!(euros.currency(), EUR);

        let pesos = registry.make_amount(484_u16, dec!(3098.9823)).unwrap();
        assert_eq!(pesos.currency(), MXN);
        assert_eq!(pesos.exact_amount(), dec!(3098.9823));

        let rials = registry.make_minor_units(512_u16, 198_239).unwrap();
        assert_eq!(rials, Money::new(dec!(198.239), OMR));
    }

    #[test]
    fn test_unknown_without_fallback() {
        let registry = CurrencyRegistry::standard();
        assert!(registry.resolve(&"KLT".into()).is_none());
        assert!(registry.make_minor_units("KLT", 100).is_none());
        assert!(registry.make_amount(666_u16, dec!(1)).is_none());
    }

    #[test]
    fn test_custom_fallback() {
        let registry = CurrencyRegistry::with_fallback(|id| match id {
            CurrencyIdentifier::Alphabetic(code) if code == "KLT" => Some(KALTENSTEIN),
            CurrencyIdentifier::Numeric(666) => Some(KALTENSTEIN),
            _ => None,
        });

        assert_eq!(registry.resolve(&"klt".into()), Some(KALTENSTEIN));
        assert_eq!(registry.resolve(&666_u16.into()), Some(KALTENSTEIN));
        assert!(registry.resolve(&"ZZZ".into()).is_none());

        let taler = registry.make_minor_units("KLT", 1050).unwrap();
        assert_eq!(taler.exact_amount(), dec!(10.50));
    }

    #[test]
    fn test_iso_wins_over_fallback() {
        let registry = CurrencyRegistry::with_default_currency(GBP);
        assert_eq!(registry.resolve(&"USD".into()), Some(USD));
        assert_eq!(registry.resolve(&"KLT".into()), Some(GBP));
        assert_eq!(registry.resolve(&666_u16.into()), Some(GBP));
    }

    #[test]
    fn test_from_config() {
        let standard = CurrencyRegistry::from_config(&RegistryConfig::default()).unwrap();
        assert!(standard.resolve(&"KLT".into()).is_none());

        let config = RegistryConfig {
            fallback_currency: Some("gbp".into()),
        };
        let registry = CurrencyRegistry::from_config(&config).unwrap();
        assert_eq!(registry.resolve(&"KLT".into()), Some(GBP));

        let config = RegistryConfig {
            fallback_currency: Some("KLT".into()),
        };
        let err = CurrencyRegistry::from_config(&config).unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("KLT".into()));
    }
}
