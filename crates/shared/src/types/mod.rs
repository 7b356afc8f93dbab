//! Currency and money types.

pub mod conversion;
pub mod currency;
pub mod iso4217;
pub mod money;

pub use currency::{Currency, CurrencyDescriptor, MAX_MINOR_UNITS};
pub use money::{Money, Scalar};
