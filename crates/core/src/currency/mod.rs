//! Money distribution, summation and currency lookup.

pub mod allocation;
pub mod error;
pub mod registry;
pub mod sum;

pub use allocation::Allocation;
pub use coinage_shared::types::conversion;
pub use error::AllocationError;
pub use registry::{CurrencyIdentifier, CurrencyRegistry, FallbackLookup};
pub use sum::MoneySum;

#[cfg(test)]
mod props;
