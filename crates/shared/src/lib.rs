//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides the value model used by every other crate:
//! - Currency descriptors and the ISO 4217 catalog
//! - The `Money` type with exact decimal arithmetic
//! - Minor-units conversion and banker's rounding
//! - Error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyDescriptor, Money};
