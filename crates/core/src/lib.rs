//! Core money algorithms for Coinage.
//!
//! This crate contains pure value computation with ZERO I/O dependencies.
//! Every operation is a deterministic function of its inputs.
//!
//! # Modules
//!
//! - `currency` - Value-conserving allocation, sequence sums, and the currency registry

pub mod currency;
