//! Coinfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio history engine for Coinfolio.
//! It is storage-agnostic: the transaction ledger and current holdings
//! arrive through traits implemented by the host application, and price
//! history comes from the `coinfolio-market-data` providers.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ledger;
pub mod portfolio;

// Re-export common types from the ledger and portfolio modules
pub use ledger::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
