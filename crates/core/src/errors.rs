//! Core error types for the Coinfolio engine.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! errors are converted to these types by the host application's
//! repository implementations.

use thiserror::Error;

use coinfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger operation failed: {0}")]
    Ledger(String),

    #[error("Holdings operation failed: {0}")]
    Holdings(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
