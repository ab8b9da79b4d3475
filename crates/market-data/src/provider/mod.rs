//! Price history provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceHistoryProvider` trait that all providers implement
//! - Concrete provider implementations (CoinGecko, synthetic)
//! - The fallback wrapper that serves a synthetic series when the real
//!   source is unavailable
//!
//! The valuation engine only ever sees the trait; which source actually
//! produced a series is a concern of this module.

mod fallback;
mod traits;

// Provider implementations
pub mod coingecko;
pub mod synthetic;

// Re-exports
pub use fallback::FallbackProvider;
pub use traits::PriceHistoryProvider;
