//! Coinfolio Market Data Crate
//!
//! This crate provides provider-agnostic price history fetching for the
//! Coinfolio paper-trading simulator.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Historical price series for crypto symbols over a day window
//! - Current market listings (price, market cap, 24h change)
//! - A synthetic random-walk series for symbols without real data
//! - Fallback selection between the real and synthetic sources
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   Domain Layer   | --> | PriceHistoryProvider |  (trait)
//! +------------------+     +----------------------+
//!                                    |
//!                     +--------------+--------------+
//!                     v                             v
//!            +------------------+         +------------------+
//!            | CoinGeckoProvider|         | SyntheticProvider|
//!            +------------------+         +------------------+
//!                     \                             /
//!                      +-------- FallbackProvider -+
//!                                    |
//!                                    v
//!                            +--------------+
//!                            |  PriceSeries |
//!                            +--------------+
//! ```
//!
//! # Core Types
//!
//! - [`PricePoint`] - One timestamped price observation
//! - [`PriceSeries`] - Ordered price observations for one symbol
//! - [`MarketSnapshot`] - Current market listing row for one symbol
//! - [`MarketDataError`] - Error taxonomy for provider operations

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{MarketSnapshot, PricePoint, PriceSeries};

// Re-export provider types
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::synthetic::SyntheticProvider;
pub use provider::{FallbackProvider, PriceHistoryProvider};

// Re-export error type
pub use errors::MarketDataError;
