//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `price` - Price observations (PricePoint) and per-symbol series (PriceSeries)
//! - `market` - Current market listing data (MarketSnapshot)

mod market;
mod price;

pub use market::MarketSnapshot;
pub use price::{PricePoint, PriceSeries};
