//! Price history provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceSeries;

/// Trait for price history sources.
///
/// Implement this trait to add support for a new price data source.
/// Day windows follow the simulator's convention: `days` counts back
/// from now, and implementations decide their own sampling density.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO" or "SYNTHETIC".
    /// Used for logging and fallback diagnostics.
    fn id(&self) -> &'static str;

    /// Fetch the price series for `symbol` over the trailing `days` window.
    ///
    /// # Returns
    ///
    /// A series of price points on success, or a `MarketDataError` on
    /// failure. Points should be ordered by timestamp ascending.
    async fn price_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError>;
}
