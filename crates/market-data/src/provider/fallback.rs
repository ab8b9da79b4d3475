//! Fallback selection between a real price source and the synthetic generator.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::PriceSeries;
use crate::provider::synthetic::SyntheticProvider;
use crate::provider::PriceHistoryProvider;

const PROVIDER_ID: &str = "FALLBACK";

/// Wraps a primary provider and serves a synthetic series whenever the
/// primary fails or comes back empty.
///
/// Selection lives here so the valuation engine downstream stays
/// deterministic: it receives a series either way and never needs to know
/// which source produced it.
pub struct FallbackProvider {
    primary: Arc<dyn PriceHistoryProvider>,
    synthetic: SyntheticProvider,
}

impl FallbackProvider {
    pub fn new(primary: Arc<dyn PriceHistoryProvider>) -> Self {
        Self {
            primary,
            synthetic: SyntheticProvider::new(),
        }
    }

    /// Replace the synthetic generator, e.g. with a seeded one in tests.
    pub fn with_synthetic(primary: Arc<dyn PriceHistoryProvider>, synthetic: SyntheticProvider) -> Self {
        Self { primary, synthetic }
    }
}

#[async_trait]
impl PriceHistoryProvider for FallbackProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn price_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        match self.primary.price_history(symbol, days).await {
            Ok(series) if !series.is_empty() => Ok(series),
            Ok(_) => {
                warn!(
                    "Provider {} returned an empty series for {}; serving synthetic data",
                    self.primary.id(),
                    symbol
                );
                self.synthetic.price_history(symbol, days).await
            }
            Err(e) => {
                warn!(
                    "Provider {} failed for {}: {}; serving synthetic data",
                    self.primary.id(),
                    symbol,
                    e
                );
                self.synthetic.price_history(symbol, days).await
            }
        }
    }
}
