//! Portfolio history service - the engine's entry point.
//!
//! Best-effort analytics: the caller always gets a plottable curve.
//! Collaborator failures are logged and degrade to partial data or the
//! flat zero curve, never to an error.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, error, warn};
use rust_decimal::Decimal;

use coinfolio_market_data::{PriceHistoryProvider, PriceSeries};

use crate::constants::{DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use crate::errors::Result;
use crate::holdings::HoldingsRepositoryTrait;
use crate::ledger::LedgerRepositoryTrait;
use crate::portfolio::history::history_model::PortfolioPoint;
use crate::portfolio::history::holdings_timeline::{reconstruct_holdings, HoldingsTimeline};
use crate::portfolio::history::time_grid::TimeGrid;
use crate::portfolio::history::valuation::value_timeseries;

#[async_trait]
pub trait PortfolioHistoryServiceTrait: Send + Sync {
    /// Compute the value-over-time curve for a user's portfolio across the
    /// trailing `days` window.
    ///
    /// `days` outside (0, 365] is normalized to the 30-day default. The
    /// call never fails; on internal errors it serves the flat zero curve.
    async fn portfolio_history(&self, user_id: &str, days: i64) -> Vec<PortfolioPoint>;
}

pub struct PortfolioHistoryService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
    price_provider: Arc<dyn PriceHistoryProvider>,
}

impl PortfolioHistoryService {
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        price_provider: Arc<dyn PriceHistoryProvider>,
    ) -> Self {
        Self {
            ledger_repository,
            holdings_repository,
            price_provider,
        }
    }

    fn normalize_days(days: i64) -> u32 {
        if days <= 0 || days > MAX_HISTORY_DAYS as i64 {
            DEFAULT_HISTORY_DAYS
        } else {
            days as u32
        }
    }

    async fn compute(
        &self,
        user_id: &str,
        days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<PortfolioPoint>> {
        let since = now - Duration::days(days as i64);
        let transactions = self.ledger_repository.get_transactions(user_id, since).await?;

        if transactions.is_empty() {
            debug!("No transactions for {} in the last {} days", user_id, days);
            return Ok(zero_history(now, days));
        }

        // Auxiliary input: stored positions for drift diagnostics only.
        let current_holdings = match self.holdings_repository.current_holdings(user_id).await {
            Ok(holdings) => holdings,
            Err(e) => {
                warn!("Could not load current holdings for {}: {}", user_id, e);
                HashMap::new()
            }
        };

        // Symbol per asset, first occurrence wins.
        let mut symbols: HashMap<String, String> = HashMap::new();
        for transaction in &transactions {
            symbols
                .entry(transaction.asset_id.clone())
                .or_insert_with(|| transaction.symbol.clone());
        }

        let mut series_by_asset: HashMap<String, PriceSeries> = HashMap::new();
        for (asset_id, symbol) in &symbols {
            match self.price_provider.price_history(symbol, days).await {
                Ok(mut series) => {
                    series.sort();
                    series_by_asset.insert(asset_id.clone(), series);
                }
                Err(e) => {
                    warn!("No price history for {}: {}; asset will not be valued", symbol, e);
                }
            }
        }

        let grid = TimeGrid::build(now, days);
        let timelines = reconstruct_holdings(grid.points(), &transactions);
        log_position_drift(user_id, &timelines, &current_holdings);

        Ok(value_timeseries(grid.points(), &timelines, &series_by_asset))
    }
}

#[async_trait]
impl PortfolioHistoryServiceTrait for PortfolioHistoryService {
    async fn portfolio_history(&self, user_id: &str, days: i64) -> Vec<PortfolioPoint> {
        let days = Self::normalize_days(days);
        let now = Utc::now();

        match self.compute(user_id, days, now).await {
            Ok(history) => history,
            Err(e) => {
                error!(
                    "Portfolio history failed for {}: {}; serving flat zero curve",
                    user_id, e
                );
                zero_history(now, days)
            }
        }
    }
}

/// Flat zero curve across the window - the "no activity" shape, also the
/// last-resort degraded output.
pub fn zero_history(now: DateTime<Utc>, days: u32) -> Vec<PortfolioPoint> {
    TimeGrid::build(now, days)
        .points()
        .iter()
        .map(|timestamp| PortfolioPoint::new(*timestamp, Decimal::ZERO))
        .collect()
}

/// Compare the reconstructed end-of-window position against the holdings
/// store. Mismatches are expected whenever activity predates the window;
/// the log line just makes that visible when charts look off.
fn log_position_drift(
    user_id: &str,
    timelines: &HoldingsTimeline,
    current_holdings: &HashMap<String, Decimal>,
) {
    for (asset_id, timeline) in timelines {
        let Some(reconstructed) = timeline.last() else {
            continue;
        };
        let stored = current_holdings
            .get(asset_id)
            .copied()
            .unwrap_or(Decimal::ZERO);
        if *reconstructed != stored {
            debug!(
                "Position drift for {} asset {}: window replay ends at {}, holdings store has {}",
                user_id, asset_id, reconstructed, stored
            );
        }
    }
}
