//! Property-based integration tests for the portfolio history engine.
//!
//! These tests verify that universal properties of the value curve hold
//! across randomized ledgers and windows, using the `proptest` crate for
//! test case generation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use coinfolio_core::errors::Result;
use coinfolio_core::holdings::HoldingsRepositoryTrait;
use coinfolio_core::portfolio::history::{points_for_window, PortfolioHistoryServiceTrait};
use coinfolio_core::{
    LedgerRepositoryTrait, PortfolioHistoryService, Transaction, TransactionSide,
};
use coinfolio_market_data::{MarketDataError, PriceHistoryProvider, PricePoint, PriceSeries};

// =============================================================================
// Collaborator stubs
// =============================================================================

struct StubLedger {
    transactions: Vec<Transaction>,
}

#[async_trait]
impl LedgerRepositoryTrait for StubLedger {
    async fn get_transactions(
        &self,
        _user_id: &str,
        _since: DateTime<Utc>,
    ) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

struct StubHoldings;

#[async_trait]
impl HoldingsRepositoryTrait for StubHoldings {
    async fn current_holdings(&self, _user_id: &str) -> Result<HashMap<String, Decimal>> {
        Ok(HashMap::new())
    }
}

struct ConstantPriceProvider;

#[async_trait]
impl PriceHistoryProvider for ConstantPriceProvider {
    fn id(&self) -> &'static str {
        "CONSTANT"
    }

    async fn price_history(
        &self,
        symbol: &str,
        _days: u32,
    ) -> std::result::Result<PriceSeries, MarketDataError> {
        Ok(PriceSeries::new(
            symbol,
            vec![PricePoint::new(
                Utc.timestamp_millis_opt(0).unwrap(),
                Decimal::from(100),
            )],
        ))
    }
}

// =============================================================================
// Generators
// =============================================================================

/// One randomized ledger entry: direction, quantity, and age within the
/// window (in minutes back from now).
fn arb_trade(days: u32) -> impl Strategy<Value = (bool, u32, i64)> {
    let window_minutes = days as i64 * 24 * 60;
    (any::<bool>(), 1u32..500, 0..window_minutes)
}

fn build_ledger(now: DateTime<Utc>, trades: &[(bool, u32, i64)]) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = trades
        .iter()
        .enumerate()
        .map(|(i, (is_buy, quantity, minutes_back))| {
            let quantity = Decimal::from(*quantity);
            Transaction {
                id: format!("tx-{}", i),
                user_id: "prop-user".to_string(),
                asset_id: "asset-btc".to_string(),
                symbol: "BTC".to_string(),
                name: "Bitcoin".to_string(),
                side: if *is_buy {
                    TransactionSide::Buy
                } else {
                    TransactionSide::Sell
                },
                quantity,
                price: Decimal::from(100),
                total: quantity * Decimal::from(100),
                timestamp: now - Duration::minutes(*minutes_back),
            }
        })
        .collect();
    transactions.sort_by_key(|t| t.timestamp);
    transactions
}

fn history_for(
    transactions: Vec<Transaction>,
    days: u32,
) -> Vec<coinfolio_core::PortfolioPoint> {
    let service = PortfolioHistoryService::new(
        Arc::new(StubLedger { transactions }),
        Arc::new(StubHoldings),
        Arc::new(ConstantPriceProvider),
    );

    tokio::runtime::Runtime::new()
        .expect("tokio runtime")
        .block_on(service.portfolio_history("prop-user", days as i64))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The curve always has the policy point count, ascending timestamps,
    /// and no negative values, whatever the ledger looks like.
    #[test]
    fn prop_curve_shape_holds_for_any_ledger(
        days in 1u32..=365,
        trades in proptest::collection::vec(arb_trade(365), 0..20),
    ) {
        let now = Utc::now();
        let history = history_for(build_ledger(now, &trades), days);

        prop_assert_eq!(history.len(), points_for_window(days) as usize + 1);
        prop_assert!(history.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        prop_assert!(history.iter().all(|p| p.value >= Decimal::ZERO));
    }

    /// With buys only and a constant price, the curve never goes down.
    #[test]
    fn prop_buys_only_curve_is_non_decreasing(
        days in 1u32..=90,
        trades in proptest::collection::vec(arb_trade(30), 1..10),
    ) {
        let now = Utc::now();
        let buys: Vec<(bool, u32, i64)> = trades
            .into_iter()
            .map(|(_, quantity, minutes_back)| (true, quantity, minutes_back))
            .collect();

        let history = history_for(build_ledger(now, &buys), days);

        prop_assert!(history.windows(2).all(|w| w[0].value <= w[1].value));
    }
}
