//! Reconstruction of per-asset positions at every grid point.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::Transaction;

/// Quantity held per asset at each grid point, reconstructed by replaying
/// the ledger.
pub type HoldingsTimeline = HashMap<String, Vec<Decimal>>;

/// Replay `transactions` against `grid` and return the running position
/// per asset at every grid point.
///
/// Every asset appearing in the transaction set gets a zero-filled
/// timeline. Each transaction then applies its signed quantity from the
/// first grid point at or after its timestamp through the end of the
/// grid; a transaction dated after the last grid point is ignored. The
/// fold is sequential and purely additive, so input order between assets
/// does not matter.
///
/// Positions can go negative here when the window starts mid-history
/// (sells whose buys precede the window); valuation clamps those to a
/// zero contribution.
pub fn reconstruct_holdings(
    grid: &[DateTime<Utc>],
    transactions: &[Transaction],
) -> HoldingsTimeline {
    let mut timelines: HoldingsTimeline = HashMap::new();

    for transaction in transactions {
        timelines
            .entry(transaction.asset_id.clone())
            .or_insert_with(|| vec![Decimal::ZERO; grid.len()]);
    }

    for transaction in transactions {
        // Index scan is fine at these grid sizes (<= ~365 points).
        let Some(start_idx) = grid.iter().position(|t| *t >= transaction.timestamp) else {
            continue;
        };

        let timeline = timelines
            .entry(transaction.asset_id.clone())
            .or_insert_with(|| vec![Decimal::ZERO; grid.len()]);

        let delta = transaction.signed_quantity();
        for quantity in &mut timeline[start_idx..] {
            *quantity += delta;
        }
    }

    timelines
}
