use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSide {
    Buy,
    Sell,
}

/// One executed simulated trade, immutable once recorded.
///
/// Ordering by `timestamp` is significant: the history engine replays
/// transactions in ledger order to reconstruct positions over time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub asset_id: String,

    /// Ticker symbol of the traded asset (e.g. "BTC")
    pub symbol: String,

    /// Display name of the traded asset (e.g. "Bitcoin")
    pub name: String,

    pub side: TransactionSide,

    /// Quantity traded, always positive; the side carries the direction
    pub quantity: Decimal,

    /// Unit price at execution
    pub price: Decimal,

    /// Total notional of the trade (quantity x price)
    pub total: Decimal,

    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Quantity with the trade direction applied: positive for buys,
    /// negative for sells.
    pub fn signed_quantity(&self) -> Decimal {
        match self.side {
            TransactionSide::Buy => self.quantity,
            TransactionSide::Sell => -self.quantity,
        }
    }
}
