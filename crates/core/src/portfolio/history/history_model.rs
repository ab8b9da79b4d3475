use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the portfolio value curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPoint {
    /// Grid timestamp this value belongs to
    pub timestamp: DateTime<Utc>,

    /// Total portfolio value at that timestamp, never negative
    pub value: Decimal,
}

impl PortfolioPoint {
    pub fn new(timestamp: DateTime<Utc>, value: Decimal) -> Self {
        Self { timestamp, value }
    }
}
