use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current market listing data for one symbol.
///
/// Mirrors the fields surfaced on the simulator's market overview:
/// spot price plus the usual listing statistics. Everything except the
/// price is optional because smaller coins often lack the figures.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Ticker symbol, upper case (e.g. "BTC")
    pub symbol: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,

    /// Current spot price in the requested quote currency
    pub current_price: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<Decimal>,

    /// All-time-high price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_date: Option<DateTime<Utc>>,

    /// Logo URL as served by the listing source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
