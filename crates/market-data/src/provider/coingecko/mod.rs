//! CoinGecko market data provider implementation.
//!
//! This module provides market data from the CoinGecko API:
//! - Historical price series via /coins/{id}/market_chart
//! - Current market listings via /coins/markets
//!
//! The free tier works without a key; a pro key raises the rate limits.
//! API documentation: https://docs.coingecko.com/reference/introduction

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{MarketSnapshot, PricePoint, PriceSeries};
use crate::provider::PriceHistoryProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

/// Quote currency used when the caller does not specify one.
const DEFAULT_VS_CURRENCY: &str = "eur";

lazy_static! {
    /// Ticker symbol to CoinGecko coin id for the majors. Symbols not in
    /// this table fall through to the lowercased symbol, which CoinGecko
    /// accepts for many smaller coins.
    static ref COIN_IDS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("btc", "bitcoin");
        m.insert("eth", "ethereum");
        m.insert("sol", "solana");
        m.insert("ada", "cardano");
        m.insert("doge", "dogecoin");
        m.insert("xrp", "ripple");
        m.insert("dot", "polkadot");
        m.insert("ltc", "litecoin");
        m.insert("bnb", "binancecoin");
        m.insert("link", "chainlink");
        m.insert("matic", "matic-network");
        m.insert("avax", "avalanche-2");
        m
    };
}

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /coins/{id}/market_chart
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    /// [millis, price] pairs
    #[serde(default)]
    prices: Vec<(i64, f64)>,
    // Note: market_caps and total_volumes exist but are not used
}

/// One row from /coins/markets
#[derive(Debug, Deserialize)]
struct MarketRow {
    symbol: String,
    name: String,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    total_volume: Option<f64>,
    circulating_supply: Option<f64>,
    max_supply: Option<f64>,
    ath: Option<f64>,
    ath_date: Option<String>,
    last_updated: Option<String>,
}

// ============================================================================
// CoinGeckoProvider
// ============================================================================

/// CoinGecko market data provider.
pub struct CoinGeckoProvider {
    client: Client,
    api_key: Option<String>,
    vs_currency: String,
}

impl CoinGeckoProvider {
    /// Create a provider using the keyless free tier.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a provider with a CoinGecko Pro API key.
    pub fn with_api_key(api_key: String) -> Self {
        Self::build(Some(api_key))
    }

    fn build(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
        }
    }

    /// Override the quote currency (defaults to "eur").
    pub fn vs_currency(mut self, currency: impl Into<String>) -> Self {
        self.vs_currency = currency.into();
        self
    }

    /// Resolve a ticker symbol to the CoinGecko coin id.
    fn coin_id(symbol: &str) -> String {
        let lower = symbol.to_lowercase();
        COIN_IDS
            .get(lower.as_str())
            .map(|id| (*id).to_string())
            .unwrap_or(lower)
    }

    /// Make a GET request to the CoinGecko API.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, MarketDataError> {
        let url = format!("{}{}", BASE_URL, endpoint);

        let mut request = self.client.get(&url);

        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        if let Some(api_key) = &self.api_key {
            request = request.query(&[("x_cg_pro_api_key", api_key.as_str())]);
        }

        debug!("CoinGecko request: {} with {} params", endpoint, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(format!(
                "CoinGecko returned 404 for {}",
                endpoint
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    /// Fetch the historical price series for one coin.
    async fn fetch_price_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        let coin_id = Self::coin_id(symbol);
        let endpoint = format!("/coins/{}/market_chart", urlencoding::encode(&coin_id));
        let days_param = days.to_string();
        let params = [
            ("vs_currency", self.vs_currency.as_str()),
            ("days", days_param.as_str()),
        ];

        let text = self.fetch(&endpoint, &params).await?;

        let response: MarketChartResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse market_chart response: {}", e),
            })?;

        if response.prices.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        let mut points = Vec::with_capacity(response.prices.len());
        for (millis, price) in response.prices {
            let timestamp = match DateTime::<Utc>::from_timestamp_millis(millis) {
                Some(ts) => ts,
                None => {
                    warn!("Invalid timestamp in market_chart payload: {}", millis);
                    continue;
                }
            };
            let price = match Decimal::try_from(price) {
                Ok(p) => p,
                Err(_) => {
                    warn!("Invalid price in market_chart payload: {}", price);
                    continue;
                }
            };
            points.push(PricePoint::new(timestamp, price));
        }

        if points.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        points.sort_by_key(|p| p.timestamp);

        debug!(
            "CoinGecko: fetched {} price points for {} over {} days",
            points.len(),
            symbol,
            days
        );

        Ok(PriceSeries::new(symbol, points))
    }

    /// Fetch the current market listing for the top coins by market cap.
    pub async fn top_markets(
        &self,
        limit: u32,
    ) -> Result<Vec<MarketSnapshot>, MarketDataError> {
        let limit_param = limit.to_string();
        let params = [
            ("vs_currency", self.vs_currency.as_str()),
            ("order", "market_cap_desc"),
            ("per_page", limit_param.as_str()),
            ("page", "1"),
            ("sparkline", "false"),
            ("price_change_percentage", "24h"),
        ];

        let text = self.fetch("/coins/markets", &params).await?;

        let rows: Vec<MarketRow> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse markets response: {}", e),
            })?;

        let snapshots = rows
            .into_iter()
            .filter_map(|row| {
                let current_price = row.current_price.and_then(|p| Decimal::try_from(p).ok())?;
                Some(MarketSnapshot {
                    symbol: row.symbol.to_uppercase(),
                    name: row.name,
                    current_price,
                    market_cap: row.market_cap.and_then(|v| Decimal::try_from(v).ok()),
                    price_change_percentage_24h: row
                        .price_change_percentage_24h
                        .and_then(|v| Decimal::try_from(v).ok()),
                    volume_24h: row.total_volume.and_then(|v| Decimal::try_from(v).ok()),
                    circulating_supply: row
                        .circulating_supply
                        .and_then(|v| Decimal::try_from(v).ok()),
                    max_supply: row.max_supply.and_then(|v| Decimal::try_from(v).ok()),
                    ath_price: row.ath.and_then(|v| Decimal::try_from(v).ok()),
                    ath_date: row.ath_date.as_deref().and_then(parse_rfc3339),
                    image_url: row.image,
                    last_updated: row.last_updated.as_deref().and_then(parse_rfc3339),
                })
            })
            .collect();

        Ok(snapshots)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ============================================================================
// PriceHistoryProvider Implementation
// ============================================================================

#[async_trait]
impl PriceHistoryProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn price_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        debug!("Fetching {} day price history for {} from CoinGecko", days, symbol);
        self.fetch_price_history(symbol, days).await
    }
}

// ============================================================================
// Tests
// ============================================================================
