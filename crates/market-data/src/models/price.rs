use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One timestamped price observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,

    /// Price at that timestamp
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: Decimal) -> Self {
        Self { timestamp, price }
    }
}

/// Price observations for one symbol over a day window.
///
/// Providers may return the points sparse or unsorted; callers normalize
/// with [`sort`](Self::sort) before time-based lookups.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    /// The symbol these prices belong to
    pub symbol: String,

    /// Price observations, oldest first once sorted
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    /// Sort the points by timestamp ascending. Stable, so duplicate
    /// timestamps keep their input order.
    pub fn sort(&mut self) {
        self.points.sort_by_key(|p| p.timestamp);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn point(millis: i64, price: Decimal) -> PricePoint {
        PricePoint::new(Utc.timestamp_millis_opt(millis).unwrap(), price)
    }

    #[test]
    fn test_sort_orders_by_timestamp() {
        let mut series = PriceSeries::new(
            "BTC",
            vec![
                point(300, dec!(3)),
                point(100, dec!(1)),
                point(200, dec!(2)),
            ],
        );
        series.sort();
        let prices: Vec<Decimal> = series.points.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(1), dec!(2), dec!(3)]);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new("BTC", vec![]);
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
