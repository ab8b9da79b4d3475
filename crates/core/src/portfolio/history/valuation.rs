//! Valuation of reconstructed positions at every grid point.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use coinfolio_market_data::PriceSeries;

use crate::portfolio::history::history_model::PortfolioPoint;
use crate::portfolio::history::holdings_timeline::HoldingsTimeline;
use crate::portfolio::history::price_lookup::closest_price;

/// Value the reconstructed positions at every grid point.
///
/// For each point, each asset with a positive position contributes
/// quantity times its nearest price; non-positive positions (not yet
/// bought, sold out, or oversold) contribute nothing, so the curve never
/// goes negative. Assets without a price series are skipped.
pub fn value_timeseries(
    grid: &[DateTime<Utc>],
    timelines: &HoldingsTimeline,
    series_by_asset: &HashMap<String, PriceSeries>,
) -> Vec<PortfolioPoint> {
    let mut history = Vec::with_capacity(grid.len());

    for (i, timestamp) in grid.iter().enumerate() {
        let mut total_value = Decimal::ZERO;

        for (asset_id, timeline) in timelines {
            let quantity = match timeline.get(i) {
                Some(q) if *q > Decimal::ZERO => *q,
                _ => continue,
            };

            let Some(series) = series_by_asset.get(asset_id) else {
                continue;
            };

            if let Some(price) = closest_price(&series.points, *timestamp) {
                total_value += quantity * price;
            }
        }

        history.push(PortfolioPoint::new(*timestamp, total_value));
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use coinfolio_market_data::PricePoint;
    use rust_decimal_macros::dec;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn constant_series(asset_id: &str, price: Decimal) -> (String, PriceSeries) {
        (
            asset_id.to_string(),
            PriceSeries::new(
                asset_id.to_uppercase(),
                vec![
                    PricePoint::new(at(0), price),
                    PricePoint::new(at(100), price),
                ],
            ),
        )
    }

    #[test]
    fn test_single_asset_constant_price() {
        let grid = vec![at(0), at(50), at(100)];
        let timelines: HoldingsTimeline =
            HashMap::from([("btc".to_string(), vec![dec!(1), dec!(1), dec!(1)])]);
        let series = HashMap::from([constant_series("btc", dec!(100))]);

        let history = value_timeseries(&grid, &timelines, &series);

        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|p| p.value == dec!(100)));
    }

    #[test]
    fn test_negative_position_contributes_zero() {
        let grid = vec![at(0), at(50), at(100)];
        let timelines: HoldingsTimeline = HashMap::from([
            ("btc".to_string(), vec![dec!(-3), dec!(-3), dec!(-3)]),
            ("eth".to_string(), vec![dec!(1), dec!(1), dec!(1)]),
        ]);
        let series = HashMap::from([
            constant_series("btc", dec!(100)),
            constant_series("eth", dec!(100)),
        ]);

        let history = value_timeseries(&grid, &timelines, &series);

        // The oversold asset is clamped out; only the long position counts.
        assert!(history.iter().all(|p| p.value == dec!(100)));
    }

    #[test]
    fn test_asset_without_series_is_skipped() {
        let grid = vec![at(0), at(50)];
        let timelines: HoldingsTimeline =
            HashMap::from([("btc".to_string(), vec![dec!(2), dec!(2)])]);
        let series = HashMap::new();

        let history = value_timeseries(&grid, &timelines, &series);

        assert!(history.iter().all(|p| p.value == Decimal::ZERO));
    }

    #[test]
    fn test_values_sum_across_assets() {
        let grid = vec![at(0), at(100)];
        let timelines: HoldingsTimeline = HashMap::from([
            ("btc".to_string(), vec![dec!(1), dec!(1)]),
            ("eth".to_string(), vec![dec!(2), dec!(2)]),
        ]);
        let series = HashMap::from([
            constant_series("btc", dec!(100)),
            constant_series("eth", dec!(10)),
        ]);

        let history = value_timeseries(&grid, &timelines, &series);

        assert!(history.iter().all(|p| p.value == dec!(120)));
    }

    #[test]
    fn test_position_appearing_mid_window() {
        let grid = vec![at(0), at(50), at(100)];
        let timelines: HoldingsTimeline =
            HashMap::from([("btc".to_string(), vec![dec!(0), dec!(1), dec!(1)])]);
        let series = HashMap::from([constant_series("btc", dec!(100))]);

        let history = value_timeseries(&grid, &timelines, &series);

        let values: Vec<Decimal> = history.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![dec!(0), dec!(100), dec!(100)]);
    }
}
