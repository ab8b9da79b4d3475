//! Nearest-timestamp price lookup over a sorted series.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use coinfolio_market_data::PricePoint;

/// Price to use at `target`, from a series sorted by timestamp ascending.
///
/// Targets outside the series clamp to the first/last price. Inside, a
/// binary search finds the straddling pair and the closer one wins;
/// equidistant targets resolve to the earlier entry. Returns `None` only
/// for an empty series. O(log M).
pub fn closest_price(points: &[PricePoint], target: DateTime<Utc>) -> Option<Decimal> {
    let first = points.first()?;
    let last = points.last()?;

    if target <= first.timestamp {
        return Some(first.price);
    }
    if target >= last.timestamp {
        return Some(last.price);
    }

    // Insertion point: points[idx - 1].timestamp < target <= points[idx].timestamp
    let idx = points.partition_point(|p| p.timestamp < target);
    let before = &points[idx - 1];
    let after = &points[idx];

    let distance_before = (target - before.timestamp).num_milliseconds();
    let distance_after = (after.timestamp - target).num_milliseconds();

    // An exact hit falls out naturally: distance_after is zero and wins.
    if distance_before <= distance_after {
        Some(before.price)
    } else {
        Some(after.price)
    }
}
