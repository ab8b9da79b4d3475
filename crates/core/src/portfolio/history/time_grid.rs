//! Discretization of a trailing day window into evenly spaced timestamps.

use chrono::{DateTime, Duration, Utc};

use crate::constants::MILLIS_PER_DAY;

/// Number of sample intervals for a day window.
///
/// Hourly for one day, ~4-hourly for up to a week, daily for up to a
/// month, every three days beyond that. The grid itself carries one more
/// point than there are intervals.
pub fn points_for_window(days: u32) -> u32 {
    if days <= 1 {
        24
    } else if days <= 7 {
        days * 6
    } else if days <= 30 {
        days
    } else {
        days / 3
    }
}

/// Evenly spaced timestamps spanning `[now - window, now]`, both ends
/// inclusive, strictly increasing.
#[derive(Clone, Debug)]
pub struct TimeGrid {
    points: Vec<DateTime<Utc>>,
    step_millis: i64,
}

impl TimeGrid {
    /// Build the grid for the `days` window ending at `now`.
    ///
    /// Offsets are computed as `(i * window_ms) / points` in integer
    /// milliseconds, so the first point lands exactly on `now - window`
    /// and the last exactly on `now`.
    pub fn build(now: DateTime<Utc>, days: u32) -> Self {
        let num_points = points_for_window(days) as i64;
        let window_ms = days as i64 * MILLIS_PER_DAY;
        let start = now - Duration::milliseconds(window_ms);

        let points = (0..=num_points)
            .map(|i| start + Duration::milliseconds(i * window_ms / num_points))
            .collect();

        Self {
            points,
            step_millis: window_ms / num_points,
        }
    }

    pub fn points(&self) -> &[DateTime<Utc>] {
        &self.points
    }

    /// Number of grid entries (intervals + 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nominal spacing between consecutive points in milliseconds.
    pub fn step_millis(&self) -> i64 {
        self.step_millis
    }
}
