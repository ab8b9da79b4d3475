/// History window served when the requested day count is out of range.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Longest supported history window in days.
pub const MAX_HISTORY_DAYS: u32 = 365;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
