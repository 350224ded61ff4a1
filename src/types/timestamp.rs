//! Timestamp helpers shared by the generator and the output sinks

use chrono::{DateTime, Duration, Utc};
use serde::Serializer;

/// Fixed-width, lexicographically sortable timestamp layout (UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const MICROSECONDS_PER_DAY: f64 = 86_400_000_000.0;

/// Convert a fractional number of days into a duration, rounded to the microsecond
pub fn duration_from_days(days: f64) -> Duration {
    Duration::microseconds((days * MICROSECONDS_PER_DAY).round() as i64)
}

/// Convert a duration into fractional days
pub fn duration_to_days(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(micros) => micros as f64 / MICROSECONDS_PER_DAY,
        // Only reachable for spans of ~292k years
        None => duration.num_milliseconds() as f64 / (MICROSECONDS_PER_DAY / 1000.0),
    }
}

/// Render a timestamp using [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter writing timestamps with [`TIMESTAMP_FORMAT`]
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
