use chrono::{DateTime, Datelike, Utc};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Truncate a unix timestamp to its UTC day boundary. Floor division, so
/// pre-epoch timestamps truncate toward the earlier day rather than zero.
pub fn day_floor(ts: i64) -> i64 {
    ts.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

/// Calendar month key: monotonic in the timestamp, equal for two timestamps
/// iff they fall in the same UTC calendar month.
pub fn month_key(ts: i64) -> i64 {
    let dt = datetime_utc(ts);
    i64::from(dt.year()) * 12 + i64::from(dt.month0())
}

pub fn day_label(day_start: i64) -> String {
    datetime_utc(day_start).format("%Y-%m-%d").to_string()
}

pub fn month_label(sample_timestamp: i64) -> String {
    datetime_utc(sample_timestamp).format("%Y-%m").to_string()
}

// Timestamps outside chrono's representable range clamp to the nearest
// representable instant, keeping key and label functions total.
fn datetime_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or(if ts < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
