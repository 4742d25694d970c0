//! Calendar-day string conversions.
//!
//! A day string carries no timezone of its own; the functions here attach
//! one explicitly wherever it matters. The default layout is the compact
//! `YYYYMMDD` form.

use chrono::{Local, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::convert::{from_unix, parse_in};
use crate::error::TimeResult;
use crate::registry::{LAYOUT_DAY, LAYOUT_DAY_COMPACT, UTC};

/// Re-render a day string from one layout to another.
///
/// The day is interpreted in UTC, which is safe because only the date
/// component survives the round trip.
pub fn reformat_day(day: &str, from_layout: &str, to_layout: &str) -> TimeResult<String> {
    Ok(parse_in(day, from_layout, UTC)?.format(to_layout).to_string())
}

/// Convert `YYYYMMDD` to `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// assert_eq!(daykit::day::to_hyphenated_day("20240728").unwrap(), "2024-07-28");
/// ```
pub fn to_hyphenated_day(day: &str) -> TimeResult<String> {
    reformat_day(day, LAYOUT_DAY_COMPACT, LAYOUT_DAY)
}

/// Convert `YYYY-MM-DD` to `YYYYMMDD`.
pub fn to_compact_day(day: &str) -> TimeResult<String> {
    reformat_day(day, LAYOUT_DAY, LAYOUT_DAY_COMPACT)
}

/// Unix seconds of midnight of `day` in `tz`.
///
/// `layout` defaults to the compact day form.
pub fn day_to_unix(day: &str, tz: Tz, layout: Option<&str>) -> TimeResult<i64> {
    Ok(parse_in(day, layout.unwrap_or(LAYOUT_DAY_COMPACT), tz)?.timestamp())
}

/// Legacy variant of [`day_to_unix`] that swallows the error.
///
/// A parse failure yields `0` (the epoch) and logs a warning. Kept for call
/// sites that depend on the historical zero-value behavior.
pub fn day_to_unix_lenient(day: &str, tz: Tz, layout: Option<&str>) -> i64 {
    match day_to_unix(day, tz, layout) {
        Ok(ts) => ts,
        Err(err) => {
            warn!(%err, day, "day parse failed, falling back to the epoch");
            0
        }
    }
}

/// Compact day string of a unix timestamp evaluated in `tz`.
pub fn unix_to_day(ts: i64, tz: Tz) -> String {
    from_unix(ts).with_timezone(&tz).format(LAYOUT_DAY_COMPACT).to_string()
}

/// Today's `YYYY-MM-DD 00:00:00` and `YYYY-MM-DD 23:59:59` in local time.
pub fn today_bounds() -> (String, String) {
    let day = Local::now().format(LAYOUT_DAY).to_string();
    (format!("{day} 00:00:00"), format!("{day} 23:59:59"))
}

/// Unix seconds of the first second of today in `tz`.
pub fn day_start_unix(tz: Tz) -> i64 {
    let now = Utc::now().with_timezone(&tz);
    tz.from_local_datetime(&now.date_naive().and_time(NaiveTime::MIN)).earliest().map_or_else(
        || now.timestamp() - i64::from(now.num_seconds_from_midnight()),
        |midnight| midnight.timestamp(),
    )
}

/// Unix seconds of the last second of today in `tz`.
pub fn day_end_unix(tz: Tz) -> i64 {
    day_start_unix(tz) + 86_400 - 1
}
