//! Date predicates.

use chrono::{DateTime, Datelike, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::convert::{parse_in, today};
use crate::registry::UTC;

/// Whether `day` is today's date in `tz`.
///
/// `layout` defaults to the compact day form and must match how `day` is
/// encoded; comparison is textual.
pub fn is_today(day: &str, tz: Tz, layout: Option<&str>) -> bool {
    today(tz, layout) == day
}

/// Whether an instant falls on a Saturday or Sunday in `tz`.
pub fn is_weekend<T: TimeZone>(instant: &DateTime<T>, tz: Tz) -> bool {
    matches!(instant.with_timezone(&tz).weekday(), Weekday::Sat | Weekday::Sun)
}

/// Gregorian leap-year rule: divisible by 4, not by 100 unless by 400.
///
/// # Examples
///
/// ```
/// use daykit::check::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Whether `text` parses cleanly against `layout`.
///
/// Reports the strict-parse outcome as a boolean instead of exposing the
/// error.
pub fn is_valid_layout(text: &str, layout: &str) -> bool {
    parse_in(text, layout, UTC).is_ok()
}
