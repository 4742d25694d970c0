//! Conversions between instants, unix seconds, and formatted strings.
//!
//! Parsing interprets the input as wall-clock time in the supplied zone,
//! unless the layout itself carries a UTC offset, in which case the offset
//! wins. Layouts that omit components are filled in from midnight at the
//! Unix epoch, so a bare day string parses to 00:00:00 of that day and a
//! bare year to January 1st.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::{TimeError, TimeResult};
use crate::registry::LAYOUT_DAY_COMPACT;

/// The wall-clock components of an instant in some timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute of hour, 0-59.
    pub minute: u32,
    /// Second of minute, 0-59.
    pub second: u32,
}

/// Parse `text` against `layout`, interpreted as wall-clock time in `tz`.
///
/// When the layout carries a UTC offset (such as
/// [`LAYOUT_RFC3339`](crate::registry::LAYOUT_RFC3339)), the
/// embedded offset pins the instant and the result is merely converted to
/// `tz`. Otherwise the text is taken as `tz` wall-clock time: ambiguous
/// local times (a zone transition replaying an hour) resolve to the earlier
/// instant, and skipped local times are an error.
///
/// # Examples
///
/// ```
/// use daykit::convert::parse_in;
/// use daykit::registry::{LAYOUT_DATETIME, UTC};
///
/// let dt = parse_in("2024-07-28 10:15:30", LAYOUT_DATETIME, UTC).unwrap();
/// assert_eq!(dt.timestamp(), 1_722_161_730);
/// ```
pub fn parse_in(text: &str, layout: &str, tz: Tz) -> TimeResult<DateTime<Tz>> {
    let parsed = parse_components(text, layout).map_err(|e| parse_err(text, layout, e))?;
    if parsed.offset().is_some() {
        let fixed = parsed.to_datetime().map_err(|e| parse_err(text, layout, e))?;
        return Ok(fixed.with_timezone(&tz));
    }
    let naive =
        parsed.to_naive_datetime_with_offset(0).map_err(|e| parse_err(text, layout, e))?;
    tz.from_local_datetime(&naive).earliest().ok_or_else(|| TimeError::NonexistentLocalTime {
        text: text.to_string(),
        zone: tz,
    })
}

/// Legacy variant of [`parse_in`] that swallows the error.
///
/// A parse failure yields the Unix epoch in `tz` and logs a warning. Kept
/// for call sites that depend on the historical zero-value behavior; new
/// code should call [`parse_in`] and propagate the error.
pub fn parse_or_epoch(text: &str, layout: &str, tz: Tz) -> DateTime<Tz> {
    match parse_in(text, layout, tz) {
        Ok(dt) => dt,
        Err(err) => {
            warn!(%err, text, layout, "parse failed, falling back to the epoch");
            from_unix(0).with_timezone(&tz)
        }
    }
}

/// Render `instant` in `tz` wall-clock time using `layout`. Never fails.
pub fn format_in<T: TimeZone>(instant: &DateTime<T>, layout: &str, tz: Tz) -> String {
    instant.with_timezone(&tz).format(layout).to_string()
}

/// Render unix seconds in `tz` wall-clock time using `layout`. Never fails.
///
/// # Examples
///
/// ```
/// use daykit::convert::format_unix;
/// use daykit::registry::{LAYOUT_DATETIME, SHANGHAI};
///
/// assert_eq!(
///     format_unix(1_722_161_730, SHANGHAI, LAYOUT_DATETIME),
///     "2024-07-28 18:15:30"
/// );
/// ```
pub fn format_unix(ts: i64, tz: Tz, layout: &str) -> String {
    from_unix(ts).with_timezone(&tz).format(layout).to_string()
}

/// Unix seconds of an instant. Inverse of [`from_unix`].
pub fn to_unix<T: TimeZone>(instant: &DateTime<T>) -> i64 {
    instant.timestamp()
}

/// Instant for a unix-seconds timestamp.
///
/// Values outside chrono's representable range clamp to the epoch.
pub fn from_unix(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Wall-clock components of a unix timestamp in `tz`.
pub fn time_parts(ts: i64, tz: Tz) -> TimeParts {
    let local = from_unix(ts).with_timezone(&tz);
    TimeParts {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
    }
}

/// Current unix-seconds timestamp.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// Today's date in `tz`; `layout` defaults to the compact day form.
pub fn today(tz: Tz, layout: Option<&str>) -> String {
    day_with_offset(0, tz, layout)
}

/// Yesterday's date in `tz`; `layout` defaults to the compact day form.
pub fn yesterday(tz: Tz, layout: Option<&str>) -> String {
    day_with_offset(-1, tz, layout)
}

/// The date two days ago in `tz`; `layout` defaults to the compact day form.
pub fn day_before_yesterday(tz: Tz, layout: Option<&str>) -> String {
    day_with_offset(-2, tz, layout)
}

/// The date `days` whole days from now, rendered in `tz`.
pub fn day_with_offset(days: i64, tz: Tz, layout: Option<&str>) -> String {
    let target = Utc::now() + Duration::days(days);
    target.with_timezone(&tz).format(layout.unwrap_or(LAYOUT_DAY_COMPACT)).to_string()
}

/// Current hour of day (0-23) in `tz`.
pub fn now_hour(tz: Tz) -> u32 {
    Utc::now().with_timezone(&tz).hour()
}

/// Current minute of hour (0-59) in `tz`.
pub fn now_minute(tz: Tz) -> u32 {
    Utc::now().with_timezone(&tz).minute()
}

/// Current time in `tz` rendered with `layout`.
pub fn now_formatted(tz: Tz, layout: &str) -> String {
    Utc::now().with_timezone(&tz).format(layout).to_string()
}

/// Parse into components, defaulting what the layout leaves absent.
///
/// Compact layouts stop at day, hour, or minute granularity, so anything the
/// layout does not mention falls back to 1970-01-01 / midnight.
fn parse_components(text: &str, layout: &str) -> Result<Parsed, chrono::ParseError> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(layout))?;
    // Setting a component that the layout already filled in fails and leaves
    // the parsed value alone, so these only take effect for absent fields.
    let _ = parsed.set_year(1970);
    let _ = parsed.set_month(1);
    let _ = parsed.set_day(1);
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
    let _ = parsed.set_second(0);
    Ok(parsed)
}

fn parse_err(text: &str, layout: &str, source: chrono::ParseError) -> TimeError {
    TimeError::Parse { text: text.to_string(), layout: layout.to_string(), source }
}
