//! Calendar arithmetic: month boundaries, minute buckets, weekday math,
//! day ranges, and fixed-duration additions.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::convert::{from_unix, parse_in};
use crate::day::{day_to_unix, unix_to_day};
use crate::error::{TimeError, TimeResult};
use crate::registry::{LAYOUT_DAY_COMPACT, SHANGHAI, UTC};

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_YEAR: i64 = 365;

/// Truncation bucket sizes for [`truncate_to_bucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinuteBucket {
    /// Truncate to the previous 5-minute mark.
    Five,
    /// Truncate to the previous 10-minute mark.
    Ten,
    /// Truncate to the previous 15-minute mark.
    Fifteen,
    /// Truncate to the top of the hour (the degenerate 60-minute bucket).
    Hour,
}

impl MinuteBucket {
    /// Bucket width in minutes.
    pub const fn minutes(self) -> i64 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Hour => 60,
        }
    }
}

/// First day of the month containing `day`, compact form, evaluated in `tz`.
///
/// # Examples
///
/// ```
/// use daykit::calendar::month_first_day;
/// use daykit::registry::UTC;
///
/// assert_eq!(month_first_day("20240728", UTC).unwrap(), "20240701");
/// ```
pub fn month_first_day(day: &str, tz: Tz) -> TimeResult<String> {
    let first = first_of_month(day, tz)?;
    Ok(first.format(LAYOUT_DAY_COMPACT).to_string())
}

/// Last day of the month containing `day`, compact form, evaluated in `tz`.
///
/// Computed as the first of the next month minus one day, so leap February
/// and 30/31-day months need no special cases.
///
/// # Examples
///
/// ```
/// use daykit::calendar::month_last_day;
/// use daykit::registry::UTC;
///
/// assert_eq!(month_last_day("20240728", UTC).unwrap(), "20240731");
/// assert_eq!(month_last_day("20240210", UTC).unwrap(), "20240229");
/// ```
pub fn month_last_day(day: &str, tz: Tz) -> TimeResult<String> {
    let first = first_of_month(day, tz)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| TimeError::OutOfRange(format!("month arithmetic overflow for '{day}'")))?;
    Ok(last.format(LAYOUT_DAY_COMPACT).to_string())
}

/// Truncate `ts` to its minute bucket in `tz` wall-clock time, zeroing
/// seconds.
///
/// 10:15:30 truncates to 10:10:00 for [`MinuteBucket::Ten`], 10:15:00 for
/// [`MinuteBucket::Fifteen`], and 10:00:00 for [`MinuteBucket::Hour`].
pub fn truncate_to_bucket(ts: i64, tz: Tz, bucket: MinuteBucket) -> DateTime<Tz> {
    let local = from_unix(ts).with_timezone(&tz);
    let excess = i64::from(local.minute()) % bucket.minutes() * 60 + i64::from(local.second());
    from_unix(ts - excess).with_timezone(&tz)
}

/// Signed difference `day1 - day2` in whole days.
///
/// Both days are evaluated at midnight in the fixed Shanghai reference zone
/// no matter what zone the caller works in elsewhere; for whole-day strings
/// the quotient is zone-independent anyway. `layout` defaults to the compact
/// day form.
pub fn day_diff(day1: &str, day2: &str, layout: Option<&str>) -> TimeResult<i64> {
    let first = day_to_unix(day1, SHANGHAI, layout)?;
    let second = day_to_unix(day2, SHANGHAI, layout)?;
    Ok((first - second) / SECONDS_PER_DAY)
}

/// Decode a spreadsheet day-serial number into a day string.
///
/// Serial 1 is 1900-01-01, but the encoding inherited the 1900 phantom leap
/// day, so the date is `1900-01-01 + (serial - 2)` days. The adjustment is
/// reproduced exactly for compatibility with the legacy serial format.
///
/// # Examples
///
/// ```
/// use daykit::calendar::date_serial_to_day;
/// use daykit::registry::{LAYOUT_DAY_COMPACT, UTC};
///
/// assert_eq!(date_serial_to_day(40_597, LAYOUT_DAY_COMPACT, UTC).unwrap(), "20110223");
/// ```
pub fn date_serial_to_day(serial: i64, layout: &str, tz: Tz) -> TimeResult<String> {
    let base = NaiveDate::from_ymd_opt(1900, 1, 1)
        .ok_or_else(|| TimeError::OutOfRange("serial base date".to_string()))?;
    let date = base
        .checked_add_signed(Duration::days(serial - 2))
        .ok_or_else(|| TimeError::OutOfRange(format!("day serial {serial} out of range")))?;
    let midnight = date.and_time(NaiveTime::MIN);
    let rendered = tz
        .from_local_datetime(&midnight)
        .earliest()
        .map_or_else(|| midnight.format(layout).to_string(), |dt| dt.format(layout).to_string());
    Ok(rendered)
}

/// The date within the same Monday-first week as `day` that falls on
/// `target_weekday` (1=Monday .. 7=Sunday), compact form.
///
/// A target outside 1-7 echoes the input unchanged; that fallback is part of
/// the contract, not an error.
pub fn day_of_week(day: &str, target_weekday: u32, tz: Tz) -> TimeResult<String> {
    if !(1..=7).contains(&target_weekday) {
        return Ok(day.to_string());
    }
    let date = parse_in(day, LAYOUT_DAY_COMPACT, tz)?.date_naive();
    let current = i64::from(date.weekday().number_from_monday());
    let target = date + Duration::days(i64::from(target_weekday) - current);
    Ok(target.format(LAYOUT_DAY_COMPACT).to_string())
}

/// ISO-style weekday number of an instant: 1=Monday .. 7=Sunday.
pub fn weekday_number<T: TimeZone>(instant: &DateTime<T>) -> u32 {
    instant.weekday().number_from_monday()
}

/// ISO-style weekday number of a day string parsed with `layout` in `tz`.
pub fn weekday_number_of_day(day: &str, layout: &str, tz: Tz) -> TimeResult<u32> {
    Ok(parse_in(day, layout, tz)?.weekday().number_from_monday())
}

/// Inclusive compact-day enumeration from `from` to `to`.
///
/// Steps by whole days in UTC epoch-seconds space and renders each step in
/// `tz` (default UTC). Empty when `from > to`.
///
/// # Examples
///
/// ```
/// use daykit::calendar::day_range;
///
/// let days = day_range("20240701", "20240703", None).unwrap();
/// assert_eq!(days, ["20240701", "20240702", "20240703"]);
/// ```
pub fn day_range(from: &str, to: &str, tz: Option<Tz>) -> TimeResult<Vec<String>> {
    let begin = day_to_unix(from, UTC, None)?;
    let end = day_to_unix(to, UTC, None)?;
    let render = tz.unwrap_or(UTC);
    let mut days = Vec::new();
    let mut ts = begin;
    while ts <= end {
        days.push(unix_to_day(ts, render));
        ts += SECONDS_PER_DAY;
    }
    Ok(days)
}

/// Add `minutes` fixed-duration minutes to an instant.
pub fn add_minutes<T: TimeZone>(instant: DateTime<T>, minutes: i64) -> DateTime<T> {
    instant + Duration::minutes(minutes)
}

/// Add `hours` fixed-duration hours to an instant.
///
/// Adds absolute time; the wall-clock result shifts across a zone
/// transition rather than holding the local hour.
pub fn add_hours<T: TimeZone>(instant: DateTime<T>, hours: i64) -> DateTime<T> {
    instant + Duration::hours(hours)
}

/// Add `days` fixed 24-hour days to an instant.
///
/// Not DST-compensating: on a transition day the local time drifts by the
/// offset change.
pub fn add_days<T: TimeZone>(instant: DateTime<T>, days: i64) -> DateTime<T> {
    instant + Duration::days(days)
}

/// Add `years` fixed 365-day years to an instant.
///
/// Deliberately calendar-naive: leap years make the result land one day
/// short of the same calendar date.
pub fn add_years<T: TimeZone>(instant: DateTime<T>, years: i64) -> DateTime<T> {
    instant + Duration::days(DAYS_PER_YEAR * years)
}

fn first_of_month(day: &str, tz: Tz) -> TimeResult<NaiveDate> {
    let date = parse_in(day, LAYOUT_DAY_COMPACT, tz)?.date_naive();
    date.with_day(1).ok_or_else(|| TimeError::OutOfRange(format!("no month start for '{day}'")))
}
