//! Timezone-aware calendar and day-string utilities.
//!
//! Everything here is a pure, stateless transformation over a timestamp or a
//! day string, built on chrono and the IANA database via chrono-tz:
//! - **[`registry`]**: layout constants and the timezone handles
//! - **[`convert`]**: instant ⇄ unix seconds ⇄ formatted string
//! - **[`day`]**: calendar-day string conversions
//! - **[`calendar`]**: month boundaries, minute buckets, weekday math, ranges
//! - **[`check`]**: predicates
//!
//! ## Usage
//!
//! ```rust
//! use daykit::calendar::{day_range, month_last_day};
//! use daykit::registry::{SHANGHAI, UTC};
//!
//! let last = month_last_day("20240728", SHANGHAI).unwrap();
//! assert_eq!(last, "20240731");
//!
//! let days = day_range("20240701", "20240703", Some(UTC)).unwrap();
//! assert_eq!(days.len(), 3);
//! ```
//!
//! Parse failures surface as [`TimeError::Parse`] carrying the offending
//! text and layout. The `*_or_epoch` / `*_lenient` functions keep the
//! historical swallow-and-return-epoch behavior for callers that rely on it;
//! they log a `tracing` warning when the fallback engages.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod calendar;
pub mod check;
pub mod convert;
pub mod day;
pub mod error;
pub mod registry;
pub mod stopwatch;

// Re-export commonly used items
pub use calendar::{
    add_days, add_hours, add_minutes, add_years, date_serial_to_day, day_diff, day_of_week,
    day_range, month_first_day, month_last_day, truncate_to_bucket, weekday_number,
    weekday_number_of_day, MinuteBucket,
};
pub use check::{is_leap_year, is_today, is_valid_layout, is_weekend};
pub use convert::{
    format_in, format_unix, from_unix, parse_in, parse_or_epoch, time_parts, to_unix, TimeParts,
};
pub use day::{
    day_to_unix, day_to_unix_lenient, reformat_day, to_compact_day, to_hyphenated_day, unix_to_day,
};
pub use error::{TimeError, TimeResult};
pub use registry::{resolve_zone, zones, ZoneRegistry, LOS_ANGELES, SHANGHAI, TOKYO, UTC};
pub use stopwatch::Stopwatch;
