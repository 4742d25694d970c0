//! Integration tests for the daykit public surface.
//!
//! These tests exercise the layout registry, string/instant conversions,
//! calendar arithmetic, and predicates together through the crate root
//! re-exports, the way downstream callers use them.

use daykit::calendar::{
    add_years, date_serial_to_day, day_diff, day_of_week, day_range, month_first_day,
    month_last_day, truncate_to_bucket, weekday_number_of_day, MinuteBucket,
};
use daykit::check::{is_leap_year, is_valid_layout};
use daykit::convert::{format_in, format_unix, parse_in, parse_or_epoch};
use daykit::day::{day_to_unix, to_compact_day, to_hyphenated_day, unix_to_day};
use daykit::registry::{
    resolve_zone, zones, ZoneRegistry, LAYOUT_DATETIME, LAYOUT_DAY, LAYOUT_DAY_COMPACT,
    LAYOUT_RFC3339, LOS_ANGELES, SHANGHAI, UTC,
};
use daykit::TimeError;
use proptest::prelude::*;

/// Round-trips every registry day layout through parse and format.
#[test]
fn test_parse_format_round_trip_for_day_layouts() {
    let cases = [
        ("20240728", LAYOUT_DAY_COMPACT),
        ("2024-07-28", LAYOUT_DAY),
        ("2024-07-28 10:15:30", LAYOUT_DATETIME),
    ];

    for (text, layout) in cases {
        for tz in [UTC, SHANGHAI, LOS_ANGELES] {
            let parsed = parse_in(text, layout, tz).expect("registry layout should parse");
            assert_eq!(
                format_in(&parsed, layout, tz),
                text,
                "round trip mismatch for {text} in {tz}"
            );
        }
    }
}

/// Verifies the spec table of calendar-arithmetic results end to end.
#[test]
fn test_calendar_arithmetic_reference_values() {
    assert_eq!(month_first_day("20240728", UTC).unwrap(), "20240701");
    assert_eq!(month_last_day("20240728", UTC).unwrap(), "20240731");
    assert_eq!(day_diff("20240728", "20240701", None).unwrap(), 27);
    assert_eq!(weekday_number_of_day("20240728", LAYOUT_DAY_COMPACT, UTC).unwrap(), 7);
    assert_eq!(weekday_number_of_day("20240729", LAYOUT_DAY_COMPACT, UTC).unwrap(), 1);
    assert_eq!(date_serial_to_day(40_597, LAYOUT_DAY_COMPACT, UTC).unwrap(), "20110223");
}

/// Day-range enumeration is inclusive, ordered, and empty when reversed.
#[test]
fn test_day_range_enumeration() {
    let days = day_range("20240701", "20240705", None).unwrap();
    assert_eq!(days, ["20240701", "20240702", "20240703", "20240704", "20240705"]);

    assert!(day_range("20240705", "20240701", None).unwrap().is_empty());

    // Ranges crossing a month boundary stay contiguous.
    let days = day_range("20240730", "20240802", None).unwrap();
    assert_eq!(days, ["20240730", "20240731", "20240801", "20240802"]);
}

/// Minute-bucket truncation for the documented 10:15:30 reference point.
#[test]
fn test_minute_bucket_reference_values() {
    let ts = day_to_unix("20240728", UTC, None).unwrap() + 10 * 3600 + 15 * 60 + 30;
    let cases = [
        (MinuteBucket::Ten, "2024-07-28 10:10:00"),
        (MinuteBucket::Fifteen, "2024-07-28 10:15:00"),
        (MinuteBucket::Hour, "2024-07-28 10:00:00"),
    ];
    for (bucket, expected) in cases {
        assert_eq!(
            truncate_to_bucket(ts, UTC, bucket).format(LAYOUT_DATETIME).to_string(),
            expected
        );
    }
}

/// A day string converted to seconds and back preserves its date component
/// within the same zone.
#[test]
fn test_day_seconds_round_trip_is_lossless_per_zone() {
    for tz in [UTC, SHANGHAI, LOS_ANGELES] {
        let ts = day_to_unix("20241231", tz, None).unwrap();
        assert_eq!(unix_to_day(ts, tz), "20241231");
    }
}

/// The canonical-form wrappers invert each other.
#[test]
fn test_canonical_day_forms() {
    assert_eq!(to_hyphenated_day("20240728").unwrap(), "2024-07-28");
    assert_eq!(to_compact_day("2024-07-28").unwrap(), "20240728");
    let back = to_compact_day(&to_hyphenated_day("20000229").unwrap()).unwrap();
    assert_eq!(back, "20000229");
}

/// Zone resolution fails at registry construction, not at call time.
#[test]
fn test_zone_registry_resolution() {
    assert_eq!(resolve_zone("America/Los_Angeles").unwrap(), LOS_ANGELES);
    assert_eq!(zones().shanghai, SHANGHAI);

    let err = ZoneRegistry::from_names("Etc/UTC", "Asia/Shangai", "Asia/Tokyo", "US/Pacific")
        .unwrap_err();
    assert!(matches!(err, TimeError::UnknownZone(_)));
}

/// An offset embedded in the text pins the instant; the target zone only
/// selects the rendering.
#[test]
fn test_rfc3339_offset_determines_the_instant() {
    let dt = parse_in("2024-07-28T10:15:30+08:00", LAYOUT_RFC3339, UTC).unwrap();
    assert_eq!(dt.timestamp(), 1_722_132_930);
    assert_eq!(format_in(&dt, LAYOUT_DATETIME, UTC), "2024-07-28 02:15:30");
    assert_eq!(format_in(&dt, LAYOUT_DATETIME, SHANGHAI), "2024-07-28 10:15:30");
}

/// The legacy lenient path degrades to the epoch instead of failing.
#[test]
fn test_lenient_parse_falls_back_to_epoch() {
    let dt = parse_or_epoch("not-a-date", LAYOUT_DAY_COMPACT, SHANGHAI);
    assert_eq!(dt.timestamp(), 0);
    assert_eq!(format_unix(0, UTC, LAYOUT_DAY), "1970-01-01");
}

/// Leap-year predicate against the Gregorian reference table.
#[test]
fn test_leap_year_reference_table() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2020));
    assert!(!is_leap_year(2021));
}

/// Layout validity mirrors strict parsing.
#[test]
fn test_layout_validity_check() {
    assert!(is_valid_layout("20240728", LAYOUT_DAY_COMPACT));
    assert!(!is_valid_layout("2024/07/28", LAYOUT_DAY_COMPACT));
}

/// Flat 365-day year addition lands a day short across a leap year.
#[test]
fn test_add_years_is_calendar_naive() {
    let dt = parse_in("20240101", LAYOUT_DAY_COMPACT, UTC).unwrap();
    assert_eq!(add_years(dt, 1).format(LAYOUT_DAY_COMPACT).to_string(), "20241231");
}

/// Out-of-range weekday targets echo the input day unchanged.
#[test]
fn test_day_of_week_fallback_contract() {
    assert_eq!(day_of_week("20240728", 9, UTC).unwrap(), "20240728");
    assert_eq!(day_of_week("20240728", 3, UTC).unwrap(), "20240724");
}

proptest! {
    /// For any valid Gregorian date, both canonical day layouts round-trip
    /// through parse and format.
    #[test]
    fn prop_canonical_day_layouts_round_trip(
        year in 1600i32..3000,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let compact = format!("{year:04}{month:02}{day:02}");
        let parsed = parse_in(&compact, LAYOUT_DAY_COMPACT, UTC).unwrap();
        prop_assert_eq!(format_in(&parsed, LAYOUT_DAY_COMPACT, UTC), compact);

        let hyphenated = format!("{year:04}-{month:02}-{day:02}");
        let parsed = parse_in(&hyphenated, LAYOUT_DAY, UTC).unwrap();
        prop_assert_eq!(format_in(&parsed, LAYOUT_DAY, UTC), hyphenated);
    }

    /// Day difference is consistent with enumeration length.
    #[test]
    fn prop_day_diff_matches_range_length(offset in 0i64..400) {
        let from = "20240101";
        let to_dt = parse_in(from, LAYOUT_DAY_COMPACT, UTC).unwrap()
            + chrono::Duration::days(offset);
        let to = to_dt.format(LAYOUT_DAY_COMPACT).to_string();

        prop_assert_eq!(day_diff(&to, from, None).unwrap(), offset);
        prop_assert_eq!(day_range(from, &to, None).unwrap().len() as i64, offset + 1);
    }
}
