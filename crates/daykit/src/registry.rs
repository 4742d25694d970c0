//! Layout constants and the timezone registry.
//!
//! Layouts use chrono's strftime syntax. The four zone handles cover the
//! regions the library is routinely asked to render in; anything else goes
//! through [`resolve_zone`] or [`ZoneRegistry::from_names`].

use chrono_tz::Tz;
use once_cell::sync::Lazy;

use crate::error::{TimeError, TimeResult};

/// `2024-07-28 10:15`
pub const LAYOUT_DATETIME_MINUTE: &str = "%Y-%m-%d %H:%M";
/// `2024-07-28 10:15:30`
pub const LAYOUT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
/// `2024-07-28 10:15:30.123`
pub const LAYOUT_DATETIME_MILLI: &str = "%Y-%m-%d %H:%M:%S%.3f";
/// `2024-07-28`. The hyphenated canonical day form.
pub const LAYOUT_DAY: &str = "%Y-%m-%d";
/// `20240728`. The compact canonical day form; the default layout.
pub const LAYOUT_DAY_COMPACT: &str = "%Y%m%d";
/// `20240728101530`
pub const LAYOUT_DATETIME_COMPACT: &str = "%Y%m%d%H%M%S";
/// `202407281015`
pub const LAYOUT_MINUTE_COMPACT: &str = "%Y%m%d%H%M";
/// `2024072810`
pub const LAYOUT_HOUR_COMPACT: &str = "%Y%m%d%H";
/// `2024`
pub const LAYOUT_YEAR: &str = "%Y";
/// `07`
pub const LAYOUT_MONTH: &str = "%m";
/// `28`
pub const LAYOUT_DAY_OF_MONTH: &str = "%d";
/// ISO 8601 / RFC 3339 with offset.
pub const LAYOUT_RFC3339: &str = "%+";

/// Coordinated Universal Time.
pub const UTC: Tz = chrono_tz::UTC;
/// Asia/Shanghai (CST, UTC+8, no DST).
pub const SHANGHAI: Tz = chrono_tz::Asia::Shanghai;
/// Asia/Tokyo (JST, UTC+9, no DST).
pub const TOKYO: Tz = chrono_tz::Asia::Tokyo;
/// America/Los_Angeles (PST/PDT).
pub const LOS_ANGELES: Tz = chrono_tz::America::Los_Angeles;

/// Immutable set of the timezone handles used by the library.
///
/// The default registry is backed by compile-time zone constants and cannot
/// fail. [`ZoneRegistry::from_names`] resolves arbitrary IANA names instead
/// and surfaces a bad name as an error at construction, never at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRegistry {
    /// UTC handle.
    pub utc: Tz,
    /// China Standard Time handle.
    pub shanghai: Tz,
    /// Japan Standard Time handle.
    pub tokyo: Tz,
    /// US Pacific handle.
    pub los_angeles: Tz,
}

impl ZoneRegistry {
    /// Build the registry from the built-in zone constants.
    pub const fn new() -> Self {
        Self { utc: UTC, shanghai: SHANGHAI, tokyo: TOKYO, los_angeles: LOS_ANGELES }
    }

    /// Build a registry from IANA names, failing on any unknown name.
    ///
    /// # Examples
    ///
    /// ```
    /// use daykit::registry::ZoneRegistry;
    ///
    /// let registry = ZoneRegistry::from_names(
    ///     "Etc/UTC",
    ///     "Asia/Shanghai",
    ///     "Asia/Tokyo",
    ///     "America/Los_Angeles",
    /// )
    /// .unwrap();
    /// assert_eq!(registry.tokyo, daykit::registry::TOKYO);
    /// ```
    pub fn from_names(
        utc: &str,
        shanghai: &str,
        tokyo: &str,
        los_angeles: &str,
    ) -> TimeResult<Self> {
        Ok(Self {
            utc: resolve_zone(utc)?,
            shanghai: resolve_zone(shanghai)?,
            tokyo: resolve_zone(tokyo)?,
            los_angeles: resolve_zone(los_angeles)?,
        })
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static ZONES: Lazy<ZoneRegistry> = Lazy::new(ZoneRegistry::new);

/// Process-wide default registry, initialized once and never mutated.
pub fn zones() -> &'static ZoneRegistry {
    &ZONES
}

/// Resolve a single IANA timezone name.
pub fn resolve_zone(name: &str) -> TimeResult<Tz> {
    name.parse::<Tz>().map_err(|_| TimeError::UnknownZone(name.to_string()))
}
