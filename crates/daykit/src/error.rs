//! Error types for calendar and layout operations.

use chrono_tz::Tz;
use thiserror::Error;

/// Standard result type for fallible daykit operations.
pub type TimeResult<T> = Result<T, TimeError>;

/// Error type for parsing, zone resolution, and calendar arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    /// The input text did not match the requested layout.
    #[error("failed to parse '{text}' with layout '{layout}'")]
    Parse {
        /// The offending input text.
        text: String,
        /// The layout the text was parsed against.
        layout: String,
        /// The underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// The timezone name is not present in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),

    /// The wall-clock time was skipped by a zone transition.
    #[error("local time '{text}' does not exist in timezone {zone}")]
    NonexistentLocalTime {
        /// The local time that fell into the transition gap.
        text: String,
        /// The timezone in which the time was interpreted.
        zone: Tz,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("calendar arithmetic out of range: {0}")]
    OutOfRange(String),
}
