//! UTC timestamp handling.
//!
//! The flight-events API provides timestamps as strings, either with an
//! explicit offset ("2024-01-01T00:00:00.000Z", "2024-01-01T02:00:00+02:00")
//! or naive ("2024-01-01T00:00:00"). This module normalizes all of them to
//! a single UTC instant; naive timestamps are read as already being UTC.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use std::fmt;

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct InvalidTimestamp {
    reason: &'static str,
}

/// A point in time, normalized to UTC.
///
/// Equality and ordering compare the underlying instant, never the textual
/// form the value was parsed from: "2024-01-01T12:00:00+02:00" and
/// "2024-01-01T10:00:00Z" are the same `UtcInstant`.
///
/// # Examples
///
/// ```
/// use flight_server::domain::UtcInstant;
///
/// let dep = UtcInstant::parse("2024-09-12T12:00:00Z").unwrap();
/// let arr = UtcInstant::parse("2024-09-12T18:00:00Z").unwrap();
/// assert!(dep.is_before(&arr));
///
/// // Offsets are normalized to UTC
/// let local = UtcInstant::parse("2024-09-12T14:00:00+02:00").unwrap();
/// assert_eq!(dep, local);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcInstant(DateTime<Utc>);

impl UtcInstant {
    /// Parse a timestamp from a string.
    ///
    /// Accepts RFC 3339 timestamps with any offset (normalized to UTC) and
    /// naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` timestamps, interpreted as UTC.
    pub fn parse(s: &str) -> Result<Self, InvalidTimestamp> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(naive.and_utc()));
            }
        }

        Err(InvalidTimestamp {
            reason: "not a recognized UTC timestamp",
        })
    }

    /// Returns true if this instant is strictly before `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns true if this instant is strictly after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from `other` to this instant.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Formats the instant as an RFC 3339 string in UTC ("Z" suffix).
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Debug for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UtcInstant({})", self.to_rfc3339())
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
