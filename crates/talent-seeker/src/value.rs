//! Scalar values the engine compares: timestamps and rate bounds.
//!
//! Record sources hand over `createdAt` as text and rate filters arrive as
//! whatever the user typed, so both are parsed leniently here. Anything that
//! does not parse becomes `None`, which the comparators treat as the weakest
//! value (earliest date) and the predicates treat as "no constraint".

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const NAIVE_T: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);
const NAIVE_SPACE: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// # Example
///
/// ```
/// use talent_seeker::Timestamp;
///
/// let a = Timestamp::parse("2024-01-29T10:00:00Z").unwrap();
/// let b = Timestamp::parse("2024-01-30").unwrap();
/// assert!(a < b);
/// assert_eq!(Timestamp::parse("not a date"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses a timestamp string.
    ///
    /// Accepts RFC 3339 (`2024-01-29T10:00:00.000Z`, `...+02:00`), offset-less
    /// date-times (with `T` or a space separator, read as UTC) and bare dates
    /// (midnight UTC). Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(dt) = OffsetDateTime::parse(input, &Rfc3339) {
            return Some(Self::from_datetime(dt));
        }

        for format in [NAIVE_T, NAIVE_SPACE] {
            if let Ok(dt) = PrimitiveDateTime::parse(input, format) {
                return Some(Self::from_datetime(dt.assume_utc()));
            }
        }

        Date::parse(input, DATE_ONLY)
            .ok()
            .map(|date| Self::from_datetime(date.midnight().assume_utc()))
    }

    fn from_datetime(dt: OffsetDateTime) -> Self {
        Timestamp((dt.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

/// Drops NaN and infinite rates so they never act as a bound.
pub fn finite_rate(rate: f64) -> Option<f64> {
    rate.is_finite().then_some(rate)
}

/// Parses a rate typed into a filter field.
///
/// Blank or non-numeric input yields `None` (no constraint), never zero.
///
/// ```
/// use talent_seeker::parse_rate;
///
/// assert_eq!(parse_rate(" 40 "), Some(40.0));
/// assert_eq!(parse_rate("forty"), None);
/// assert_eq!(parse_rate(""), None);
/// ```
pub fn parse_rate(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().and_then(finite_rate)
}
