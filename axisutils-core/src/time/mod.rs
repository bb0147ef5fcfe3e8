//! Calendar-aware axis builders and timestamp helpers.
//!
//! Every date is converted to integer microseconds since the Unix epoch,
//! interpreted in UTC. Submodules:
//! - `known`: fixed-cadence daily and weekly axes
//! - `calendar`: one bin per calendar month or year

use axisutils_types::AxisError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Daily and weekly axes.
pub mod known;
/// Monthly and yearly axes.
pub mod calendar;

/// Microseconds in one second.
pub const MICROS_PER_SECOND: i64 = 1_000_000;
/// Microseconds in one calendar day (no leap seconds).
pub const DAY_MICROS: i64 = 86_400 * MICROS_PER_SECOND;
/// Microseconds in seven calendar days.
pub const WEEK_MICROS: i64 = 7 * DAY_MICROS;

/// Conversion of calendar values into the microsecond coordinate system.
pub trait IntoTimestamp {
    /// Microseconds since 1970-01-01T00:00:00Z.
    fn timestamp_micros(&self) -> i64;
}

impl IntoTimestamp for NaiveDate {
    fn timestamp_micros(&self) -> i64 {
        self.and_time(NaiveTime::MIN).and_utc().timestamp_micros()
    }
}

impl IntoTimestamp for NaiveDateTime {
    fn timestamp_micros(&self) -> i64 {
        self.and_utc().timestamp_micros()
    }
}

impl<Tz: TimeZone> IntoTimestamp for DateTime<Tz> {
    fn timestamp_micros(&self) -> i64 {
        Self::timestamp_micros(self)
    }
}

impl IntoTimestamp for i64 {
    fn timestamp_micros(&self) -> i64 {
        *self
    }
}

/// Midnight UTC of `date`, in microseconds.
#[must_use]
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.timestamp_micros()
}

/// Inverse of the microsecond coordinate, if representable.
#[must_use]
pub fn timestamp_to_datetime(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(ts)
}

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `AxisError::Range` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, AxisError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(AxisError::range(format!(
            "month must be a number between 1 and 12, got {month}"
        ))),
    }
}

/// Number of days in `year`.
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// First day of `month` in `year`.
///
/// # Errors
/// Returns `AxisError::Range` for a month outside `1..=12` or a year outside
/// the calendar's representable range.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, AxisError> {
    days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AxisError::range(format!(
            "{year}-{month:02} is outside the representable calendar range"
        ))
    })
}

/// The month following `(year, month)`.
#[must_use]
pub const fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
