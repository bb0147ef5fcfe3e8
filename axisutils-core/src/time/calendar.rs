use axisutils_types::{Axis, AxisError, Fraction};
use serde::{Deserialize, Serialize};

use super::{DAY_MICROS, IntoTimestamp, days_in_month, days_in_year, first_of_month, next_month};
use crate::builder::{AxisBuilder, bound_buffers, checked};

/// `[first day of the period, first day of the next period)` in microseconds.
fn period_bounds(year: i32, month: u32, days: u32) -> Result<(i64, i64), AxisError> {
    let lo = first_of_month(year, month)?.timestamp_micros();
    let width = checked(i64::from(days).checked_mul(DAY_MICROS), "period width")?;
    Ok((lo, checked(lo.checked_add(width), "period end")?))
}

/// Builds one bin per calendar month, start and end month inclusive.
///
/// Each bin covers the first through the last day of its month, i.e.
/// `[first of month, first of next month)`, so month lengths and leap years
/// are honored and consecutive bins are contiguous. Ticks sit at the midpoint.
///
/// ```
/// use axisutils_core::{AxisBuilder, MonthlyAxisBuilder};
///
/// let axis = MonthlyAxisBuilder::new()
///     .start_year_month(2020, 1)
///     .end_year_month(2020, 2)
///     .build()
///     .unwrap();
/// assert_eq!(axis.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonthlyAxisBuilder {
    start_year: Option<i32>,
    start_month: u32,
    end_year: Option<i32>,
    end_month: u32,
}

impl Default for MonthlyAxisBuilder {
    fn default() -> Self {
        Self {
            start_year: None,
            start_month: 1,
            end_year: None,
            end_month: 12,
        }
    }
}

impl MonthlyAxisBuilder {
    /// Create an empty builder; months default to January through December.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first month of the axis.
    #[must_use]
    pub const fn start_year_month(mut self, year: i32, month: u32) -> Self {
        self.start_year = Some(year);
        self.start_month = month;
        self
    }

    /// Set the last month of the axis (inclusive).
    #[must_use]
    pub const fn end_year_month(mut self, year: i32, month: u32) -> Self {
        self.end_year = Some(year);
        self.end_month = month;
        self
    }

    /// Set the first year, keeping the configured start month.
    #[must_use]
    pub const fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Set the last year, keeping the configured end month.
    #[must_use]
    pub const fn end_year(mut self, year: i32) -> Self {
        self.end_year = Some(year);
        self
    }

    fn validated(&self) -> Result<((i32, u32), (i32, u32)), AxisError> {
        let (Some(start_year), Some(end_year)) = (self.start_year, self.end_year) else {
            return Err(AxisError::config(
                "start and/or end year/month is not provided",
            ));
        };
        let start = (start_year, self.start_month);
        let end = (end_year, self.end_month);
        first_of_month(start.0, start.1)?;
        first_of_month(end.0, end.1)?;
        if end < start {
            return Err(AxisError::range(format!(
                "start year/month ({}-{:02}) must not be after end year/month ({}-{:02})",
                start.0, start.1, end.0, end.1
            )));
        }
        Ok((start, end))
    }
}

impl AxisBuilder for MonthlyAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.validated().map(|_| ())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "axisutils::time::calendar::monthly", skip(self), err)
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let (start, end) = self.validated()?;
        let n = usize::try_from(
            i64::from(end.0 - start.0) * 12 + i64::from(end.1) - i64::from(start.1) + 1,
        )
        .unwrap_or(0);
        let (mut lower, mut upper) = bound_buffers(n)?;
        let (mut year, mut month) = start;
        loop {
            let (lo, hi) = period_bounds(year, month, days_in_month(year, month)?)?;
            lower.push(lo);
            upper.push(hi);
            if (year, month) == end {
                break;
            }
            (year, month) = next_month(year, month);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(n_month = lower.len(), "built monthly bins");
        Axis::from_bounds(lower, upper, Fraction::default())
    }
}

/// Builds one bin per calendar year, start and end year inclusive.
///
/// Bins are `[Jan 1 of year, Jan 1 of the next year)`, ticks at the midpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YearlyAxisBuilder {
    start_year: Option<i32>,
    end_year: Option<i32>,
}

impl YearlyAxisBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first year.
    #[must_use]
    pub const fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Set the last year (inclusive).
    #[must_use]
    pub const fn end_year(mut self, year: i32) -> Self {
        self.end_year = Some(year);
        self
    }

    fn validated(&self) -> Result<(i32, i32), AxisError> {
        let (Some(start), Some(end)) = (self.start_year, self.end_year) else {
            return Err(AxisError::config("start and/or end year is not provided"));
        };
        first_of_month(start, 1)?;
        first_of_month(end, 1)?;
        if end < start {
            return Err(AxisError::range(format!(
                "start year ({start}) must not be after end year ({end})"
            )));
        }
        Ok((start, end))
    }
}

impl AxisBuilder for YearlyAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.validated().map(|_| ())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "axisutils::time::calendar::yearly", skip(self), err)
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let (start, end) = self.validated()?;
        let (lower, upper): (Vec<i64>, Vec<i64>) = (start..=end)
            .map(|year| period_bounds(year, 1, days_in_year(year)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();
        Axis::from_bounds(lower, upper, Fraction::default())
    }
}
