use core::marker::PhantomData;

use axisutils_types::{Axis, AxisBinding, AxisError, Fraction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DAY_MICROS, IntoTimestamp, WEEK_MICROS};
use crate::builder::AxisBuilder;
use crate::fixed::{FixedIntervalAxisBuilder, FixedIntervalParams};

/// A cadence with a constant width in microseconds.
pub trait KnownInterval {
    /// Label used in logs and error messages.
    const NAME: &'static str;

    /// Width of one bin in microseconds.
    fn dt() -> i64;
}

/// One calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Day;

/// Seven calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Week;

impl KnownInterval for Day {
    const NAME: &'static str = "daily";

    fn dt() -> i64 {
        DAY_MICROS
    }
}

impl KnownInterval for Week {
    const NAME: &'static str = "weekly";

    fn dt() -> i64 {
        WEEK_MICROS
    }
}

/// Builds a contiguous axis of fixed-cadence bins from exactly two of
/// `start_date`, `end_date`, and `n_interval`.
///
/// Dates become midnight-UTC microsecond timestamps; the missing quantity is
/// derived the same way [`FixedIntervalAxisBuilder`] derives it, with the bin
/// width fixed by the cadence `K`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, bound = "")]
pub struct KnownIntervalAxisBuilder<K> {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    n_interval: Option<usize>,
    fraction: Fraction,
    #[serde(skip)]
    cadence: PhantomData<K>,
}

/// One bin per day.
///
/// ```
/// use axisutils_core::{AxisBuilder, DailyAxisBuilder};
/// use chrono::NaiveDate;
///
/// let axis = DailyAxisBuilder::new()
///     .start_date(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
///     .n_interval(7)
///     .build()
///     .unwrap();
/// assert_eq!(axis.len(), 7);
/// ```
pub type DailyAxisBuilder = KnownIntervalAxisBuilder<Day>;

/// One bin per seven days.
pub type WeeklyAxisBuilder = KnownIntervalAxisBuilder<Week>;

impl<K> Default for KnownIntervalAxisBuilder<K> {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            n_interval: None,
            fraction: Fraction::default(),
            cadence: PhantomData,
        }
    }
}

impl<K: KnownInterval> KnownIntervalAxisBuilder<K> {
    /// Create an empty builder with a middle binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first day of the axis.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the day the axis ends on (exclusive).
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set the number of bins.
    #[must_use]
    pub const fn n_interval(mut self, n_interval: usize) -> Self {
        self.n_interval = Some(n_interval);
        self
    }

    /// Set the tick placement, uniform or per bin.
    #[must_use]
    pub fn fraction(mut self, fraction: impl Into<Fraction>) -> Self {
        self.fraction = fraction.into();
        self
    }

    /// Set the tick placement from a named binding.
    #[must_use]
    pub fn binding(self, binding: AxisBinding) -> Self {
        self.fraction(binding)
    }

    /// Equivalent fixed-interval parameters in microseconds.
    ///
    /// # Errors
    /// Same as [`AxisBuilder::prebuild_check`].
    pub fn fixed_params(&self) -> Result<FixedIntervalParams, AxisError> {
        self.prebuild_check()?;
        let dt = K::dt();
        let params = match (self.start_date, self.end_date, self.n_interval) {
            (Some(start), Some(end), None) => FixedIntervalParams::StartEndInterval {
                start: start.timestamp_micros(),
                end: end.timestamp_micros(),
                interval: dt,
            },
            (Some(start), None, Some(n_interval)) => FixedIntervalParams::StartIntervalCount {
                start: start.timestamp_micros(),
                interval: dt,
                n_interval,
            },
            (None, Some(end), Some(n_interval)) => FixedIntervalParams::EndIntervalCount {
                end: end.timestamp_micros(),
                interval: dt,
                n_interval,
            },
            _ => return Err(Self::wrong_count()),
        };
        Ok(params)
    }

    fn wrong_count() -> AxisError {
        AxisError::config(format!(
            "{} axis: exactly two of [start_date, end_date, n_interval] must be provided",
            K::NAME
        ))
    }
}

impl<K: KnownInterval> AxisBuilder for KnownIntervalAxisBuilder<K> {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        let provided = usize::from(self.start_date.is_some())
            + usize::from(self.end_date.is_some())
            + usize::from(self.n_interval.is_some());
        if provided != 2 {
            return Err(Self::wrong_count());
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AxisError::range(format!(
                    "start_date ({start}) cannot be later than end_date ({end})"
                )));
            }
        }
        if self.n_interval == Some(0) {
            return Err(AxisError::range("n_interval must be at least 1"));
        }
        self.fraction.validate()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "axisutils::time::known::build", skip(self), fields(cadence = K::NAME), err)
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let params = self.fixed_params()?;
        FixedIntervalAxisBuilder::from_params(params)
            .fraction(self.fraction)
            .build()
    }
}
