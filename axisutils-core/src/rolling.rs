//! Overlapping, fixed-width, fixed-stride windows anchored at a start date.

use axisutils_types::{Axis, AxisError, Fraction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::builder::{AxisBuilder, bound_buffers, checked, count_from_i64, count_to_i64};
use crate::time::{DAY_MICROS, IntoTimestamp};

/// How far the windows extend.
#[derive(Debug, Clone, Copy)]
enum Extent {
    Until(NaiveDate),
    Count(usize),
}

/// Builds sliding windows of `window_size * base_dt` microseconds, each one
/// starting `base_dt` after the previous.
///
/// Consecutive windows overlap by `window_size - 1` strides, so the axis is not
/// contiguous. Give exactly one of `end_date` or `n_window`.
///
/// ```
/// use axisutils_core::{AxisBuilder, RollingWindowAxisBuilder, DAY_MICROS};
/// use chrono::NaiveDate;
///
/// let axis = RollingWindowAxisBuilder::new()
///     .start_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .window_size(3)
///     .n_window(4)
///     .build()
///     .unwrap();
/// assert_eq!(axis.len(), 4);
/// assert_eq!(axis.upper_bound()[0] - axis.lower_bound()[0], 3 * DAY_MICROS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RollingWindowAxisBuilder {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    n_window: Option<usize>,
    window_size: Option<u32>,
    base_dt: i64,
}

impl Default for RollingWindowAxisBuilder {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            n_window: None,
            window_size: None,
            base_dt: DAY_MICROS,
        }
    }
}

impl RollingWindowAxisBuilder {
    /// Create an empty builder with a one-day stride.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the day the first window starts on.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Derive the window count from this end date.
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set the number of windows.
    #[must_use]
    pub const fn n_window(mut self, n_window: usize) -> Self {
        self.n_window = Some(n_window);
        self
    }

    /// Set the window length in strides. Odd sizes center each window on a
    /// stride; even sizes are accepted.
    #[must_use]
    pub const fn window_size(mut self, window_size: u32) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Set the stride in microseconds.
    #[must_use]
    pub const fn base_dt(mut self, base_dt: i64) -> Self {
        self.base_dt = base_dt;
        self
    }

    fn validated(&self) -> Result<(NaiveDate, u32, Extent), AxisError> {
        let Some(start_date) = self.start_date else {
            return Err(AxisError::config("start_date is not provided"));
        };
        let window_size = match self.window_size {
            None => {
                return Err(AxisError::config(
                    "window_size is not provided; it must be a positive integer",
                ));
            }
            Some(0) => return Err(AxisError::range("window_size must be a positive integer")),
            Some(w) => w,
        };
        if self.base_dt <= 0 {
            return Err(AxisError::range(format!(
                "base_dt must be a positive integer, got {}",
                self.base_dt
            )));
        }
        let extent = match (self.end_date, self.n_window) {
            (Some(_), Some(_)) => {
                return Err(AxisError::config(
                    "provide either end_date or n_window, but not both",
                ));
            }
            (None, None) => {
                return Err(AxisError::config(
                    "neither end_date nor n_window is provided; exactly one is required",
                ));
            }
            (None, Some(0)) => {
                return Err(AxisError::range("n_window must be a positive integer"));
            }
            (None, Some(n)) => Extent::Count(n),
            (Some(end_date), None) => {
                if start_date > end_date {
                    return Err(AxisError::range(format!(
                        "start_date ({start_date}) must be before end_date ({end_date})"
                    )));
                }
                Extent::Until(end_date)
            }
        };
        Ok((start_date, window_size, extent))
    }

    /// Number of windows `[start_date, end_date)` holds:
    /// `ceil((end - start) / base_dt) - (window_size - 1)`.
    fn windows_until(start: i64, end: i64, base_dt: i64, window_size: u32) -> Result<i64, AxisError> {
        let span = checked(end.checked_sub(start), "end_date - start_date")?;
        // span >= 0 and base_dt > 0
        let strides = span / base_dt + i64::from(span % base_dt != 0);
        let n = strides - (i64::from(window_size) - 1);
        if n < 1 {
            return Err(AxisError::range(
                "the range from start_date to end_date is too short to contain a single full window",
            ));
        }
        Ok(n)
    }
}

impl AxisBuilder for RollingWindowAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.validated().map(|_| ())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "axisutils::rolling::build",
            skip(self),
            fields(window_size = ?self.window_size, base_dt = self.base_dt),
            err,
        )
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let (start_date, window_size, extent) = self.validated()?;
        #[cfg(feature = "tracing")]
        if window_size % 2 == 0 {
            tracing::warn!(window_size, "even window_size; windows are not centered on a stride");
        }
        let start = start_date.timestamp_micros();
        let n_window = match extent {
            Extent::Count(n) => count_to_i64(n, "n_window")?,
            Extent::Until(end_date) => Self::windows_until(
                start,
                end_date.timestamp_micros(),
                self.base_dt,
                window_size,
            )?,
        };
        let window_length = checked(
            i64::from(window_size).checked_mul(self.base_dt),
            "window_size * base_dt",
        )?;

        let n = count_from_i64(n_window, "n_window")?;
        let (mut lower, mut upper) = bound_buffers(n)?;
        for k in 0..n_window {
            let offset = checked(k.checked_mul(self.base_dt), "window offset")?;
            let lo = checked(start.checked_add(offset), "window start")?;
            lower.push(lo);
            upper.push(checked(lo.checked_add(window_length), "window end")?);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(n_window, "built rolling windows");
        Axis::from_bounds(lower, upper, Fraction::default())
    }
}
