//! Axes from an explicit start, end, and one or many interval widths.

use axisutils_types::{Axis, AxisBinding, AxisError, Fraction};
use serde::{Deserialize, Serialize};

use crate::builder::{AxisBuilder, checked, count_from_i64, equal_width_bounds};

/// Width of the bins: one width for all of them, or one per bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntervalWidth {
    /// Every bin has this width.
    Scalar(i64),
    /// Bins are laid out back-to-back with these widths, in order.
    Sequence(Vec<i64>),
}

impl From<i64> for IntervalWidth {
    fn from(w: i64) -> Self {
        Self::Scalar(w)
    }
}

impl From<Vec<i64>> for IntervalWidth {
    fn from(ws: Vec<i64>) -> Self {
        Self::Sequence(ws)
    }
}

impl From<&[i64]> for IntervalWidth {
    fn from(ws: &[i64]) -> Self {
        Self::Sequence(ws.to_vec())
    }
}

/// Builds an axis from fully explicit `start`, `end`, and `interval`.
///
/// - With a scalar width, bins are `[start + k*w, start + (k+1)*w)` for as many
///   `k` as fit before `end`. A trailing partial bin is not emitted.
/// - With a width sequence, bins are laid out back-to-back from `start`; the
///   last upper bound is `start + sum(widths)` and need not equal `end`.
///
/// ```
/// use axisutils_core::{AxisBuilder, IntervalAxisBuilder};
///
/// let axis = IntervalAxisBuilder::new()
///     .start(0)
///     .end(100)
///     .interval(30)
///     .build()
///     .unwrap();
/// assert_eq!(axis.lower_bound(), &[0, 30, 60]);
/// assert_eq!(axis.upper_bound(), &[30, 60, 90]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntervalAxisBuilder {
    start: Option<i64>,
    end: Option<i64>,
    interval: Option<IntervalWidth>,
    fraction: Fraction,
}

impl IntervalAxisBuilder {
    /// Create an empty builder with a middle binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first lower bound.
    #[must_use]
    pub const fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end of the range.
    #[must_use]
    pub const fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Set a single width or a sequence of widths.
    #[must_use]
    pub fn interval(mut self, interval: impl Into<IntervalWidth>) -> Self {
        self.interval = Some(interval.into());
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

    fn validated(&self) -> Result<(i64, i64, &IntervalWidth), AxisError> {
        let (Some(start), Some(end), Some(interval)) = (self.start, self.end, &self.interval)
        else {
            return Err(AxisError::config(
                "not yet ready to build the axis: start, end, and interval are all required",
            ));
        };
        if start > end {
            return Err(AxisError::range(format!(
                "start ({start}) must not be larger than end ({end})"
            )));
        }
        match interval {
            IntervalWidth::Scalar(w) if *w <= 0 => {
                return Err(AxisError::range(format!(
                    "interval must be a positive number, got {w}"
                )));
            }
            IntervalWidth::Sequence(ws) if ws.is_empty() => {
                return Err(AxisError::config("interval sequence is empty"));
            }
            IntervalWidth::Sequence(ws) => {
                if let Some((i, w)) = ws.iter().enumerate().find(|(_, w)| **w <= 0) {
                    return Err(AxisError::range(format!(
                        "interval {i} must be a positive number, got {w}"
                    )));
                }
            }
            IntervalWidth::Scalar(_) => {}
        }
        self.fraction.validate()?;
        Ok((start, end, interval))
    }

    fn scalar_bounds(start: i64, end: i64, width: i64) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
        let span = checked(end.checked_sub(start), "end - start")?;
        let n = span / width;
        if n < 1 {
            return Err(AxisError::range(format!(
                "interval {width} is wider than the range [{start}, {end}); no interval fits"
            )));
        }
        #[cfg(feature = "tracing")]
        if span % width != 0 {
            tracing::debug!(
                start,
                end,
                width,
                dropped = span % width,
                "dropping trailing partial interval"
            );
        }
        equal_width_bounds(start, width, count_from_i64(n, "n_interval")?)
    }

    fn sequence_bounds(start: i64, widths: &[i64]) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
        let mut lower = Vec::with_capacity(widths.len());
        let mut upper = Vec::with_capacity(widths.len());
        let mut lo = start;
        for &w in widths {
            let hi = checked(lo.checked_add(w), "cumulative interval sum")?;
            lower.push(lo);
            upper.push(hi);
            lo = hi;
        }
        Ok((lower, upper))
    }
}

impl AxisBuilder for IntervalAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.validated().map(|_| ())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "axisutils::interval::build",
            skip(self),
            fields(start = ?self.start, end = ?self.end),
            err,
        )
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let (start, end, interval) = self.validated()?;
        let (lower, upper) = match interval {
            IntervalWidth::Scalar(w) => Self::scalar_bounds(start, end, *w)?,
            IntervalWidth::Sequence(ws) => Self::sequence_bounds(start, ws)?,
        };
        Axis::from_bounds(lower, upper, self.fraction)
    }
}
