//! Equal-width axes from any three of `start`, `end`, `interval`, `n_interval`.

use axisutils_types::{Axis, AxisBinding, AxisError, Fraction};
use serde::{Deserialize, Serialize};

use crate::builder::{AxisBuilder, checked, count_from_i64, count_to_i64, equal_width_bounds};

/// The four valid ways to pin down an equal-width axis.
///
/// Exactly three of `start`, `end`, `interval`, `n_interval` are known; the
/// fourth is derived by [`resolve`](FixedIntervalParams::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedIntervalParams {
    /// `n_interval = (end - start) / interval`, which must divide exactly.
    StartEndInterval {
        /// First lower bound.
        start: i64,
        /// Last upper bound.
        end: i64,
        /// Bin width.
        interval: i64,
    },
    /// `interval = (end - start) / n_interval`, truncating.
    StartEndCount {
        /// First lower bound.
        start: i64,
        /// Requested end; the axis stops at `start + n_interval * interval`.
        end: i64,
        /// Number of bins.
        n_interval: usize,
    },
    /// `end = start + n_interval * interval`.
    StartIntervalCount {
        /// First lower bound.
        start: i64,
        /// Bin width.
        interval: i64,
        /// Number of bins.
        n_interval: usize,
    },
    /// `start = end - n_interval * interval`.
    EndIntervalCount {
        /// Last upper bound.
        end: i64,
        /// Bin width.
        interval: i64,
        /// Number of bins.
        n_interval: usize,
    },
}

/// Complete description of an equal-width axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedGeometry {
    /// First lower bound.
    pub start: i64,
    /// Last upper bound.
    pub end: i64,
    /// Bin width.
    pub interval: i64,
    /// Number of bins.
    pub n_interval: usize,
}

impl FixedIntervalParams {
    /// Select the variant matching which parameters are present.
    ///
    /// # Errors
    /// Returns `AxisError::Config` unless exactly three of the four are `Some`.
    pub fn from_parts(
        start: Option<i64>,
        end: Option<i64>,
        interval: Option<i64>,
        n_interval: Option<usize>,
    ) -> Result<Self, AxisError> {
        match (start, end, interval, n_interval) {
            (Some(start), Some(end), Some(interval), None) => Ok(Self::StartEndInterval {
                start,
                end,
                interval,
            }),
            (Some(start), Some(end), None, Some(n_interval)) => Ok(Self::StartEndCount {
                start,
                end,
                n_interval,
            }),
            (Some(start), None, Some(interval), Some(n_interval)) => {
                Ok(Self::StartIntervalCount {
                    start,
                    interval,
                    n_interval,
                })
            }
            (None, Some(end), Some(interval), Some(n_interval)) => Ok(Self::EndIntervalCount {
                end,
                interval,
                n_interval,
            }),
            _ => {
                let provided = [
                    start.is_some(),
                    end.is_some(),
                    interval.is_some(),
                    n_interval.is_some(),
                ]
                .iter()
                .filter(|p| **p)
                .count();
                Err(AxisError::config(format!(
                    "exactly three of [start, end, interval, n_interval] must be provided; {provided} were provided"
                )))
            }
        }
    }

    /// Check ordering and positivity of the known parameters.
    ///
    /// # Errors
    /// Returns `AxisError::Range` if `start >= end`, `interval <= 0`, or
    /// `n_interval < 1`.
    pub fn validate(&self) -> Result<(), AxisError> {
        let (start_end, interval, n_interval) = match *self {
            Self::StartEndInterval {
                start,
                end,
                interval,
            } => (Some((start, end)), Some(interval), None),
            Self::StartEndCount {
                start,
                end,
                n_interval,
            } => (Some((start, end)), None, Some(n_interval)),
            Self::StartIntervalCount {
                interval,
                n_interval,
                ..
            }
            | Self::EndIntervalCount {
                interval,
                n_interval,
                ..
            } => (None, Some(interval), Some(n_interval)),
        };
        if let Some((start, end)) = start_end {
            if start >= end {
                return Err(AxisError::range(format!(
                    "start ({start}) must be less than end ({end})"
                )));
            }
        }
        if let Some(interval) = interval {
            if interval <= 0 {
                return Err(AxisError::range(format!(
                    "interval must be a positive number, got {interval}"
                )));
            }
        }
        if n_interval == Some(0) {
            return Err(AxisError::range("n_interval must be at least 1"));
        }
        Ok(())
    }

    /// Derive the missing parameter.
    ///
    /// # Errors
    /// - Everything [`validate`](Self::validate) rejects.
    /// - `AxisError::Range` if `interval` does not evenly divide `[start, end)`,
    ///   if `n_interval` exceeds the width of `[start, end)`, or on overflow.
    pub fn resolve(&self) -> Result<FixedGeometry, AxisError> {
        self.validate()?;
        let geometry = match *self {
            Self::StartEndInterval {
                start,
                end,
                interval,
            } => {
                let span = checked(end.checked_sub(start), "end - start")?;
                let n = span / interval;
                if n < 1 {
                    return Err(AxisError::range(format!(
                        "interval {interval} is wider than the range [{start}, {end})"
                    )));
                }
                let covered = checked(n.checked_mul(interval), "n_interval * interval")?;
                if checked(start.checked_add(covered), "start + n_interval * interval")? != end {
                    return Err(AxisError::range(format!(
                        "interval {interval} does not evenly divide the range [{start}, {end})"
                    )));
                }
                FixedGeometry {
                    start,
                    end,
                    interval,
                    n_interval: count_from_i64(n, "n_interval")?,
                }
            }
            Self::StartEndCount {
                start,
                end,
                n_interval,
            } => {
                let span = checked(end.checked_sub(start), "end - start")?;
                let n = count_to_i64(n_interval, "n_interval")?;
                let interval = span / n;
                if interval < 1 {
                    return Err(AxisError::range(format!(
                        "range [{start}, {end}) is too short for {n_interval} intervals"
                    )));
                }
                // n * interval <= span, so this cannot overflow.
                let resolved_end = start + n * interval;
                #[cfg(feature = "tracing")]
                if resolved_end != end {
                    tracing::debug!(
                        start,
                        end,
                        resolved_end,
                        interval,
                        "n_interval does not divide the range; truncating the axis end"
                    );
                }
                FixedGeometry {
                    start,
                    end: resolved_end,
                    interval,
                    n_interval,
                }
            }
            Self::StartIntervalCount {
                start,
                interval,
                n_interval,
            } => {
                let n = count_to_i64(n_interval, "n_interval")?;
                let span = checked(n.checked_mul(interval), "n_interval * interval")?;
                FixedGeometry {
                    start,
                    end: checked(start.checked_add(span), "end")?,
                    interval,
                    n_interval,
                }
            }
            Self::EndIntervalCount {
                end,
                interval,
                n_interval,
            } => {
                let n = count_to_i64(n_interval, "n_interval")?;
                let span = checked(n.checked_mul(interval), "n_interval * interval")?;
                FixedGeometry {
                    start: checked(end.checked_sub(span), "start")?,
                    end,
                    interval,
                    n_interval,
                }
            }
        };
        Ok(geometry)
    }
}

impl FixedGeometry {
    /// Lay out the bins and verify the last upper bound lands on `end`.
    ///
    /// # Errors
    /// - `AxisError::Range` on coordinate overflow.
    /// - `AxisError::Internal` if the last upper bound differs from `end`.
    pub fn bounds(&self) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
        let (lower, upper) = equal_width_bounds(self.start, self.interval, self.n_interval)?;
        match upper.last() {
            Some(&last) if last == self.end => Ok((lower, upper)),
            last => Err(AxisError::internal(format!(
                "last element of upper_bound ({last:?}) is not the same as the resolved end ({})",
                self.end
            ))),
        }
    }
}

/// Builds an equal-width axis from any three of `start`, `end`, `interval`,
/// and `n_interval`.
///
/// ```
/// use axisutils_core::{AxisBuilder, FixedIntervalAxisBuilder};
///
/// let axis = FixedIntervalAxisBuilder::new()
///     .start(0)
///     .end(168)
///     .n_interval(7)
///     .build()
///     .unwrap();
/// assert_eq!(axis.upper_bound()[0], 24);
/// assert_eq!(axis.data_ticks()[6], 156.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedIntervalAxisBuilder {
    start: Option<i64>,
    end: Option<i64>,
    interval: Option<i64>,
    n_interval: Option<usize>,
    fraction: Fraction,
}

impl FixedIntervalAxisBuilder {
    /// Create an empty builder with a middle binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from an already-selected parameter combination.
    #[must_use]
    pub fn from_params(params: FixedIntervalParams) -> Self {
        let b = Self::new();
        match params {
            FixedIntervalParams::StartEndInterval {
                start,
                end,
                interval,
            } => b.start(start).end(end).interval(interval),
            FixedIntervalParams::StartEndCount {
                start,
                end,
                n_interval,
            } => b.start(start).end(end).n_interval(n_interval),
            FixedIntervalParams::StartIntervalCount {
                start,
                interval,
                n_interval,
            } => b.start(start).interval(interval).n_interval(n_interval),
            FixedIntervalParams::EndIntervalCount {
                end,
                interval,
                n_interval,
            } => b.end(end).interval(interval).n_interval(n_interval),
        }
    }

    /// Set the first lower bound.
    #[must_use]
    pub const fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the last upper bound.
    #[must_use]
    pub const fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the bin width.
    #[must_use]
    pub const fn interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
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

    /// The parameter combination currently configured.
    ///
    /// # Errors
    /// Returns `AxisError::Config` unless exactly three parameters are set.
    pub fn params(&self) -> Result<FixedIntervalParams, AxisError> {
        FixedIntervalParams::from_parts(self.start, self.end, self.interval, self.n_interval)
    }

    /// Resolve the full geometry without building the axis.
    ///
    /// # Errors
    /// Same as [`FixedIntervalParams::resolve`].
    pub fn resolve(&self) -> Result<FixedGeometry, AxisError> {
        self.prebuild_check()?;
        self.params()?.resolve()
    }
}

impl AxisBuilder for FixedIntervalAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.params()?.validate()?;
        self.fraction.validate()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "axisutils::fixed::build", skip(self), err)
    )]
    fn build(self) -> Result<Axis, AxisError> {
        let geometry = self.resolve()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            start = geometry.start,
            end = geometry.end,
            interval = geometry.interval,
            n_interval = geometry.n_interval,
            "resolved fixed interval geometry"
        );
        let (lower, upper) = geometry.bounds()?;
        Axis::from_bounds(lower, upper, self.fraction)
    }
}
