//! Infer bin boundaries from representative ticks alone.

use core::fmt;
use core::str::FromStr;

use axisutils_types::{Axis, AxisError, Fraction};
use serde::{Deserialize, Serialize};

use crate::builder::{AxisBuilder, checked};
use crate::time::IntoTimestamp;

/// Policy for placing the boundary between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum BoundaryType {
    /// Boundaries at the floored midpoint between neighbours; the outer edges
    /// mirror the first and last gap.
    #[default]
    Centered,
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centered => f.write_str("centered"),
        }
    }
}

impl FromStr for BoundaryType {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centered" => Ok(Self::Centered),
            _ => Err(AxisError::config(format!(
                "unrecognized boundary type '{s}'; currently acceptable values are: [centered]"
            ))),
        }
    }
}

/// `floor((a + b) / 2)` without overflowing on the intermediate sum.
fn floor_midpoint(a: i64, b: i64) -> Result<i64, AxisError> {
    let gap = checked(b.checked_sub(a), "tick gap")?;
    checked(a.checked_add(gap.div_euclid(2)), "tick midpoint")
}

/// Lower and upper bounds for `ticks` under the centered policy.
///
/// Interior boundaries are `floor((t[i] + t[i+1]) / 2)`. The first lower bound
/// is `2*t[0] - mid(0, 1)` and the last upper bound `2*t[n-1] - mid(n-2, n-1)`.
///
/// # Errors
/// Returns `AxisError::Range` for fewer than two ticks or on overflow.
pub fn centered_bounds(ticks: &[i64]) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
    let n = ticks.len();
    if n < 2 {
        return Err(AxisError::range(format!(
            "at least two data ticks are required to infer boundaries, got {n}"
        )));
    }
    let mids = ticks
        .windows(2)
        .map(|w| floor_midpoint(w[0], w[1]))
        .collect::<Result<Vec<_>, _>>()?;

    let reflect = |t: i64, m: i64| {
        checked(
            t.checked_mul(2).and_then(|d| d.checked_sub(m)),
            "extrapolated edge",
        )
    };
    let first = reflect(ticks[0], mids[0])?;
    let last = reflect(ticks[n - 1], mids[n - 2])?;

    let mut lower = Vec::with_capacity(n);
    lower.push(first);
    lower.extend_from_slice(&mids);

    let mut upper = mids;
    upper.push(last);
    Ok((lower, upper))
}

/// Builds an axis whose ticks are given and whose bounds are inferred.
///
/// The ticks are passed through unchanged; only the bounds are derived.
///
/// ```
/// use axisutils_core::{AxisBuilder, DataTickAxisBuilder};
///
/// let axis = DataTickAxisBuilder::new()
///     .data_ticks([0_i64, 10, 20])
///     .build()
///     .unwrap();
/// assert_eq!(axis.lower_bound(), &[-5, 5, 15]);
/// assert_eq!(axis.upper_bound(), &[5, 15, 25]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataTickAxisBuilder {
    data_ticks: Option<Vec<i64>>,
    boundary_type: BoundaryType,
}

impl DataTickAxisBuilder {
    /// Create an empty builder with centered boundaries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticks from raw coordinates or calendar values.
    #[must_use]
    pub fn data_ticks<I, T>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoTimestamp,
    {
        self.data_ticks = Some(ticks.into_iter().map(|t| t.timestamp_micros()).collect());
        self
    }

    /// Set the boundary policy.
    #[must_use]
    pub const fn boundary_type(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = boundary_type;
        self
    }

    fn validated(&self) -> Result<&[i64], AxisError> {
        let Some(ticks) = self.data_ticks.as_deref() else {
            return Err(AxisError::config("data_ticks are not set yet"));
        };
        if ticks.len() < 2 {
            return Err(AxisError::range(format!(
                "at least two data ticks are required to infer boundaries, got {}",
                ticks.len()
            )));
        }
        if let Some(i) = ticks.windows(2).position(|w| w[0] >= w[1]) {
            return Err(AxisError::range(format!(
                "data ticks must be strictly increasing; tick {} ({}) is not below tick {} ({})",
                i,
                ticks[i],
                i + 1,
                ticks[i + 1]
            )));
        }
        Ok(ticks)
    }
}

impl AxisBuilder for DataTickAxisBuilder {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        self.validated().map(|_| ())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "axisutils::ticks::build",
            skip(self),
            fields(boundary_type = %self.boundary_type),
            err,
        )
    )]
    #[allow(clippy::cast_precision_loss)]
    fn build(self) -> Result<Axis, AxisError> {
        let ticks = self.validated()?;
        let (lower, upper) = match self.boundary_type {
            BoundaryType::Centered => centered_bounds(ticks)?,
        };
        let data_ticks = ticks.iter().map(|&t| t as f64).collect();
        Axis::new(lower, upper, data_ticks, Fraction::default())
    }
}
