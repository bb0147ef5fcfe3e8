//! The finished, immutable axis and its per-bin view.

use serde::{Deserialize, Serialize};

use crate::{AxisBinding, AxisError, Fraction};

/// One bin of an axis: `[lower_bound, upper_bound)` plus its representative tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive lower bound.
    pub lower_bound: i64,
    /// Exclusive upper bound.
    pub upper_bound: i64,
    /// Representative coordinate of the bin.
    pub data_tick: f64,
}

impl Interval {
    /// Width of the bin in coordinate units, or `None` if it does not fit in
    /// an `i64` (e.g. `[i64::MIN, i64::MAX)`).
    #[must_use]
    pub const fn width(&self) -> Option<i64> {
        self.upper_bound.checked_sub(self.lower_bound)
    }

    /// True if `x` falls inside `[lower_bound, upper_bound)`.
    #[must_use]
    pub const fn contains(&self, x: i64) -> bool {
        self.lower_bound <= x && x < self.upper_bound
    }
}

/// Immutable, ordered collection of half-open bins.
///
/// The three arrays are aligned index-for-index. Construction validates that
/// the axis is non-empty, every bin is non-degenerate (`lower < upper`), every
/// tick is finite, and the fraction is valid for the number of bins.
///
/// Serializes as
/// `{"nelem": N, "lower_bound": [..], "upper_bound": [..], "data_ticks": [..], "fraction": ..}`;
/// deserialization re-runs the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisRepr", into = "AxisRepr")]
pub struct Axis {
    lower_bound: Vec<i64>,
    upper_bound: Vec<i64>,
    data_ticks: Vec<f64>,
    fraction: Fraction,
}

#[derive(Serialize, Deserialize)]
struct AxisRepr {
    nelem: usize,
    lower_bound: Vec<i64>,
    upper_bound: Vec<i64>,
    data_ticks: Vec<f64>,
    #[serde(default)]
    fraction: Fraction,
}

impl TryFrom<AxisRepr> for Axis {
    type Error = AxisError;

    fn try_from(r: AxisRepr) -> Result<Self, Self::Error> {
        if r.nelem != r.lower_bound.len() {
            return Err(AxisError::config(format!(
                "nelem is {} but {} lower bounds were provided",
                r.nelem,
                r.lower_bound.len()
            )));
        }
        Self::new(r.lower_bound, r.upper_bound, r.data_ticks, r.fraction)
    }
}

impl From<Axis> for AxisRepr {
    fn from(a: Axis) -> Self {
        Self {
            nelem: a.lower_bound.len(),
            lower_bound: a.lower_bound,
            upper_bound: a.upper_bound,
            data_ticks: a.data_ticks,
            fraction: a.fraction,
        }
    }
}

impl Axis {
    /// Create an axis from explicit bounds and ticks.
    ///
    /// # Errors
    /// - `AxisError::Config` if the three arrays differ in length or a
    ///   per-interval fraction has the wrong length.
    /// - `AxisError::Range` if the axis is empty, any bin has
    ///   `lower_bound >= upper_bound`, a tick is not finite, or a fraction is
    ///   outside `[0, 1]`.
    pub fn new(
        lower_bound: Vec<i64>,
        upper_bound: Vec<i64>,
        data_ticks: Vec<f64>,
        fraction: Fraction,
    ) -> Result<Self, AxisError> {
        let n = lower_bound.len();
        if upper_bound.len() != n || data_ticks.len() != n {
            return Err(AxisError::config(format!(
                "lower_bound, upper_bound, and data_ticks must have the same length (got {n}, {}, {})",
                upper_bound.len(),
                data_ticks.len()
            )));
        }
        if n == 0 {
            return Err(AxisError::range("an axis must contain at least one interval"));
        }
        if let Some(i) = lower_bound
            .iter()
            .zip(&upper_bound)
            .position(|(lo, hi)| lo >= hi)
        {
            return Err(AxisError::range(format!(
                "interval {i} is degenerate: lower_bound {} is not below upper_bound {}",
                lower_bound[i], upper_bound[i]
            )));
        }
        if let Some(i) = data_ticks.iter().position(|t| !t.is_finite()) {
            return Err(AxisError::range(format!(
                "data tick {i} is not finite: {}",
                data_ticks[i]
            )));
        }
        fraction.validate_for(n)?;

        Ok(Self {
            lower_bound,
            upper_bound,
            data_ticks,
            fraction,
        })
    }

    /// Create an axis whose ticks follow `(1 - f) * lower + f * upper`.
    ///
    /// # Errors
    /// Same as [`Axis::new`].
    pub fn from_bounds(
        lower_bound: Vec<i64>,
        upper_bound: Vec<i64>,
        fraction: Fraction,
    ) -> Result<Self, AxisError> {
        if lower_bound.len() != upper_bound.len() {
            return Err(AxisError::config(format!(
                "lower_bound and upper_bound must have the same length (got {} and {})",
                lower_bound.len(),
                upper_bound.len()
            )));
        }
        fraction.validate_for(lower_bound.len())?;
        let data_ticks = lower_bound
            .iter()
            .zip(&upper_bound)
            .enumerate()
            .map(|(i, (&lo, &hi))| fraction.tick(i, lo, hi))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| AxisError::internal("per-interval fraction shorter than the axis"))?;
        Self::new(lower_bound, upper_bound, data_ticks, fraction)
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower_bound.len()
    }

    /// Always false: an empty axis cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower_bound.is_empty()
    }

    /// Inclusive lower bounds.
    #[must_use]
    pub fn lower_bound(&self) -> &[i64] {
        &self.lower_bound
    }

    /// Exclusive upper bounds.
    #[must_use]
    pub fn upper_bound(&self) -> &[i64] {
        &self.upper_bound
    }

    /// Representative ticks.
    #[must_use]
    pub fn data_ticks(&self) -> &[f64] {
        &self.data_ticks
    }

    /// Tick placement used when the axis was built.
    #[must_use]
    pub const fn fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Canonical binding, if the fraction is uniform.
    #[must_use]
    pub fn binding(&self) -> Option<AxisBinding> {
        self.fraction.binding()
    }

    /// Bin at index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Interval> {
        Some(Interval {
            lower_bound: *self.lower_bound.get(i)?,
            upper_bound: *self.upper_bound.get(i)?,
            data_tick: *self.data_ticks.get(i)?,
        })
    }

    /// Iterate over all bins in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Interval> + '_ {
        self.lower_bound
            .iter()
            .zip(&self.upper_bound)
            .zip(&self.data_ticks)
            .map(|((&lower_bound, &upper_bound), &data_tick)| Interval {
                lower_bound,
                upper_bound,
                data_tick,
            })
    }

    /// True if every bin ends exactly where the next one begins.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.upper_bound
            .iter()
            .zip(self.lower_bound.iter().skip(1))
            .all(|(hi, next_lo)| hi == next_lo)
    }

    /// Lower bound of the first bin.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.lower_bound[0]
    }

    /// Upper bound of the last bin.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.upper_bound[self.upper_bound.len() - 1]
    }
}
