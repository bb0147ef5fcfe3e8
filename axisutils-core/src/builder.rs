use axisutils_types::{Axis, AxisError};

/// Common contract of every axis builder.
///
/// Builders are short-lived configuration values: setters accumulate state,
/// [`prebuild_check`](AxisBuilder::prebuild_check) validates it without side
/// effects, and [`build`](AxisBuilder::build) consumes the builder and returns
/// the finished [`Axis`]. Because `build` takes `self`, a builder cannot be
/// built twice; clone it first to derive several axes from one configuration.
pub trait AxisBuilder {
    /// Validate the accumulated configuration.
    ///
    /// Idempotent and side-effect free; `build` calls it internally.
    ///
    /// # Errors
    /// Returns the first configuration, type, or range violation found.
    fn prebuild_check(&self) -> Result<(), AxisError>;

    /// Consume the builder and produce the axis.
    ///
    /// # Errors
    /// Everything `prebuild_check` reports, plus errors that only surface while
    /// resolving the bounds (divisibility, overflow, empty result) and
    /// `AxisError::Internal` if a post-construction check fails.
    fn build(self) -> Result<Axis, AxisError>;
}

/// Map an overflowing checked operation to a range error naming the quantity.
pub(crate) fn checked(v: Option<i64>, what: &str) -> Result<i64, AxisError> {
    v.ok_or_else(|| AxisError::range(format!("{what} overflows the coordinate type")))
}

pub(crate) fn count_to_i64(n: usize, what: &str) -> Result<i64, AxisError> {
    i64::try_from(n).map_err(|_| AxisError::range(format!("{what} {n} is too large")))
}

pub(crate) fn count_from_i64(n: i64, what: &str) -> Result<usize, AxisError> {
    usize::try_from(n).map_err(|_| AxisError::range(format!("{what} {n} is not a valid count")))
}

/// Empty lower/upper buffers with room for `n` bins.
///
/// The count comes from the caller, so an impossible reservation is reported
/// instead of aborting.
pub(crate) fn bound_buffers(n: usize) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
    let reserve = |v: &mut Vec<i64>| {
        v.try_reserve_exact(n)
            .map_err(|e| AxisError::range(format!("cannot allocate {n} intervals: {e}")))
    };
    let (mut lower, mut upper) = (Vec::new(), Vec::new());
    reserve(&mut lower)?;
    reserve(&mut upper)?;
    Ok((lower, upper))
}

/// `n` back-to-back bins of equal `width` starting at `start`.
pub(crate) fn equal_width_bounds(
    start: i64,
    width: i64,
    n: usize,
) -> Result<(Vec<i64>, Vec<i64>), AxisError> {
    let (mut lower, mut upper) = bound_buffers(n)?;
    let mut lo = start;
    for _ in 0..n {
        let hi = checked(lo.checked_add(width), "upper bound")?;
        lower.push(lo);
        upper.push(hi);
        lo = hi;
    }
    Ok((lower, upper))
}
