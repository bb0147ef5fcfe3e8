//! axisutils builds validated binning axes from partial descriptions.
//!
//! Overview
//! - An [`Axis`] is an ordered set of bins, each with an integer
//!   `[lower_bound, upper_bound)` and a representative `data_tick`.
//! - Builders accept whichever parameters the caller knows and derive the
//!   rest: explicit widths, three-of-four fixed geometry, daily/weekly/monthly/
//!   yearly calendars, overlapping rolling windows, or bounds inferred from
//!   ticks alone.
//! - Every builder validates before it builds and reports failures through one
//!   [`AxisError`] taxonomy (`Config`, `Type`, `Range`, `Internal`).
//! - [`AxisConfig`] selects a builder from a tagged serde document, so axes can
//!   be declared in JSON configuration.
//!
//! Key behaviors and trade-offs
//! - Fixed geometry: `{start, end, interval}` must divide exactly, while
//!   `{start, end, n_interval}` truncates the end to `start + n * interval`.
//! - Explicit widths: a trailing partial interval is dropped rather than
//!   rejected.
//! - Calendar axes: dates are midnight UTC in microseconds; months and years are
//!   half-open `[first day, first day of the next period)`.
//! - Rolling windows overlap by design and are the only non-contiguous axes.
//!
//! Examples
//! Three equivalent ways to describe a week of daily bins:
//! ```rust
//! use axisutils::{AxisBuilder, AxisConfig, DailyAxisBuilder, FixedIntervalAxisBuilder, DAY_MICROS};
//! use chrono::NaiveDate;
//!
//! let jan1 = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let daily = DailyAxisBuilder::new().start_date(jan1).n_interval(7).build()?;
//!
//! let t0 = 1_546_300_800_000_000;
//! let fixed = FixedIntervalAxisBuilder::new()
//!     .start(t0)
//!     .interval(DAY_MICROS)
//!     .n_interval(7)
//!     .build()?;
//!
//! let from_json = AxisConfig::from_json(
//!     r#"{ "kind": "daily", "start_date": "2019-01-01", "end_date": "2019-01-08" }"#,
//! )?
//! .build()?;
//!
//! assert_eq!(daily, fixed);
//! assert_eq!(daily, from_json);
//! # Ok::<(), axisutils::AxisError>(())
//! ```
//!
//! See `axisutils/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod config;

pub use config::AxisConfig;

pub use axisutils_types::{Axis, AxisBinding, AxisError, ErrorKind, Fraction, Interval};

// Re-export the builder family for convenience
pub use axisutils_core::{
    AxisBuilder,
    BoundaryType,
    DAY_MICROS,
    DailyAxisBuilder,
    DataTickAxisBuilder,
    Day,
    FixedGeometry,
    FixedIntervalAxisBuilder,
    FixedIntervalParams,
    IntervalAxisBuilder,
    IntervalWidth,
    IntoTimestamp,
    KnownInterval,
    KnownIntervalAxisBuilder,
    MICROS_PER_SECOND,
    MonthlyAxisBuilder,
    RollingWindowAxisBuilder,
    WEEK_MICROS,
    Week,
    WeeklyAxisBuilder,
    YearlyAxisBuilder,
    centered_bounds,
};

/// Calendar and timestamp helpers.
pub use axisutils_core::time;
