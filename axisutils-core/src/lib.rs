//! axisutils-core
//!
//! Builders that turn a partial description of a binning into a complete,
//! validated [`Axis`].
//!
//! - `interval`: explicit start, end, and one or many widths.
//! - `fixed`: equal widths from any three of start, end, interval, count.
//! - `ticks`: bounds inferred from representative ticks.
//! - `rolling`: overlapping fixed-stride windows.
//! - `time`: daily, weekly, monthly, and yearly axes plus timestamp helpers.
//!
//! All builders follow the same lifecycle: configure through chained setters
//! (or deserialize from a serde source), optionally call
//! [`AxisBuilder::prebuild_check`], then consume the builder with
//! [`AxisBuilder::build`].
//!
//! Coordinates are opaque `i64` values. The calendar-aware builders use
//! microseconds since the Unix epoch in UTC.
//!
//! Enable the `tracing` feature to get spans around every `build` and debug
//! events for resolved geometry and truncation.
#![warn(missing_docs)]

mod builder;
/// Equal-width axes from three of four parameters.
pub mod fixed;
/// Axes from explicit widths.
pub mod interval;
/// Overlapping sliding windows.
pub mod rolling;
/// Boundary inference from ticks.
pub mod ticks;
/// Calendar-aware builders and timestamp conversion.
pub mod time;

pub use axisutils_types::{Axis, AxisBinding, AxisError, ErrorKind, Fraction, Interval};
pub use builder::AxisBuilder;
pub use fixed::{FixedGeometry, FixedIntervalAxisBuilder, FixedIntervalParams};
pub use interval::{IntervalAxisBuilder, IntervalWidth};
pub use rolling::RollingWindowAxisBuilder;
pub use ticks::{BoundaryType, DataTickAxisBuilder, centered_bounds};
pub use time::calendar::{MonthlyAxisBuilder, YearlyAxisBuilder};
pub use time::known::{
    DailyAxisBuilder, Day, KnownInterval, KnownIntervalAxisBuilder, Week, WeeklyAxisBuilder,
};
pub use time::{DAY_MICROS, IntoTimestamp, MICROS_PER_SECOND, WEEK_MICROS};
