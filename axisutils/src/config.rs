//! Serde-driven entry point: one tagged document per axis.

use axisutils_core::{
    AxisBuilder, DailyAxisBuilder, DataTickAxisBuilder, FixedIntervalAxisBuilder,
    IntervalAxisBuilder, MonthlyAxisBuilder, RollingWindowAxisBuilder, WeeklyAxisBuilder,
    YearlyAxisBuilder,
};
use axisutils_types::{Axis, AxisError};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

/// Any axis builder, selected by the `kind` field of a config document.
///
/// The remaining fields are the chosen builder's own parameters:
///
/// ```json
/// { "kind": "fixed_interval", "start": 0, "end": 168, "interval": 24 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AxisConfig {
    /// Explicit start, end, and one or many widths.
    Interval(IntervalAxisBuilder),
    /// Equal widths from three of start, end, interval, count.
    FixedInterval(FixedIntervalAxisBuilder),
    /// One bin per day.
    Daily(DailyAxisBuilder),
    /// One bin per week.
    Weekly(WeeklyAxisBuilder),
    /// Bounds inferred from representative ticks.
    DataTicks(DataTickAxisBuilder),
    /// Overlapping sliding windows.
    RollingWindow(RollingWindowAxisBuilder),
    /// One bin per calendar month.
    Monthly(MonthlyAxisBuilder),
    /// One bin per calendar year.
    Yearly(YearlyAxisBuilder),
}

impl AxisConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    /// `AxisError::Type` when a field has the wrong shape or type (including an
    /// unknown `kind` or field); `AxisError::Config` when the document is not
    /// valid JSON.
    pub fn from_json(s: &str) -> Result<Self, AxisError> {
        serde_json::from_str(s).map_err(|e| match e.classify() {
            Category::Data => AxisError::type_error(format!("invalid axis config: {e}")),
            Category::Io | Category::Syntax | Category::Eof => {
                AxisError::config(format!("malformed axis config: {e}"))
            }
        })
    }

    /// Serialize back to a JSON document.
    ///
    /// # Errors
    /// `AxisError::Internal` if serialization fails.
    pub fn to_json(&self) -> Result<String, AxisError> {
        serde_json::to_string(self).map_err(|e| AxisError::internal(e.to_string()))
    }

    /// The `kind` tag of this config.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Interval(_) => "interval",
            Self::FixedInterval(_) => "fixed_interval",
            Self::Daily(_) => "daily",
            Self::Weekly(_) => "weekly",
            Self::DataTicks(_) => "data_ticks",
            Self::RollingWindow(_) => "rolling_window",
            Self::Monthly(_) => "monthly",
            Self::Yearly(_) => "yearly",
        }
    }
}

impl AxisBuilder for AxisConfig {
    fn prebuild_check(&self) -> Result<(), AxisError> {
        match self {
            Self::Interval(b) => b.prebuild_check(),
            Self::FixedInterval(b) => b.prebuild_check(),
            Self::Daily(b) => b.prebuild_check(),
            Self::Weekly(b) => b.prebuild_check(),
            Self::DataTicks(b) => b.prebuild_check(),
            Self::RollingWindow(b) => b.prebuild_check(),
            Self::Monthly(b) => b.prebuild_check(),
            Self::Yearly(b) => b.prebuild_check(),
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "axisutils::config::build", skip(self), fields(kind = self.kind()), err)
    )]
    fn build(self) -> Result<Axis, AxisError> {
        match self {
            Self::Interval(b) => b.build(),
            Self::FixedInterval(b) => b.build(),
            Self::Daily(b) => b.build(),
            Self::Weekly(b) => b.build(),
            Self::DataTicks(b) => b.build(),
            Self::RollingWindow(b) => b.build(),
            Self::Monthly(b) => b.build(),
            Self::Yearly(b) => b.build(),
        }
    }
}

macro_rules! impl_from_builder {
    ($($variant:ident => $builder:ty),* $(,)?) => {
        $(
            impl From<$builder> for AxisConfig {
                fn from(b: $builder) -> Self {
                    Self::$variant(b)
                }
            }
        )*
    };
}

impl_from_builder! {
    Interval => IntervalAxisBuilder,
    FixedInterval => FixedIntervalAxisBuilder,
    Daily => DailyAxisBuilder,
    Weekly => WeeklyAxisBuilder,
    DataTicks => DataTickAxisBuilder,
    RollingWindow => RollingWindowAxisBuilder,
    Monthly => MonthlyAxisBuilder,
    Yearly => YearlyAxisBuilder,
}
