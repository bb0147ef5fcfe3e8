//! Axis entity, binding policy, and error types shared across the axisutils crates.
#![warn(missing_docs)]

mod axis;
/// Data tick placement policies.
pub mod binding;
/// Error taxonomy for axis construction.
pub mod error;

pub use axis::{Axis, Interval};
pub use binding::{AxisBinding, Fraction};
pub use error::{AxisError, ErrorKind};
