//! Data binding policies: where inside a bin its representative tick sits.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AxisError;

const ACCEPTED_NAMES: [&str; 6] = ["beginning", "left", "end", "right", "middle", "center"];

/// Relative placement of a data tick inside its bin.
///
/// `fraction()` maps each policy to a value in `[0, 1]` where 0 is the lower
/// bound and 1 the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisBinding {
    /// Tick at the lower bound.
    Beginning,
    /// Tick halfway between the bounds.
    #[default]
    Middle,
    /// Tick at the upper bound.
    End,
    /// Tick at an arbitrary fraction in `[0, 1]`.
    Custom(f64),
}

impl AxisBinding {
    /// Fraction of the bin width at which the tick is placed.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Beginning => 0.0,
            Self::Middle => 0.5,
            Self::End => 1.0,
            Self::Custom(f) => f,
        }
    }

    /// Classify a numeric fraction into its canonical binding.
    ///
    /// # Errors
    /// Returns `AxisError::Range` if `f` is not within `[0, 1]`.
    pub fn from_fraction(f: f64) -> Result<Self, AxisError> {
        if !(0.0..=1.0).contains(&f) {
            return Err(AxisError::range(format!(
                "binding fraction must be between 0 and 1, got {f}"
            )));
        }
        #[allow(clippy::float_cmp)]
        let binding = if f == 0.0 {
            Self::Beginning
        } else if f == 0.5 {
            Self::Middle
        } else if f == 1.0 {
            Self::End
        } else {
            Self::Custom(f)
        };
        Ok(binding)
    }
}

impl fmt::Display for AxisBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginning => f.write_str("beginning"),
            Self::Middle => f.write_str("middle"),
            Self::End => f.write_str("end"),
            Self::Custom(v) => write!(f, "custom_fraction({v})"),
        }
    }
}

impl FromStr for AxisBinding {
    type Err = AxisError;

    /// Parse a binding name (`beginning`/`left`, `middle`/`center`, `end`/`right`)
    /// or a numeric fraction such as `"0.25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "beginning" | "left" => Ok(Self::Beginning),
            "end" | "right" => Ok(Self::End),
            "middle" | "center" => Ok(Self::Middle),
            other => match other.parse::<f64>() {
                Ok(v) => Self::from_fraction(v),
                Err(_) => Err(AxisError::config(format!(
                    "could not find the axis binding associated to '{s}'; possible options are [{}] or a number between 0 and 1",
                    ACCEPTED_NAMES.join(", ")
                ))),
            },
        }
    }
}

/// Tick placement for a whole axis: one fraction for every bin, or one per bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fraction {
    /// The same fraction applies to every bin.
    Uniform(f64),
    /// One fraction per bin, aligned index-for-index with the bounds.
    PerInterval(Vec<f64>),
}

impl Default for Fraction {
    fn default() -> Self {
        Self::Uniform(AxisBinding::default().fraction())
    }
}

impl From<AxisBinding> for Fraction {
    fn from(b: AxisBinding) -> Self {
        Self::Uniform(b.fraction())
    }
}

impl From<f64> for Fraction {
    fn from(f: f64) -> Self {
        Self::Uniform(f)
    }
}

impl From<Vec<f64>> for Fraction {
    fn from(v: Vec<f64>) -> Self {
        Self::PerInterval(v)
    }
}

impl Fraction {
    /// Ensure every fraction lies within `[0, 1]`.
    ///
    /// # Errors
    /// - `AxisError::Range` if any value is outside `[0, 1]` (NaN included).
    /// - `AxisError::Config` if a per-interval fraction is empty.
    pub fn validate(&self) -> Result<(), AxisError> {
        let check = |f: f64| {
            if (0.0..=1.0).contains(&f) {
                Ok(())
            } else {
                Err(AxisError::range(format!(
                    "fraction must be between 0 and 1, got {f}"
                )))
            }
        };
        match self {
            Self::Uniform(f) => check(*f),
            Self::PerInterval(v) => {
                if v.is_empty() {
                    return Err(AxisError::config("per-interval fraction is empty"));
                }
                v.iter().copied().try_for_each(check)
            }
        }
    }

    /// Ensure the fraction is valid for an axis with `n` bins.
    ///
    /// # Errors
    /// Everything [`validate`](Self::validate) rejects, plus `AxisError::Config`
    /// when a per-interval fraction does not have exactly `n` entries.
    pub fn validate_for(&self, n: usize) -> Result<(), AxisError> {
        self.validate()?;
        if let Self::PerInterval(v) = self {
            if v.len() != n {
                return Err(AxisError::config(format!(
                    "per-interval fraction has {} entries but the axis has {n} intervals",
                    v.len()
                )));
            }
        }
        Ok(())
    }

    /// Fraction applied to bin `i`; `None` past the end of a per-interval list.
    #[must_use]
    pub fn at(&self, i: usize) -> Option<f64> {
        match self {
            Self::Uniform(f) => Some(*f),
            Self::PerInterval(v) => v.get(i).copied(),
        }
    }

    /// `(1 - f) * lower + f * upper` for bin `i`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&self, i: usize, lower: i64, upper: i64) -> Option<f64> {
        let f = self.at(i)?;
        Some((1.0 - f) * lower as f64 + f * upper as f64)
    }

    /// Canonical binding when the fraction is uniform and in range.
    #[must_use]
    pub fn binding(&self) -> Option<AxisBinding> {
        match self {
            Self::Uniform(f) => AxisBinding::from_fraction(*f).ok(),
            Self::PerInterval(_) => None,
        }
    }
}
