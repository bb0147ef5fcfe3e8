use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for axis construction.
///
/// The four variants separate what the caller got wrong (configuration, types,
/// ranges) from a failed post-construction check that signals a bug in the
/// builder arithmetic itself.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AxisError {
    /// Wrong number or combination of parameters, a missing parameter, or an
    /// unrecognized policy name.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A supplied value could not be coerced to the expected numeric or date type.
    #[error("type error: {0}")]
    Type(String),

    /// A value violates an ordering, positivity, or divisibility requirement.
    #[error("out of range: {0}")]
    Range(String),

    /// A defensive check after construction failed.
    #[error("internal consistency check failed: {0}")]
    Internal(String),
}

/// Discriminant of [`AxisError`] for callers that only need to branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`AxisError::Config`].
    Config,
    /// See [`AxisError::Type`].
    Type,
    /// See [`AxisError::Range`].
    Range,
    /// See [`AxisError::Internal`].
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Config => "config",
            Self::Type => "type",
            Self::Range => "range",
            Self::Internal => "internal",
        };
        f.write_str(s)
    }
}

impl AxisError {
    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build a `Type` error.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Helper: build a `Range` error.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Helper: build an `Internal` error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Type(_) => ErrorKind::Type,
            Self::Range(_) => ErrorKind::Range,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for errors caused by caller input rather than a builder defect.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
