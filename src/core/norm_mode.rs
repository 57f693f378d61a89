use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::core::norm::Norm;
use crate::metrics::euclidean::{Euclidean, EuclideanNormalised};
use crate::metrics::max_norm::MaxNorm;

/// Selects which norm distance computations use.
///
/// Parsing from a string is case-insensitive and lenient: any token other
/// than `"EUCLIDEAN_NORMALISED"` or `"MAX_NORM"` selects [`NormMode::Euclidean`].
/// A typo in a mode name therefore succeeds silently with the Euclidean norm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NormMode {
    /// `sqrt(sum((a[i] - b[i])^2))`
    #[default]
    Euclidean,
    /// Euclidean norm divided by `sqrt(dims)`.
    EuclideanNormalised,
    /// Chebyshev distance: `max(|a[i] - b[i]|)`
    MaxNorm,
}

impl NormMode {
    /// Every mode, in token order.
    pub const ALL: [NormMode; 3] = [
        NormMode::Euclidean,
        NormMode::EuclideanNormalised,
        NormMode::MaxNorm,
    ];

    /// Canonical string token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euclidean => "EUCLIDEAN",
            Self::EuclideanNormalised => "EUCLIDEAN_NORMALISED",
            Self::MaxNorm => "MAX_NORM",
        }
    }

    /// Resolve a mode token, ignoring ASCII case.
    ///
    /// Unrecognised names fall back to [`NormMode::Euclidean`].
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(Self::EuclideanNormalised.as_str()) {
            Self::EuclideanNormalised
        } else if name.eq_ignore_ascii_case(Self::MaxNorm.as_str()) {
            Self::MaxNorm
        } else {
            Self::Euclidean
        }
    }

    /// Distance between `a` and `b` under this mode.
    ///
    /// Lengths are not checked; use [`crate::DistanceEngine::norm`] for a
    /// validated call.
    #[inline]
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Self::Euclidean => Euclidean::distance(a, b),
            Self::EuclideanNormalised => EuclideanNormalised::distance(a, b),
            Self::MaxNorm => MaxNorm::distance(a, b),
        }
    }
}

impl fmt::Display for NormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for NormMode {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for NormMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
