#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The tolerance used to decide whether a constraint holds with equality.
///
/// A constraint `f(x) <= b` is active at `x` when `|f(x) - b| < tolerance`.
///
/// The default is the smallest positive `f64` (a subnormal, about 4.94e-324).
/// With it the test passes only when `f(x) - b` is exactly zero, so a point
/// that lies on the boundary mathematically may still miss it after rounding.
/// Use [`Tolerance::new`] to opt into a looser test.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Tolerance(f64);

/// Errors that can occur when validating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("tolerance must be finite")]
    NotFinite,

    #[error("tolerance must be strictly positive")]
    NotPositive,
}

impl Tolerance {
    /// Near-exact equality: the smallest positive `f64`.
    pub const EXACT: Self = Self(f64::from_bits(1));

    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite, zero, or negative.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ToleranceError::NotPositive);
        }

        Ok(Self(value))
    }

    /// Returns the tolerance as a plain `f64`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if `a` and `b` differ by less than this tolerance.
    #[must_use]
    pub fn is_within(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}
