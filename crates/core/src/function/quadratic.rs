use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DimensionError, Function};

/// A diagonal quadratic form `f(x) = Σ cᵢ·xᵢ²`, with no cross terms.
///
/// [`Function::value`] pairs coefficients with coordinates up to the shorter
/// of the two, but [`Function::gradient`] indexes the point by every
/// coefficient. A point shorter than the coefficient vector can therefore be
/// evaluated but has no gradient.
///
/// # Example
///
/// ```
/// use levelset_core::{DimensionError, Function, QuadraticFunction};
///
/// let f = QuadraticFunction::new(vec![2.0, 3.0, -1.0, -2.0]);
/// assert_eq!(f.value(&[1.0, 2.0]), 14.0);
/// assert_eq!(
///     f.gradient(&[1.0, 2.0]),
///     Err(DimensionError::TooShort { required: 4, actual: 2 }),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticFunction {
    coefficients: Vec<f64>,
}

impl QuadraticFunction {
    /// Creates a quadratic function from its diagonal coefficients.
    ///
    /// The coefficients are stored as given, and an empty vector is allowed.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the diagonal coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Function for QuadraticFunction {
    fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    fn value(&self, point: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(point)
            .map(|(coeff, coord)| coeff * coord * coord)
            .sum()
    }

    /// Returns `2·cᵢ·xᵢ` for every coefficient.
    ///
    /// Coordinates past the last coefficient are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::TooShort`] if `point` has fewer entries than
    /// there are coefficients.
    fn gradient(&self, point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError> {
        DimensionError::check_at_least(self.coefficients.len(), point.len())?;

        let gradient = self
            .coefficients
            .iter()
            .zip(point)
            .map(|(coeff, coord)| 2.0 * coeff * coord)
            .collect();

        Ok(Cow::Owned(gradient))
    }
}

impl From<Vec<f64>> for QuadraticFunction {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl<const N: usize> From<[f64; N]> for QuadraticFunction {
    fn from(coefficients: [f64; N]) -> Self {
        Self::new(coefficients.to_vec())
    }
}
