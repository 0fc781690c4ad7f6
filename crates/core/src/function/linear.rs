use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DimensionError, Function};

/// A linear function `f(x) = Σ cᵢ·xᵢ`.
///
/// The gradient is the coefficient vector itself. It does not depend on the
/// point, so [`Function::gradient`] borrows the stored coefficients instead of
/// copying them.
///
/// # Example
///
/// ```
/// use levelset_core::{Function, LinearFunction};
///
/// let f = LinearFunction::new(vec![2.0, 3.0]);
/// assert_eq!(f.value(&[1.0, 2.0]), 8.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearFunction {
    coefficients: Vec<f64>,
}

impl LinearFunction {
    /// Creates a linear function from its coefficients.
    ///
    /// The coefficients are stored as given, and an empty vector is allowed.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, which are also the gradient.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Function for LinearFunction {
    fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    fn value(&self, point: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(point)
            .map(|(coeff, coord)| coeff * coord)
            .sum()
    }

    /// Returns the stored coefficients for any `point`, including one of a
    /// different length.
    fn gradient(&self, _point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError> {
        Ok(Cow::Borrowed(&self.coefficients))
    }
}

impl From<Vec<f64>> for LinearFunction {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl<const N: usize> From<[f64; N]> for LinearFunction {
    fn from(coefficients: [f64; N]) -> Self {
        Self::new(coefficients.to_vec())
    }
}
