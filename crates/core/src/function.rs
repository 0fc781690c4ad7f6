//! The [`Function`] capability and the function families built on it.
//!
//! # Provided Functions
//!
//! - [`LinearFunction`]: `f(x) = Σ cᵢ·xᵢ`, with a constant gradient
//! - [`QuadraticFunction`]: `f(x) = Σ cᵢ·xᵢ²`, diagonal only (no cross terms)
//!
//! # Extending
//!
//! Any type implementing [`Function`] can be used wherever the provided
//! families are, including behind `Box`, `Arc`, or a plain reference.

mod linear;
mod quadratic;

use std::{borrow::Cow, sync::Arc};

use crate::DimensionError;

pub use linear::LinearFunction;
pub use quadratic::QuadraticFunction;

/// A scalar function of an n-dimensional point with an analytic gradient.
///
/// Implementations are immutable after construction, so evaluating the same
/// instance from several places (or threads, for `Sync` types) is safe.
///
/// The lenient entry points, [`value`](Self::value) and
/// [`gradient`](Self::gradient), do not check the point's length against
/// [`dimension`](Self::dimension). The `checked_*` methods do.
pub trait Function {
    /// Returns the number of coefficients that define this function.
    fn dimension(&self) -> usize;

    /// Evaluates the function at `point`.
    ///
    /// Coefficients are paired with coordinates up to the shorter of the two.
    /// Unmatched trailing entries on either side are ignored.
    fn value(&self, point: &[f64]) -> f64;

    /// Returns the direction of steepest ascent at `point`.
    ///
    /// The result may borrow from the function's own storage and must be
    /// treated as read-only.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] if `point` is too short for the gradient
    /// to be computed.
    fn gradient(&self, point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError>;

    /// Evaluates the function after requiring `point.len() == self.dimension()`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if the lengths differ.
    fn checked_value(&self, point: &[f64]) -> Result<f64, DimensionError> {
        DimensionError::check_exact(self.dimension(), point.len())?;
        Ok(self.value(point))
    }

    /// Computes the gradient after requiring `point.len() == self.dimension()`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if the lengths differ.
    fn checked_gradient(&self, point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError> {
        DimensionError::check_exact(self.dimension(), point.len())?;
        self.gradient(point)
    }
}

macro_rules! forward_function {
    ($($ty:ty),*) => {$(
        impl<F: Function + ?Sized> Function for $ty {
            fn dimension(&self) -> usize {
                (**self).dimension()
            }

            fn value(&self, point: &[f64]) -> f64 {
                (**self).value(point)
            }

            fn gradient(&self, point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError> {
                (**self).gradient(point)
            }

            fn checked_value(&self, point: &[f64]) -> Result<f64, DimensionError> {
                (**self).checked_value(point)
            }

            fn checked_gradient(&self, point: &[f64]) -> Result<Cow<'_, [f64]>, DimensionError> {
                (**self).checked_gradient(point)
            }
        }
    )*};
}

forward_function!(&F, Box<F>, Arc<F>);
