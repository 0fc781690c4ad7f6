use std::{fmt, sync::Arc};

use levelset_core::{DimensionError, Function};

use crate::Tolerance;

/// A function that can be shared across constraints, sets, and threads.
pub type SharedFunction = Arc<dyn Function + Send + Sync>;

/// An inequality constraint `f(x) <= bound`.
///
/// Constraints are immutable. Cloning one shares its function.
#[derive(Clone)]
pub struct Constraint {
    function: SharedFunction,
    bound: f64,
}

impl Constraint {
    /// Creates a constraint requiring `function(x) <= bound`.
    #[must_use]
    pub fn new(function: SharedFunction, bound: f64) -> Self {
        Self { function, bound }
    }

    /// Returns the constrained function.
    #[must_use]
    pub fn function(&self) -> &SharedFunction {
        &self.function
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Evaluates the constrained function at `point`, without a dimension check.
    #[must_use]
    pub fn value(&self, point: &[f64]) -> f64 {
        self.function.value(point)
    }

    /// Evaluates the constrained function at `point`, requiring an exact
    /// dimension match.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] if `point` does not fit the function.
    pub fn checked_value(&self, point: &[f64]) -> Result<f64, DimensionError> {
        self.function.checked_value(point)
    }

    /// Returns `bound - f(point)`, which is non-negative iff the constraint holds.
    #[must_use]
    pub fn slack(&self, point: &[f64]) -> f64 {
        self.bound - self.value(point)
    }

    /// Returns `true` if `f(point) <= bound`.
    #[must_use]
    pub fn is_satisfied(&self, point: &[f64]) -> bool {
        self.value(point) <= self.bound
    }

    /// Returns `true` if `f(point)` equals `bound` within `tolerance`.
    #[must_use]
    pub fn is_active(&self, point: &[f64], tolerance: Tolerance) -> bool {
        tolerance.is_within(self.value(point), self.bound)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("dimension", &self.function.dimension())
            .field("bound", &self.bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use levelset_core::{LinearFunction, QuadraticFunction};

    #[test]
    fn satisfied_at_and_below_bound() {
        let c = Constraint::new(Arc::new(LinearFunction::new(vec![1.0, 1.0])), 2.0);

        assert!(c.is_satisfied(&[0.5, 0.5]));
        assert!(c.is_satisfied(&[1.0, 1.0]));
        assert!(!c.is_satisfied(&[1.0, 1.5]));
    }

    #[test]
    fn slack_measures_distance_to_bound() {
        let c = Constraint::new(Arc::new(QuadraticFunction::new(vec![1.0, 1.0])), 25.0);

        assert_relative_eq!(c.slack(&[3.0, 0.0]), 16.0);
        assert_relative_eq!(c.slack(&[3.0, 4.0]), 0.0);
        assert_relative_eq!(c.slack(&[6.0, 8.0]), -75.0);
    }

    #[test]
    fn active_only_on_exact_hit_by_default() {
        let c = Constraint::new(Arc::new(LinearFunction::new(vec![2.0, 3.0])), 8.0);

        assert!(c.is_active(&[1.0, 2.0], Tolerance::default()));
        assert!(!c.is_active(&[1.0, 2.0 + 1e-12], Tolerance::default()));
        assert!(c.is_active(&[1.0, 2.0 + 1e-12], Tolerance::new(1e-9).unwrap()));
    }

    #[test]
    fn clones_share_the_function() {
        let f: SharedFunction = Arc::new(LinearFunction::new(vec![1.0]));
        let a = Constraint::new(Arc::clone(&f), 1.0);
        let b = a.clone();

        assert!(Arc::ptr_eq(a.function(), b.function()));
        assert_eq!(Arc::strong_count(&f), 3);
    }

    #[test]
    fn checked_value_reports_mismatch() {
        let c = Constraint::new(Arc::new(LinearFunction::new(vec![1.0, 1.0])), 0.0);

        assert_eq!(
            c.checked_value(&[1.0]),
            Err(DimensionError::Mismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn debug_shows_dimension_and_bound() {
        let c = Constraint::new(Arc::new(QuadraticFunction::new(vec![1.0, 2.0, 3.0])), -5.0);

        assert_eq!(format!("{c:?}"), "Constraint { dimension: 3, bound: -5.0 }");
    }
}
