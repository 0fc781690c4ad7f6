//! Membership and boundary queries over a conjunction of constraints.


use tracing::{debug, trace};

use crate::{Constraint, Error, Tolerance};

/// Where a point lies relative to a [`PointSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Every constraint holds and none is active.
    Interior,

    /// Every constraint holds and at least one is active.
    Boundary,

    /// At least one constraint is violated.
    Exterior,
}

/// The region of points satisfying every constraint in a list.
///
/// A point set is fixed at construction. The order of its constraints only
/// affects evaluation order, never the result of a query.
///
/// The lenient queries ([`contains`](Self::contains),
/// [`is_on_boundary`](Self::is_on_boundary), [`classify`](Self::classify))
/// evaluate each function with [`Function::value`], so a point whose length
/// does not match a function is silently truncated. The `checked_*` queries
/// reject such points instead.
///
/// [`Function::value`]: levelset_core::Function::value
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    constraints: Vec<Constraint>,
    tolerance: Tolerance,
}

impl PointSet {
    /// Creates a point set with the default (near-exact) boundary tolerance.
    #[must_use]
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self::with_tolerance(constraints, Tolerance::default())
    }

    /// Creates a point set with an explicit boundary tolerance.
    #[must_use]
    pub fn with_tolerance(constraints: Vec<Constraint>, tolerance: Tolerance) -> Self {
        Self {
            constraints,
            tolerance,
        }
    }

    /// Returns the constraints in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the boundary tolerance.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` if the set has no constraints and therefore contains
    /// every point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns `true` if every constraint holds at `point`.
    ///
    /// Stops at the first violated constraint. An empty set contains every
    /// point.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        let inside = self.constraints.iter().enumerate().all(|(index, constraint)| {
            let value = constraint.value(point);
            trace!(index, value, bound = constraint.bound(), "evaluated constraint");
            value <= constraint.bound()
        });

        debug!(inside, constraints = self.len(), "membership query");
        inside
    }

    /// Returns `true` if at least one constraint holds with equality at
    /// `point`, within the set's tolerance.
    ///
    /// This does not require the point to be in the set. No point is on the
    /// boundary of an empty set.
    #[must_use]
    pub fn is_on_boundary(&self, point: &[f64]) -> bool {
        let tolerance = self.tolerance;
        let on_boundary = self.constraints.iter().enumerate().any(|(index, constraint)| {
            let value = constraint.value(point);
            trace!(index, value, bound = constraint.bound(), "evaluated constraint");
            tolerance.is_within(value, constraint.bound())
        });

        debug!(on_boundary, constraints = self.len(), "boundary query");
        on_boundary
    }

    /// Classifies `point` as inside, on the boundary of, or outside the set.
    #[must_use]
    pub fn classify(&self, point: &[f64]) -> Location {
        let location = if !self.contains(point) {
            Location::Exterior
        } else if self.is_on_boundary(point) {
            Location::Boundary
        } else {
            Location::Interior
        };

        debug!(?location, "classified point");
        location
    }

    /// Returns the constraints violated at `point`, with their indices.
    pub fn violated<'a>(
        &'a self,
        point: &'a [f64],
    ) -> impl Iterator<Item = (usize, &'a Constraint)> + 'a {
        self.constraints
            .iter()
            .enumerate()
            .filter(move |(_, constraint)| !constraint.is_satisfied(point))
    }

    /// Like [`contains`](Self::contains), but requires `point` to match the
    /// dimension of every function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] for the first constraint whose function
    /// rejects the point.
    pub fn checked_contains(&self, point: &[f64]) -> Result<bool, Error> {
        let values = self.checked_values(point)?;

        Ok(values
            .iter()
            .zip(&self.constraints)
            .all(|(value, constraint)| *value <= constraint.bound()))
    }

    /// Like [`is_on_boundary`](Self::is_on_boundary), but requires `point` to
    /// match the dimension of every function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] for the first constraint whose function
    /// rejects the point.
    pub fn checked_is_on_boundary(&self, point: &[f64]) -> Result<bool, Error> {
        let values = self.checked_values(point)?;

        Ok(values
            .iter()
            .zip(&self.constraints)
            .any(|(value, constraint)| self.tolerance.is_within(*value, constraint.bound())))
    }

    fn checked_values(&self, point: &[f64]) -> Result<Vec<f64>, Error> {
        self.constraints
            .iter()
            .enumerate()
            .map(|(index, constraint)| {
                constraint
                    .checked_value(point)
                    .map_err(|source| Error::Dimension { index, source })
            })
            .collect()
    }
}

impl FromIterator<Constraint> for PointSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
