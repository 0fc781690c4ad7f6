//! Point sets defined by inequality constraints on levelset functions.
//!
//! A [`PointSet`] is the region of ℝⁿ where every [`Constraint`]
//! `f(x) <= bound` holds. It answers two queries for a point:
//!
//! - [`PointSet::contains`] — every constraint holds
//! - [`PointSet::is_on_boundary`] — at least one constraint holds with
//!   equality, within a [`Tolerance`]
//!
//! Functions are shared through [`SharedFunction`], so one function instance
//! can back constraints in any number of sets.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use levelset_core::{LinearFunction, QuadraticFunction};
//! use levelset_regions::{Constraint, PointSet};
//!
//! let linear = Arc::new(LinearFunction::new(vec![2.0, 3.0]));
//! let quadratic = Arc::new(QuadraticFunction::new(vec![2.0, 3.0, -1.0, -2.0]));
//!
//! let set = PointSet::new(vec![
//!     Constraint::new(linear, 10.0),
//!     Constraint::new(quadratic, -5.0),
//! ]);
//!
//! assert!(!set.contains(&[1.0, 2.0]));
//! assert!(!set.is_on_boundary(&[1.0, 2.0]));
//! ```

mod constraint;
mod error;
mod point_set;
mod tolerance;

pub use constraint::{Constraint, SharedFunction};
pub use error::Error;
pub use point_set::{Location, PointSet};
pub use tolerance::{Tolerance, ToleranceError};
