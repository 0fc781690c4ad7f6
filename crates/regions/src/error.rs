use levelset_core::DimensionError;
use thiserror::Error;

/// Errors returned by the checked [`PointSet`](crate::PointSet) queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The point does not fit the function of the constraint at `index`.
    #[error("constraint {index} rejected the point")]
    Dimension {
        index: usize,
        #[source]
        source: DimensionError,
    },
}
