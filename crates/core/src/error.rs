use thiserror::Error;

/// An error returned when a point's length does not fit a function.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DimensionError {
    /// The point must have exactly as many coordinates as the function has
    /// coefficients.
    #[error("point has {actual} coordinates, expected {expected}")]
    Mismatch { expected: usize, actual: usize },

    /// The point has fewer coordinates than the operation indexes.
    #[error("point has {actual} coordinates, need at least {required}")]
    TooShort { required: usize, actual: usize },
}

impl DimensionError {
    /// Checks that a point of length `actual` matches `expected` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if the lengths differ.
    pub fn check_exact(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::Mismatch { expected, actual })
        }
    }

    /// Checks that a point of length `actual` has at least `required` entries.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::TooShort`] if `actual < required`.
    pub fn check_at_least(required: usize, actual: usize) -> Result<(), Self> {
        if actual >= required {
            Ok(())
        } else {
            Err(Self::TooShort { required, actual })
        }
    }
}
