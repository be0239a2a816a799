use thiserror::Error;

/// Errors from constructing or applying a bounds adapter.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("upper bound {upper} is below lower bound {lower} at index {index}")]
    UpperBelowLower { index: usize, lower: f64, upper: f64 },

    #[error("value {value} at index {index} is outside [{lower}, {upper}]")]
    OutOfBounds {
        index: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },
}

/// Errors from evaluating an objective through a bounds adapter.
#[derive(Debug, Error)]
pub enum AdapterError<E> {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error("wrapped objective failed")]
    Objective(#[source] E),
}

/// Checks that `lower` and `upper` describe a box.
///
/// A NaN bound never satisfies `upper >= lower`, so it is rejected too.
pub(super) fn check_box(lower: &[f64], upper: &[f64]) -> Result<(), BoundsError> {
    check_dimension(lower.len(), upper.len())?;
    for (index, (&lower, &upper)) in lower.iter().zip(upper).enumerate() {
        if lower.is_nan() || upper.is_nan() || upper < lower {
            return Err(BoundsError::UpperBelowLower {
                index,
                lower,
                upper,
            });
        }
    }
    Ok(())
}

pub(super) fn check_dimension(expected: usize, found: usize) -> Result<(), BoundsError> {
    if expected == found {
        Ok(())
    } else {
        Err(BoundsError::DimensionMismatch { expected, found })
    }
}
