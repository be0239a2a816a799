use std::error::Error as StdError;

use thiserror::Error;

use crate::EvalError;

/// Errors from building or manipulating a [`Simplex`](super::Simplex).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimplexError {
    #[error("steps must not be empty")]
    EmptySteps,

    #[error("step {index} has zero length")]
    ZeroStep { index: usize },

    #[error("reference simplex must contain at least one vertex")]
    EmptyReference,

    #[error("expected dimension {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("vertices {first} and {second} are identical")]
    DuplicateVertex { first: usize, second: usize },

    #[error("index {index} is out of range for a simplex of {size} vertices")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("expected {expected} vertices, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("simplex has not been built at a start point")]
    NotBuilt,
}

/// Errors that can occur during a simplex search.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Simplex(#[from] SimplexError),

    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("exceeded the budget of {max} objective evaluations")]
    TooManyEvaluations { max: usize },
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        match error {
            EvalError::Objective(source) => Self::Objective(source),
            EvalError::TooManyEvaluations { max } => Self::TooManyEvaluations { max },
        }
    }
}
