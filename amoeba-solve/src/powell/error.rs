use std::error::Error as StdError;

use thiserror::Error;

use crate::{EvalError, line_search::LineSearchError};

/// Errors that can occur during Powell's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    LineSearch(#[from] LineSearchError),

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
