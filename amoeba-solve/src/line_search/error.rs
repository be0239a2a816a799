use thiserror::Error;

/// Errors that can occur during a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineSearchError {
    #[error("bracketing exceeded its budget of {max} evaluations")]
    TooManyEvaluations { max: usize },
}

/// Errors that can occur when validating line search settings.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("rel_tol {value} is below the minimum of {min}")]
    RelTolTooSmall { value: f64, min: f64 },

    #[error("abs_tol must be finite and positive, got {value}")]
    AbsTolNotPositive { value: f64 },

    #[error("grow_limit must be finite and positive, got {value}")]
    GrowLimitNotPositive { value: f64 },

    #[error("max_evals must be strictly positive")]
    MaxEvalsZero,
}
