use std::error::Error as StdError;

use amoeba_core::Objective;
use thiserror::Error;

/// Errors that can occur when evaluating an objective through an [`Evaluator`].
#[derive(Debug, Error)]
pub enum EvalError {
    /// The objective returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    /// The evaluation budget is spent.
    #[error("exceeded the budget of {max} objective evaluations")]
    TooManyEvaluations { max: usize },
}

/// Evaluates an objective while counting calls against a budget.
///
/// Every call to [`Evaluator::value`] counts, including calls that fail. Once
/// `max_evals` calls have been made, the next one fails with
/// [`EvalError::TooManyEvaluations`] without touching the objective.
#[derive(Debug)]
pub struct Evaluator<'a, O> {
    objective: &'a O,
    count: usize,
    max_evals: usize,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    /// Creates an evaluator that allows at most `max_evals` objective calls.
    #[must_use]
    pub fn new(objective: &'a O, max_evals: usize) -> Self {
        Self {
            objective,
            count: 0,
            max_evals,
        }
    }

    /// Evaluates the objective at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::TooManyEvaluations`] if the budget is spent, or
    /// [`EvalError::Objective`] if the objective fails.
    pub fn value(&mut self, point: &[f64]) -> Result<f64, EvalError> {
        if self.count >= self.max_evals {
            return Err(EvalError::TooManyEvaluations {
                max: self.max_evals,
            });
        }
        self.count += 1;

        let value = self
            .objective
            .value(point)
            .map_err(|e| EvalError::Objective(Box::new(e)))?;
        tracing::trace!(eval = self.count, ?point, value, "evaluated objective");
        Ok(value)
    }

    /// Returns the number of objective calls made so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the evaluation budget.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }
}
