//! Simplex-based direct search.
//!
//! # Algorithm
//!
//! A simplex of `n + 1` vertices is anchored at the start point and evaluated.
//! Each iteration applies one [`Strategy`] to the simplex:
//!
//! - [`NelderMead`] replaces the worst vertex by reflecting it through the
//!   centroid of the others, expanding or contracting the move, and shrinks the
//!   whole simplex toward its best vertex when nothing improves
//! - [`MultiDirectional`] reflects, expands, or contracts every vertex but the
//!   best at once, always about the best vertex
//!
//! After each iteration the convergence checker compares every vertex with
//! its counterpart from before the iteration. The search has converged once
//! all pairs pass.
//!
//! # When to Use
//!
//! Simplex search is appropriate when:
//! - Derivatives are unavailable, unreliable, or noisy
//! - The problem has few variables (up to about ten)
//! - A robust method matters more than the number of evaluations
//!
//! # Limitations
//!
//! - **Local only**: Converges to a nearby local optimum, if at all
//! - **Slow in high dimensions**: Evaluations grow quickly with `n`
//! - **No convergence guarantee**: Nelder-Mead can stall on a degenerate simplex
//! - **Unconstrained**: Use the [`bounds`](crate::bounds) adapters for boxes
//!
//! # Observer Events
//!
//! The search emits one [`Event`] after each iteration, carrying the simplex
//! and the evaluation count. Observers can return [`Action::StopEarly`] to
//! halt and return the current best vertex.
//!
//! Exceeding the evaluation budget fails the search with
//! [`Error::TooManyEvaluations`]; no partial result is returned.

mod config;
mod error;
mod event;
mod geometry;
mod multi_directional;
mod nelder_mead;
mod search;
mod solution;
mod strategy;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::{Error, SimplexError};
pub use event::{Action, Event};
pub use geometry::Simplex;
pub use multi_directional::MultiDirectional;
pub use nelder_mead::NelderMead;
pub use solution::{Solution, Status};
pub use strategy::{CoefficientError, Strategy};

use amoeba_core::{ConvergenceChecker, Goal, Objective, Observer};

use search::search;

/// Finds a minimum of the objective by simplex search from `start`.
///
/// The `simplex` supplies the shape of the initial simplex; it is anchored at
/// `start` before the first evaluation.
///
/// # Errors
///
/// Returns an error if `start` does not match the simplex dimension, if the
/// objective fails, or if the evaluation budget is exceeded.
pub fn minimize<O, C, Obs>(
    objective: &O,
    start: &[f64],
    simplex: Simplex,
    strategy: &Strategy,
    checker: C,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(
        objective,
        start,
        simplex,
        strategy,
        checker,
        config,
        observer,
        Goal::Minimize,
    )
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `start` does not match the simplex dimension, if the
/// objective fails, or if the evaluation budget is exceeded.
pub fn minimize_unobserved<O, C>(
    objective: &O,
    start: &[f64],
    simplex: Simplex,
    strategy: &Strategy,
    checker: C,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
{
    minimize(objective, start, simplex, strategy, checker, config, ())
}

/// Finds a maximum of the objective by simplex search from `start`.
///
/// # Errors
///
/// Returns an error if `start` does not match the simplex dimension, if the
/// objective fails, or if the evaluation budget is exceeded.
pub fn maximize<O, C, Obs>(
    objective: &O,
    start: &[f64],
    simplex: Simplex,
    strategy: &Strategy,
    checker: C,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(
        objective,
        start,
        simplex,
        strategy,
        checker,
        config,
        observer,
        Goal::Maximize,
    )
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `start` does not match the simplex dimension, if the
/// objective fails, or if the evaluation budget is exceeded.
pub fn maximize_unobserved<O, C>(
    objective: &O,
    start: &[f64],
    simplex: Simplex,
    strategy: &Strategy,
    checker: C,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
{
    maximize(objective, start, simplex, strategy, checker, config, ())
}
