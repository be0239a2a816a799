//! Powell's direction-set method.
//!
//! # Algorithm
//!
//! Powell's method keeps a point and a set of `n` search directions, starting
//! from the standard basis. Each iteration (a *sweep*) performs one line
//! search per direction in turn, moving the point to each line optimum.
//!
//! After a sweep the search stops when the improvement is small:
//! `2 (f_before - f_after) <= rel_tol (|f_before| + |f_after|) + abs_tol`.
//! If that test says continue, an optional convergence checker gets a say,
//! comparing the point before the sweep with the point after it. On stopping,
//! whichever of the two is better is returned.
//!
//! Otherwise the net displacement of the sweep is examined. When
//! extrapolating along it looks promising, one more line search is performed
//! along the displacement, the direction that gave the largest single
//! improvement is discarded, and the scaled displacement becomes the last
//! direction. This keeps the set from collapsing into linear dependence.
//!
//! # When to Use
//!
//! Powell's method is appropriate when:
//! - Derivatives are unavailable
//! - The objective is smooth, so exact line searches pay off
//! - The problem has a moderate number of variables
//!
//! # Limitations
//!
//! - **Local only**: Converges to a nearby local optimum
//! - **Unconstrained**: Use the [`bounds`](crate::bounds) adapters for boxes
//! - **No hard stop by default**: Without `max_iters` a run ends only by
//!   converging or by exhausting the evaluation budget
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each sweep that does not stop the
//! search, once the directions have been updated. Observers can return
//! [`Action::StopEarly`] to halt and return the current point.

mod config;
mod directions;
mod error;
mod event;
mod search;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use directions::DirectionSet;
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use amoeba_core::{ConvergenceChecker, Goal, Objective, Observer};

use search::search;

/// Finds a minimum of the objective with Powell's method from `start`.
///
/// # Errors
///
/// Returns an error if the objective fails, if a line search cannot bracket
/// an optimum within its budget, or if the evaluation budget is exceeded.
pub fn minimize<O, C, Obs>(
    objective: &O,
    start: &[f64],
    config: &Config,
    checker: C,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(objective, start, config, checker, observer, Goal::Minimize)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails, if a line search cannot bracket
/// an optimum within its budget, or if the evaluation budget is exceeded.
pub fn minimize_unobserved<O, C>(
    objective: &O,
    start: &[f64],
    config: &Config,
    checker: C,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
{
    minimize(objective, start, config, checker, ())
}

/// Finds a maximum of the objective with Powell's method from `start`.
///
/// # Errors
///
/// Returns an error if the objective fails, if a line search cannot bracket
/// an optimum within its budget, or if the evaluation budget is exceeded.
pub fn maximize<O, C, Obs>(
    objective: &O,
    start: &[f64],
    config: &Config,
    checker: C,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(objective, start, config, checker, observer, Goal::Maximize)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails, if a line search cannot bracket
/// an optimum within its budget, or if the evaluation budget is exceeded.
pub fn maximize_unobserved<O, C>(
    objective: &O,
    start: &[f64],
    config: &Config,
    checker: C,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
{
    maximize(objective, start, config, checker, ())
}
