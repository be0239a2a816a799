//! One-dimensional searches along a direction.
//!
//! # Algorithm
//!
//! A [`LineSearch`] restricts an objective to the line `base + alpha * direction`
//! through a [`LineObjective`], brackets an optimum in `alpha` with a
//! [`BracketFinder`] starting from `alpha = 0` and `alpha = 1`, and then refines
//! it with [`Brent`]'s method.
//!
//! # When to Use
//!
//! Line searches are the building block of direction-set methods such as
//! [`powell`](crate::powell). They are also usable on their own for any
//! one-dimensional problem without a known bracket.
//!
//! # Limitations
//!
//! - **Local only**: Finds the optimum nearest to the downhill walk
//! - **Unbounded walk**: A monotone objective exhausts the bracketing budget

mod bracket;
mod brent;
mod error;
mod point;

pub use bracket::{Bracket, BracketFinder};
pub use brent::{Brent, MIN_REL_TOL};
pub use error::{ConfigError, LineSearchError};
pub use point::Point;

use amoeba_core::Goal;

/// An objective restricted to the line `base + alpha * direction`.
#[derive(Debug)]
pub struct LineObjective<'a, F> {
    base: &'a [f64],
    direction: &'a [f64],
    objective: F,
}

impl<'a, F> LineObjective<'a, F> {
    /// Creates the restriction of `objective` to a line.
    ///
    /// `base` and `direction` must have the same length.
    pub fn new(base: &'a [f64], direction: &'a [f64], objective: F) -> Self {
        Self {
            base,
            direction,
            objective,
        }
    }

    /// Returns the point at step length `alpha`.
    #[must_use]
    pub fn point_at(&self, alpha: f64) -> Vec<f64> {
        self.base
            .iter()
            .zip(self.direction)
            .map(|(b, d)| b + alpha * d)
            .collect()
    }

    /// Evaluates the objective at step length `alpha`.
    ///
    /// # Errors
    ///
    /// Returns the error from the objective.
    pub fn value<E>(&mut self, alpha: f64) -> Result<f64, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let point = self.point_at(alpha);
        (self.objective)(&point)
    }
}

/// Brackets and refines an optimum along a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    bracket: BracketFinder,
    brent: Brent,
}

impl LineSearch {
    /// Combines a bracketing strategy with a Brent refinement.
    #[must_use]
    pub fn new(bracket: BracketFinder, brent: Brent) -> Self {
        Self { bracket, brent }
    }

    /// Finds the optimal step length along `direction` from `base`.
    ///
    /// The returned point holds the step length and the objective value there.
    ///
    /// # Errors
    ///
    /// Returns an error if bracketing exceeds its budget or if `f` fails.
    pub fn search<F, E>(
        &self,
        f: F,
        goal: Goal,
        base: &[f64],
        direction: &[f64],
    ) -> Result<Point, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: From<LineSearchError>,
    {
        let mut line = LineObjective::new(base, direction, f);
        let bracket = self
            .bracket
            .search(|alpha| line.value(alpha), goal, 0.0, 1.0)?;
        tracing::trace!(
            lo = bracket.lo,
            mid = bracket.mid,
            hi = bracket.hi,
            "bracketed line optimum"
        );
        self.brent
            .optimize(|alpha| line.value(alpha), goal, &bracket)
    }
}
