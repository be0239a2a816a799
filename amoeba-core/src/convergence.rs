use thiserror::Error;

use crate::PointValue;

/// Decides whether an iterative solver has converged.
///
/// Solvers call [`ConvergenceChecker::converged`] with the iteration count and
/// a pair of iterates (the previous and the current one). Closures of the form
/// `FnMut(usize, &PointValue, &PointValue) -> bool` are checkers, and `()` is a
/// checker that never reports convergence, leaving the decision to the
/// solver's own tests and budgets.
pub trait ConvergenceChecker {
    /// Returns `true` if `previous` and `current` are close enough to stop.
    fn converged(
        &mut self,
        iteration: usize,
        previous: &PointValue,
        current: &PointValue,
    ) -> bool;
}

impl<F> ConvergenceChecker for F
where
    F: FnMut(usize, &PointValue, &PointValue) -> bool,
{
    fn converged(
        &mut self,
        iteration: usize,
        previous: &PointValue,
        current: &PointValue,
    ) -> bool {
        self(iteration, previous, current)
    }
}

impl ConvergenceChecker for () {
    fn converged(&mut self, _: usize, _: &PointValue, _: &PointValue) -> bool {
        false
    }
}

/// Errors that can occur when building a convergence checker.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckerError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("max_iters must be strictly positive")]
    MaxIters,
}

/// Thresholds shared by the value and point checkers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Thresholds {
    rel_tol: f64,
    abs_tol: f64,
    max_iters: Option<usize>,
}

impl Thresholds {
    fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, CheckerError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(CheckerError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(CheckerError::AbsTol);
        }
        Ok(Self {
            rel_tol,
            abs_tol,
            max_iters: None,
        })
    }

    fn with_max_iters(self, max_iters: usize) -> Result<Self, CheckerError> {
        if max_iters == 0 {
            return Err(CheckerError::MaxIters);
        }
        Ok(Self {
            max_iters: Some(max_iters),
            ..self
        })
    }

    fn exhausted(&self, iteration: usize) -> bool {
        self.max_iters.is_some_and(|max| iteration >= max)
    }

    /// A pair of numbers is close when either tolerance accepts it.
    fn close(&self, previous: f64, current: f64) -> bool {
        let difference = (previous - current).abs();
        let size = previous.abs().max(current.abs());
        difference <= size * self.rel_tol || difference <= self.abs_tol
    }
}

/// Compares the objective values of two iterates.
///
/// Converged when the values differ by at most `rel_tol` times the larger
/// magnitude, or by at most `abs_tol`. With a maximum iteration count set, it
/// also reports convergence once that count is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChecker {
    thresholds: Thresholds,
}

impl ValueChecker {
    /// Creates a checker from relative and absolute thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if either threshold is negative or non-finite.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, CheckerError> {
        Ok(Self {
            thresholds: Thresholds::new(rel_tol, abs_tol)?,
        })
    }

    /// Also reports convergence once `iteration >= max_iters`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::MaxIters`] if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, CheckerError> {
        Ok(Self {
            thresholds: self.thresholds.with_max_iters(max_iters)?,
        })
    }

    /// Returns the relative threshold.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.thresholds.rel_tol
    }

    /// Returns the absolute threshold.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.thresholds.abs_tol
    }
}

impl ConvergenceChecker for ValueChecker {
    fn converged(
        &mut self,
        iteration: usize,
        previous: &PointValue,
        current: &PointValue,
    ) -> bool {
        self.thresholds.exhausted(iteration)
            || self.thresholds.close(previous.value(), current.value())
    }
}

/// Compares the coordinates of two iterates.
///
/// Converged when every coordinate passes the same test [`ValueChecker`]
/// applies to values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointChecker {
    thresholds: Thresholds,
}

impl PointChecker {
    /// Creates a checker from relative and absolute thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if either threshold is negative or non-finite.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, CheckerError> {
        Ok(Self {
            thresholds: Thresholds::new(rel_tol, abs_tol)?,
        })
    }

    /// Also reports convergence once `iteration >= max_iters`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::MaxIters`] if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, CheckerError> {
        Ok(Self {
            thresholds: self.thresholds.with_max_iters(max_iters)?,
        })
    }
}

impl ConvergenceChecker for PointChecker {
    fn converged(
        &mut self,
        iteration: usize,
        previous: &PointValue,
        current: &PointValue,
    ) -> bool {
        self.thresholds.exhausted(iteration)
            || previous
                .point()
                .iter()
                .zip(current.point())
                .all(|(&p, &c)| self.thresholds.close(p, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(point: &[f64], value: f64) -> PointValue {
        PointValue::new(point.to_vec(), value)
    }

    #[test]
    fn value_checker_uses_relative_threshold() {
        let mut checker = ValueChecker::new(1e-3, 0.0).unwrap();

        assert!(checker.converged(1, &pair(&[0.0], 1000.0), &pair(&[5.0], 1000.5)));
        assert!(!checker.converged(1, &pair(&[0.0], 1000.0), &pair(&[5.0], 1002.0)));
    }

    #[test]
    fn value_checker_uses_absolute_threshold() {
        let mut checker = ValueChecker::new(0.0, 1e-6).unwrap();

        assert!(checker.converged(1, &pair(&[0.0], 0.0), &pair(&[0.0], 5e-7)));
        assert!(!checker.converged(1, &pair(&[0.0], 0.0), &pair(&[0.0], 5e-6)));
    }

    #[test]
    fn value_checker_stops_at_max_iters() {
        let mut checker = ValueChecker::new(0.0, 0.0)
            .unwrap()
            .with_max_iters(3)
            .unwrap();

        assert!(!checker.converged(2, &pair(&[0.0], 0.0), &pair(&[0.0], 1.0)));
        assert!(checker.converged(3, &pair(&[0.0], 0.0), &pair(&[0.0], 1.0)));
    }

    #[test]
    fn point_checker_requires_every_coordinate() {
        let mut checker = PointChecker::new(0.0, 1e-3).unwrap();

        let previous = pair(&[1.0, 2.0], 0.0);
        assert!(checker.converged(1, &previous, &pair(&[1.0005, 2.0005], 0.0)));
        assert!(!checker.converged(1, &previous, &pair(&[1.0005, 2.1], 0.0)));
    }

    #[test]
    fn rejects_invalid_thresholds() {
        assert_eq!(ValueChecker::new(-1.0, 0.0), Err(CheckerError::RelTol));
        assert_eq!(PointChecker::new(0.0, f64::NAN), Err(CheckerError::AbsTol));
        assert_eq!(
            ValueChecker::new(0.0, 0.0).unwrap().with_max_iters(0),
            Err(CheckerError::MaxIters)
        );
    }

    #[test]
    fn closures_and_unit_are_checkers() {
        let mut never = ();
        assert!(!never.converged(100, &pair(&[0.0], 0.0), &pair(&[0.0], 0.0)));

        let mut after_two = |iteration: usize, _: &PointValue, _: &PointValue| iteration >= 2;
        assert!(!after_two.converged(1, &pair(&[0.0], 0.0), &pair(&[0.0], 0.0)));
        assert!(after_two.converged(2, &pair(&[0.0], 0.0), &pair(&[0.0], 0.0)));
    }
}
