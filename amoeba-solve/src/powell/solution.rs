use super::DirectionSet;

/// Indicates why Powell's method stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The default test or the convergence checker accepted the last sweep.
    Converged,

    /// Reached the iteration cap without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of Powell's method.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best point found.
    pub point: Vec<f64>,

    /// Objective value at `point`.
    pub value: f64,

    /// Sweep count when the search finished.
    pub iters: usize,

    /// Objective evaluations used.
    pub evals: usize,

    /// The final search directions.
    pub directions: DirectionSet,
}
