use super::Simplex;

/// Indicates why the simplex search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The convergence checker accepted every vertex.
    Converged,

    /// Reached the iteration cap without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a simplex search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best vertex found.
    pub point: Vec<f64>,

    /// Objective value at `point`.
    pub value: f64,

    /// Iteration count when the search finished.
    pub iters: usize,

    /// Objective evaluations used.
    pub evals: usize,

    /// The final simplex, best vertex first.
    pub simplex: Simplex,
}

impl Solution {
    pub(super) fn new(status: Status, simplex: Simplex, iters: usize, evals: usize) -> Self {
        let (point, value) = simplex
            .best()
            .map_or((Vec::new(), f64::NAN), |best| (best.point().to_vec(), best.value()));

        Self {
            status,
            point,
            value,
            iters,
            evals,
            simplex,
        }
    }
}
