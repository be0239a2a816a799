use amoeba_core::PointValue;

use super::Simplex;

/// Event emitted by the simplex search after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Number of completed iterations.
    pub iter: usize,

    /// The simplex after this iteration, sorted at least at both ends.
    pub simplex: &'a Simplex,

    /// Objective evaluations used so far.
    pub evals: usize,
}

impl Event<'_> {
    /// Returns the best vertex of the simplex.
    #[must_use]
    pub fn best(&self) -> &PointValue {
        // The search only emits events for built simplices.
        &self.simplex.vertices()[0]
    }
}

/// Actions an observer can take during a simplex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the current best vertex.
    StopEarly,
}
