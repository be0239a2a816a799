use super::DirectionSet;

/// Event emitted by Powell's method after each sweep that does not stop the
/// search.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Number of completed sweeps.
    pub iter: usize,

    /// The current point.
    pub point: &'a [f64],

    /// Objective value at `point`.
    pub value: f64,

    /// The directions for the next sweep.
    pub directions: &'a DirectionSet,

    /// Objective evaluations used so far.
    pub evals: usize,
}

/// Actions an observer can take during Powell's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the current point.
    StopEarly,
}
