//! Core traits and types for Amoeba.
//!
//! This crate defines the shared abstractions that the solvers in
//! `amoeba-solve` build on:
//!
//! - [`Objective`]: a scalar function of several real variables
//! - [`PointValue`]: a point paired with its (possibly not yet computed) value
//! - [`Goal`]: minimize or maximize, and the ordering that follows from it
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`ConvergenceChecker`]: decides whether two successive iterates are close
//!   enough to stop, with [`ValueChecker`] and [`PointChecker`] as ready-made
//!   implementations

mod convergence;
mod goal;
mod objective;
mod observer;
mod point_value;

pub use convergence::{CheckerError, ConvergenceChecker, PointChecker, ValueChecker};
pub use goal::Goal;
pub use objective::Objective;
pub use observer::Observer;
pub use point_value::PointValue;
