//! Derivative-free solvers for Amoeba.
//!
//! Every solver here finds a local optimum of an [`Objective`] by comparing
//! function values only:
//!
//! - [`simplex`]: direct search over a simplex of `n + 1` vertices, using
//!   either the Nelder-Mead or the multi-directional transformation rule
//! - [`powell`]: Powell's conjugate-direction method, built on exact line
//!   minimizations from [`line_search`]
//! - [`bounds`]: adapters that let the unconstrained solvers handle box
//!   constraints, by remapping the domain or by penalizing infeasible points
//!
//! All solvers count objective calls through an [`Evaluator`] and fail with
//! [`EvalError::TooManyEvaluations`] once the configured budget is spent.
//!
//! [`Objective`]: amoeba_core::Objective

pub mod bounds;
pub mod line_search;
pub mod powell;
pub mod simplex;

mod evaluate;

pub use evaluate::{EvalError, Evaluator};
