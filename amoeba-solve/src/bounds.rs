//! Adapters for box-constrained problems.
//!
//! Both adapters wrap an [`Objective`](amoeba_core::Objective) and are
//! objectives themselves, so any unconstrained solver in this crate can use
//! them unchanged.
//!
//! - [`MappingAdapter`] reparametrizes the domain. The solver works on
//!   unbounded coordinates and every evaluation is mapped into the box, so the
//!   wrapped objective never sees an infeasible point. Map the start point
//!   with [`MappingAdapter::bounded_to_unbounded`] and the solution back with
//!   [`MappingAdapter::unbounded_to_bounded`].
//! - [`PenaltyAdapter`] keeps the domain and returns a penalty instead of
//!   calling the wrapped objective for points outside the box. Solutions need
//!   no mapping, but the penalty surface is not smooth at the box edge.
//!
//! # Limitations
//!
//! - Mapping compresses the region near finite bounds, so optima that lie on
//!   a bound are only approached asymptotically
//! - The penalty `offset` must dominate the objective for the adapter to keep
//!   a minimizer inside the box

mod error;
mod mapper;
mod mapping;
mod penalty;

pub use error::{AdapterError, BoundsError};
pub use mapper::Mapper;
pub use mapping::MappingAdapter;
pub use penalty::PenaltyAdapter;
