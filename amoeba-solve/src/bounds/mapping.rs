use amoeba_core::Objective;

use super::{
    AdapterError, BoundsError, Mapper,
    error::{check_box, check_dimension},
};

/// Solves a box-constrained problem by remapping the domain.
///
/// Each component is mapped by its [`Mapper`], so an unconstrained solver
/// can roam freely while the wrapped objective only sees points inside the
/// box. Solutions found in the unbounded domain are mapped back with
/// [`MappingAdapter::unbounded_to_bounded`].
#[derive(Debug, Clone)]
pub struct MappingAdapter<O> {
    objective: O,
    mappers: Vec<Mapper>,
}

impl<O> MappingAdapter<O> {
    /// Wraps `objective` with per-component bounds.
    ///
    /// Either bound of a component may be infinite.
    ///
    /// # Errors
    ///
    /// Returns an error if `lower` and `upper` differ in length, or if any
    /// `upper[i] < lower[i]` (including NaN bounds).
    pub fn new(objective: O, lower: &[f64], upper: &[f64]) -> Result<Self, BoundsError> {
        check_box(lower, upper)?;
        let mappers = lower
            .iter()
            .zip(upper)
            .map(|(&lower, &upper)| Mapper::new(lower, upper))
            .collect();

        Ok(Self { objective, mappers })
    }

    /// Returns the per-component mappers.
    #[must_use]
    pub fn mappers(&self) -> &[Mapper] {
        &self.mappers
    }

    /// Maps a point from the unbounded domain into the box.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::DimensionMismatch`] if `point` has the wrong
    /// number of components.
    pub fn unbounded_to_bounded(&self, point: &[f64]) -> Result<Vec<f64>, BoundsError> {
        check_dimension(self.mappers.len(), point.len())?;
        Ok(self
            .mappers
            .iter()
            .zip(point)
            .map(|(mapper, &y)| mapper.to_bounded(y))
            .collect())
    }

    /// Maps a point inside the box to the unbounded domain.
    ///
    /// Use it to turn a feasible start point into a start point for the
    /// unconstrained solver.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` has the wrong number of components or lies
    /// outside the box.
    pub fn bounded_to_unbounded(&self, point: &[f64]) -> Result<Vec<f64>, BoundsError> {
        check_dimension(self.mappers.len(), point.len())?;
        self.mappers
            .iter()
            .zip(point)
            .enumerate()
            .map(|(index, (mapper, &x))| {
                let (lower, upper) = match *mapper {
                    Mapper::NoBounds => (f64::NEG_INFINITY, f64::INFINITY),
                    Mapper::LowerOnly(lower) => (lower, f64::INFINITY),
                    Mapper::UpperOnly(upper) => (f64::NEG_INFINITY, upper),
                    Mapper::Both(lower, upper) => (lower, upper),
                };
                if x < lower || x > upper {
                    return Err(BoundsError::OutOfBounds {
                        index,
                        value: x,
                        lower,
                        upper,
                    });
                }
                Ok(mapper.to_unbounded(x))
            })
            .collect()
    }
}

impl<O: Objective> Objective for MappingAdapter<O> {
    type Error = AdapterError<O::Error>;

    /// Evaluates the wrapped objective at the bounded image of `point`.
    fn value(&self, point: &[f64]) -> Result<f64, Self::Error> {
        let bounded = self.unbounded_to_bounded(point)?;
        self.objective
            .value(&bounded)
            .map_err(AdapterError::Objective)
    }
}
