use std::cmp::Ordering;

use amoeba_core::PointValue;
use thiserror::Error;

use super::{MultiDirectional, NelderMead, Simplex, SimplexError};

/// Errors from constructing a strategy with invalid coefficients.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("coefficient {name} must be finite and positive, got {value}")]
pub struct CoefficientError {
    pub name: &'static str,
    pub value: f64,
}

pub(super) fn positive(name: &'static str, value: f64) -> Result<f64, CoefficientError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoefficientError { name, value })
    }
}

/// The rule used to transform the simplex on each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    NelderMead(NelderMead),
    MultiDirectional(MultiDirectional),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::NelderMead(NelderMead::default())
    }
}

impl From<NelderMead> for Strategy {
    fn from(strategy: NelderMead) -> Self {
        Self::NelderMead(strategy)
    }
}

impl From<MultiDirectional> for Strategy {
    fn from(strategy: MultiDirectional) -> Self {
        Self::MultiDirectional(strategy)
    }
}

impl Strategy {
    /// Performs one iteration of the selected rule on a sorted, evaluated simplex.
    ///
    /// # Errors
    ///
    /// Returns an error if the simplex is not built or if `f` fails.
    pub fn iterate<F, E, C>(&self, simplex: &mut Simplex, f: F, order: C) -> Result<(), E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: From<SimplexError>,
        C: Fn(&PointValue, &PointValue) -> Ordering,
    {
        match self {
            Self::NelderMead(strategy) => strategy.iterate(simplex, f, order),
            Self::MultiDirectional(strategy) => strategy.iterate(simplex, f, order),
        }
    }
}
