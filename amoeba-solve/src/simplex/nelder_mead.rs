use std::cmp::Ordering;

use amoeba_core::PointValue;

use super::{
    Simplex, SimplexError,
    geometry::{centroid, toward},
    strategy::{CoefficientError, positive},
};

/// The Nelder-Mead transformation rule.
///
/// Each iteration moves the worst vertex through the centroid of the others
/// (reflection), and then tries to stretch the move (expansion) or pull it
/// back (contraction). When no candidate improves on the worst vertex, the
/// whole simplex shrinks toward its best vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Coefficients"))]
pub struct NelderMead {
    rho: f64,
    khi: f64,
    gamma: f64,
    sigma: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 2.0, 0.5, 0.5).unwrap()
    }
}

impl NelderMead {
    /// Creates the rule from its reflection, expansion, contraction, and
    /// shrink coefficients.
    ///
    /// # Errors
    ///
    /// Returns a [`CoefficientError`] naming the first coefficient that is not
    /// finite and positive.
    pub fn new(rho: f64, khi: f64, gamma: f64, sigma: f64) -> Result<Self, CoefficientError> {
        Ok(Self {
            rho: positive("rho", rho)?,
            khi: positive("khi", khi)?,
            gamma: positive("gamma", gamma)?,
            sigma: positive("sigma", sigma)?,
        })
    }

    /// Returns the reflection coefficient.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the expansion coefficient.
    #[must_use]
    pub fn khi(&self) -> f64 {
        self.khi
    }

    /// Returns the contraction coefficient.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the shrink coefficient.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Performs one iteration on a sorted, evaluated simplex.
    ///
    /// # Errors
    ///
    /// Returns an error if the simplex is not built or if `f` fails.
    pub fn iterate<F, E, C>(&self, simplex: &mut Simplex, mut f: F, order: C) -> Result<(), E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: From<SimplexError>,
        C: Fn(&PointValue, &PointValue) -> Ordering,
    {
        let n = simplex.dimension();
        if !simplex.is_built() {
            return Err(SimplexError::NotBuilt.into());
        }
        if n == 0 {
            return Ok(());
        }

        let vertices = simplex.vertices();
        let best = vertices[0].clone();
        let second_best = vertices[n - 1].clone();
        let worst = vertices[n].clone();
        let centroid = centroid(&vertices[..n]);

        let reflected = toward(&centroid, -self.rho, worst.point());
        let value = f(&reflected)?;
        let reflected = PointValue::new(reflected, value);

        if order(&best, &reflected) != Ordering::Greater
            && order(&reflected, &second_best) == Ordering::Less
        {
            tracing::trace!(value, "nelder-mead: reflect");
            simplex.replace_worst_point(reflected, &order)?;
            return Ok(());
        }

        if order(&reflected, &best) == Ordering::Less {
            let expanded = toward(&centroid, self.khi, reflected.point());
            let value = f(&expanded)?;
            let expanded = PointValue::new(expanded, value);

            let accepted = if order(&expanded, &reflected) == Ordering::Less {
                tracing::trace!(value, "nelder-mead: expand");
                expanded
            } else {
                tracing::trace!(value = reflected.value(), "nelder-mead: reflect");
                reflected
            };
            simplex.replace_worst_point(accepted, &order)?;
            return Ok(());
        }

        if order(&reflected, &worst) == Ordering::Less {
            let contracted = toward(&centroid, self.gamma, reflected.point());
            let value = f(&contracted)?;
            let contracted = PointValue::new(contracted, value);

            if order(&contracted, &reflected) != Ordering::Greater {
                tracing::trace!(value, "nelder-mead: outside contraction");
                simplex.replace_worst_point(contracted, &order)?;
                return Ok(());
            }
        } else {
            let contracted = toward(&centroid, self.gamma, worst.point());
            let value = f(&contracted)?;
            let contracted = PointValue::new(contracted, value);

            if order(&contracted, &worst) == Ordering::Less {
                tracing::trace!(value, "nelder-mead: inside contraction");
                simplex.replace_worst_point(contracted, &order)?;
                return Ok(());
            }
        }

        tracing::trace!("nelder-mead: shrink");
        let shrunk: Vec<_> = simplex.vertices()[1..]
            .iter()
            .map(|vertex| PointValue::unevaluated(toward(best.point(), self.sigma, vertex.point())))
            .collect();
        for (index, vertex) in shrunk.into_iter().enumerate() {
            simplex.set_point(index + 1, vertex)?;
        }
        simplex.evaluate(&mut f, &order)
    }
}

/// Unvalidated coefficients, checked on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct Coefficients {
    rho: f64,
    khi: f64,
    gamma: f64,
    sigma: f64,
}

#[cfg(feature = "serde")]
impl Default for Coefficients {
    fn default() -> Self {
        let NelderMead {
            rho,
            khi,
            gamma,
            sigma,
        } = NelderMead::default();
        Self {
            rho,
            khi,
            gamma,
            sigma,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Coefficients> for NelderMead {
    type Error = CoefficientError;

    fn try_from(c: Coefficients) -> Result<Self, Self::Error> {
        Self::new(c.rho, c.khi, c.gamma, c.sigma)
    }
}
