use std::cmp::Ordering;

use amoeba_core::PointValue;

use super::{
    Simplex, SimplexError,
    geometry::toward,
    strategy::{CoefficientError, positive},
};

/// The multi-directional search rule.
///
/// Each iteration reflects every vertex but the best through the best vertex.
/// If that produces a new best, an expanded simplex is tried as well and the
/// better of the two is kept. Otherwise a contracted simplex replaces the
/// current one unconditionally; there is no separate shrink step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Coefficients"))]
pub struct MultiDirectional {
    khi: f64,
    gamma: f64,
}

impl Default for MultiDirectional {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(2.0, 0.5).unwrap()
    }
}

impl MultiDirectional {
    /// Creates the rule from its expansion and contraction coefficients.
    ///
    /// # Errors
    ///
    /// Returns a [`CoefficientError`] if either coefficient is not finite and
    /// positive.
    pub fn new(khi: f64, gamma: f64) -> Result<Self, CoefficientError> {
        Ok(Self {
            khi: positive("khi", khi)?,
            gamma: positive("gamma", gamma)?,
        })
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
        let original = simplex.points();
        let Some(best) = original.first() else {
            return Err(SimplexError::NotBuilt.into());
        };

        let reflected = transform(simplex, &original, 1.0, &mut f, &order)?;
        if order(&reflected, best) == Ordering::Less {
            let reflected_vertices = simplex.points();
            let expanded = transform(simplex, &original, self.khi, &mut f, &order)?;

            if order(&reflected, &expanded) == Ordering::Greater {
                tracing::trace!(value = expanded.value(), "multi-directional: expand");
            } else {
                tracing::trace!(value = reflected.value(), "multi-directional: reflect");
                simplex.set_points(reflected_vertices)?;
            }
        } else {
            let contracted = transform(simplex, &original, self.gamma, &mut f, &order)?;
            tracing::trace!(value = contracted.value(), "multi-directional: contract");
        }
        Ok(())
    }
}

/// Replaces the simplex with `original` transformed about its best vertex.
///
/// Vertex 0 is kept with its known value. Every other vertex `v` becomes
/// `best + coefficient * (best - v)`. The new simplex is evaluated and sorted,
/// and its best vertex returned.
fn transform<F, E, C>(
    simplex: &mut Simplex,
    original: &[PointValue],
    coefficient: f64,
    f: F,
    order: C,
) -> Result<PointValue, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: From<SimplexError>,
    C: Fn(&PointValue, &PointValue) -> Ordering,
{
    let best = &original[0];
    let vertices = std::iter::once(best.clone())
        .chain(
            original[1..]
                .iter()
                .map(|vertex| PointValue::unevaluated(toward(best.point(), -coefficient, vertex.point()))),
        )
        .collect();

    simplex.set_points(vertices)?;
    simplex.evaluate(f, order)?;
    Ok(simplex.vertices()[0].clone())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct Coefficients {
    khi: f64,
    gamma: f64,
}

#[cfg(feature = "serde")]
impl Default for Coefficients {
    fn default() -> Self {
        let MultiDirectional { khi, gamma } = MultiDirectional::default();
        Self { khi, gamma }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Coefficients> for MultiDirectional {
    type Error = CoefficientError;

    fn try_from(c: Coefficients) -> Result<Self, Self::Error> {
        Self::new(c.khi, c.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use amoeba_core::Goal;

    /// The simplex {(0,0), (1,0), (0,1)}, evaluated and sorted.
    fn unit_triangle<F>(f: F) -> Simplex
    where
        F: FnMut(&[f64]) -> Result<f64, SimplexError>,
    {
        let reference = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        let mut simplex = Simplex::from_reference(&reference).unwrap();
        simplex.build(&[0.0, 0.0]).unwrap();
        simplex.evaluate(f, Goal::Minimize.comparator()).unwrap();
        simplex
    }

    fn shifted_sphere(shift: f64) -> impl Fn(&[f64]) -> Result<f64, SimplexError> {
        move |x: &[f64]| Ok(x.iter().map(|xi| (xi + shift).powi(2)).sum())
    }

    fn points(simplex: &Simplex) -> Vec<Vec<f64>> {
        simplex.vertices().iter().map(|v| v.point().to_vec()).collect()
    }

    #[test]
    fn reflects_through_the_best_vertex() {
        let sphere = shifted_sphere(0.0);
        let mut simplex = unit_triangle(&sphere);

        let mut visited = Vec::new();
        MultiDirectional::default()
            .iterate(
                &mut simplex,
                |x: &[f64]| {
                    visited.push(x.to_vec());
                    sphere(x)
                },
                Goal::Minimize.comparator(),
            )
            .unwrap();

        // Reflection does not beat (0,0), so the contracted simplex is kept.
        assert_eq!(visited[..2], [vec![-1.0, 0.0], vec![0.0, -1.0]]);
        assert_eq!(visited.len(), 4);
        assert_eq!(
            points(&simplex),
            [vec![0.0, 0.0], vec![-0.5, 0.0], vec![0.0, -0.5]]
        );
    }

    #[test]
    fn keeps_expansion_when_it_beats_reflection() {
        // Minimum at (-3,-3): reflected best is 13, expanded best is 10.
        let sphere = shifted_sphere(3.0);
        let mut simplex = unit_triangle(&sphere);

        MultiDirectional::default()
            .iterate(&mut simplex, &sphere, Goal::Minimize.comparator())
            .unwrap();

        assert_eq!(
            points(&simplex),
            [vec![-2.0, 0.0], vec![0.0, -2.0], vec![0.0, 0.0]]
        );
    }

    #[test]
    fn reverts_to_reflection_when_expansion_is_worse() {
        // Minimum at (-1,-1): reflected best is 1, expanded best is 2.
        let sphere = shifted_sphere(1.0);
        let mut simplex = unit_triangle(&sphere);

        MultiDirectional::default()
            .iterate(&mut simplex, &sphere, Goal::Minimize.comparator())
            .unwrap();

        assert_eq!(
            points(&simplex),
            [vec![-1.0, 0.0], vec![0.0, -1.0], vec![0.0, 0.0]]
        );
        assert!(simplex.vertices().iter().all(PointValue::is_evaluated));
    }

    #[test]
    fn reverts_to_reflection_when_expansion_only_ties() {
        // Zero beyond the lines x = -1 and y = -1, one elsewhere.
        let ledge = |x: &[f64]| -> Result<f64, SimplexError> {
            Ok(if x[0] <= -1.0 || x[1] <= -1.0 { 0.0 } else { 1.0 })
        };
        let mut simplex = unit_triangle(ledge);

        let mut visited = Vec::new();
        MultiDirectional::default()
            .iterate(
                &mut simplex,
                |x: &[f64]| {
                    visited.push(x.to_vec());
                    ledge(x)
                },
                Goal::Minimize.comparator(),
            )
            .unwrap();

        // Both the reflected and the expanded simplex were evaluated.
        assert_eq!(
            visited,
            [
                vec![-1.0, 0.0],
                vec![0.0, -1.0],
                vec![-2.0, 0.0],
                vec![0.0, -2.0]
            ]
        );
        assert_eq!(
            points(&simplex),
            [vec![-1.0, 0.0], vec![0.0, -1.0], vec![0.0, 0.0]]
        );
        let values: Vec<f64> = simplex.vertices().iter().map(PointValue::value).collect();
        assert_eq!(values, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn rejects_non_positive_coefficients() {
        assert_eq!(
            MultiDirectional::new(-2.0, 0.5),
            Err(CoefficientError {
                name: "khi",
                value: -2.0
            })
        );
    }
}
