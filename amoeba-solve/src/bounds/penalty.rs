use amoeba_core::Objective;

use super::{
    AdapterError, BoundsError,
    error::{check_box, check_dimension},
};

/// Solves a box-constrained problem by penalizing infeasible points.
///
/// Inside the box the wrapped objective is returned unchanged. Outside, the
/// objective is not called; the value is `offset` plus a sum of
/// `sqrt(scale[j] * overshoot[j])` terms, taken from the first violating
/// component onward. Feasible components have zero overshoot.
///
/// For minimization `offset` should exceed every feasible objective value.
#[derive(Debug, Clone)]
pub struct PenaltyAdapter<O> {
    objective: O,
    lower: Vec<f64>,
    upper: Vec<f64>,
    offset: f64,
    scale: Vec<f64>,
}

impl<O> PenaltyAdapter<O> {
    /// Wraps `objective` with bounds and penalty parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `lower`, `upper`, and `scale` differ in length, or
    /// if any `upper[i] < lower[i]` (including NaN bounds).
    pub fn new(
        objective: O,
        lower: &[f64],
        upper: &[f64],
        offset: f64,
        scale: &[f64],
    ) -> Result<Self, BoundsError> {
        check_dimension(scale.len(), lower.len())?;
        check_box(lower, upper)?;

        Ok(Self {
            objective,
            lower: lower.to_vec(),
            upper: upper.to_vec(),
            offset,
            scale: scale.to_vec(),
        })
    }

    /// Returns the penalty for `point`, or `None` if it is inside the box.
    fn penalty(&self, point: &[f64]) -> Option<f64> {
        let first = point
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .position(|(&x, (&lower, &upper))| x < lower || x > upper)?;

        let sum: f64 = (first..point.len())
            .map(|j| {
                let overshoot = if point[j] < self.lower[j] {
                    self.lower[j] - point[j]
                } else if point[j] > self.upper[j] {
                    point[j] - self.upper[j]
                } else {
                    0.0
                };
                (self.scale[j] * overshoot).sqrt()
            })
            .sum();
        Some(self.offset + sum)
    }
}

impl<O: Objective> Objective for PenaltyAdapter<O> {
    type Error = AdapterError<O::Error>;

    fn value(&self, point: &[f64]) -> Result<f64, Self::Error> {
        check_dimension(self.scale.len(), point.len())?;
        match self.penalty(point) {
            Some(penalty) => Ok(penalty),
            None => self.objective.value(point).map_err(AdapterError::Objective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cube(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi.powi(3)).sum()
    }

    #[test]
    fn feasible_points_pass_through() {
        let adapter = PenaltyAdapter::new(cube, &[0.0], &[1.0], 1000.0, &[1.0]).unwrap();

        assert_relative_eq!(adapter.value(&[0.5]).unwrap(), 0.125);
    }

    #[test]
    fn infeasible_points_are_penalized() {
        let adapter = PenaltyAdapter::new(cube, &[0.0], &[1.0], 1000.0, &[1.0]).unwrap();

        assert_relative_eq!(adapter.value(&[2.0]).unwrap(), 1001.0);
        assert_relative_eq!(adapter.value(&[-4.0]).unwrap(), 1002.0);
    }

    #[test]
    fn penalty_sums_from_the_first_violation() {
        let adapter = PenaltyAdapter::new(
            cube,
            &[0.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0],
            100.0,
            &[4.0, 1.0, 9.0],
        )
        .unwrap();

        // Component 0 is feasible, component 1 overshoots by 4, and
        // component 2 by 1: 100 + sqrt(1 * 4) + sqrt(9 * 1).
        assert_relative_eq!(adapter.value(&[0.5, 5.0, -1.0]).unwrap(), 105.0);

        // Only component 0 violates its bounds.
        assert_relative_eq!(adapter.value(&[2.0, 0.5, 0.5]).unwrap(), 102.0);
    }

    #[test]
    fn rejects_mismatched_scale() {
        assert!(matches!(
            PenaltyAdapter::new(cube, &[0.0, 0.0], &[1.0, 1.0], 1.0, &[1.0]),
            Err(BoundsError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_points_of_the_wrong_length() {
        let adapter = PenaltyAdapter::new(cube, &[0.0], &[1.0], 1000.0, &[1.0]).unwrap();

        assert!(matches!(
            adapter.value(&[0.5, 0.5]),
            Err(AdapterError::Bounds(BoundsError::DimensionMismatch { .. }))
        ));
    }
}
