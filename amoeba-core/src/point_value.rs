/// A point paired with its objective value.
///
/// A pair created with [`PointValue::unevaluated`] holds NaN as its value until
/// a solver replaces it with an evaluated pair. Pairs are immutable; solvers
/// build new ones instead of updating values in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PointValue {
    point: Vec<f64>,
    value: f64,
}

impl PointValue {
    /// Creates a pair from a point and its value.
    #[must_use]
    pub fn new(point: Vec<f64>, value: f64) -> Self {
        Self { point, value }
    }

    /// Creates a pair whose value has not been computed yet.
    #[must_use]
    pub fn unevaluated(point: Vec<f64>) -> Self {
        Self::new(point, f64::NAN)
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Returns the objective value, or NaN if the pair is unevaluated.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` once the value has been computed.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        !self.value.is_nan()
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.point.len()
    }

    /// Consumes the pair, returning its coordinates and value.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.point, self.value)
    }
}
