/// The search directions of Powell's method.
///
/// Starts as the standard basis. Directions are allowed to drift toward
/// linear dependence; [`DirectionSet::replace`] is the only repair.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet {
    directions: Vec<Vec<f64>>,
}

impl DirectionSet {
    /// Creates the standard basis of `dimension`-space.
    #[must_use]
    pub fn identity(dimension: usize) -> Self {
        let directions = (0..dimension)
            .map(|row| {
                (0..dimension)
                    .map(|col| if row == col { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();
        Self { directions }
    }

    /// Returns the number of directions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Returns `true` for the empty set of a zero-dimensional problem.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Returns the direction at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.directions.get(index).map(Vec::as_slice)
    }

    /// Iterates over the directions in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.directions.iter().map(Vec::as_slice)
    }

    /// Drops the direction at `index` and appends `direction` at the end.
    ///
    /// The last direction moves into the vacated slot, so every other
    /// direction keeps its position.
    pub(super) fn replace(&mut self, index: usize, direction: Vec<f64>) {
        let last = self.directions.len() - 1;
        self.directions.swap(index, last);
        self.directions[last] = direction;
    }
}
