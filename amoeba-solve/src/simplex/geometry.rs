use std::cmp::Ordering;

use amoeba_core::PointValue;

use super::SimplexError;

/// An ordered set of `dimension + 1` vertices in `dimension`-space.
///
/// A simplex is created from a *relative* geometry, the offsets of vertices
/// `1..=dimension` from vertex 0, and only gains absolute coordinates when
/// [`Simplex::build`] anchors it at a start point. Built vertices start out
/// unevaluated; [`Simplex::evaluate`] computes the missing values and sorts the
/// vertices best first.
///
/// Between strategy iterations only the two ends of the vertex list are
/// guaranteed to be in order: the best vertex at index 0 and the worst at the
/// last index.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    dimension: usize,
    start_configuration: Vec<Vec<f64>>,
    vertices: Vec<PointValue>,
}

impl Simplex {
    /// Creates a simplex from one step length per axis.
    ///
    /// Vertex `i` is offset from vertex 0 along each of the first `i` axes by
    /// the corresponding step, so the edges follow a staircase.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::EmptySteps`] if `steps` is empty, or
    /// [`SimplexError::ZeroStep`] if any step is zero.
    pub fn from_steps(steps: &[f64]) -> Result<Self, SimplexError> {
        if steps.is_empty() {
            return Err(SimplexError::EmptySteps);
        }
        if let Some(index) = steps.iter().position(|&step| step == 0.0) {
            return Err(SimplexError::ZeroStep { index });
        }

        let dimension = steps.len();
        let start_configuration = (0..dimension)
            .map(|row| {
                (0..dimension)
                    .map(|axis| if axis <= row { steps[axis] } else { 0.0 })
                    .collect()
            })
            .collect();

        Ok(Self {
            dimension,
            start_configuration,
            vertices: Vec::new(),
        })
    }

    /// Creates a simplex whose steps all have the same length.
    ///
    /// # Errors
    ///
    /// Fails like [`Simplex::from_steps`] if `dimension` or `side` is zero.
    pub fn hypercube(dimension: usize, side: f64) -> Result<Self, SimplexError> {
        Self::from_steps(&vec![side; dimension])
    }

    /// Creates a simplex with the shape of an explicit reference simplex.
    ///
    /// The simplex has dimension `reference.len() - 1` and every reference
    /// vertex must have that many coordinates. Only the offsets from
    /// `reference[0]` are kept, so the reference itself is never evaluated.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` is empty, if a vertex has the wrong
    /// number of coordinates, or if two vertices are identical.
    pub fn from_reference(reference: &[Vec<f64>]) -> Result<Self, SimplexError> {
        if reference.is_empty() {
            return Err(SimplexError::EmptyReference);
        }

        let dimension = reference.len() - 1;
        for (second, vertex) in reference.iter().enumerate() {
            if vertex.len() != dimension {
                return Err(SimplexError::DimensionMismatch {
                    expected: dimension,
                    found: vertex.len(),
                });
            }
            if let Some(first) = reference[..second].iter().position(|other| other == vertex) {
                return Err(SimplexError::DuplicateVertex { first, second });
            }
        }

        let origin = &reference[0];
        let start_configuration = reference[1..]
            .iter()
            .map(|vertex| vertex.iter().zip(origin).map(|(v, o)| v - o).collect())
            .collect();

        Ok(Self {
            dimension,
            start_configuration,
            vertices: Vec::new(),
        })
    }

    /// Returns the dimension of the space the simplex lives in.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of vertices, always `dimension + 1`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.dimension + 1
    }

    /// Returns `true` once the simplex has been anchored at a start point.
    #[must_use]
    pub fn is_built(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Anchors the simplex at `start`, replacing any existing vertices.
    ///
    /// Vertex 0 is `start` itself and vertex `i` is `start` plus the `i`-th
    /// offset. All vertices are unevaluated.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::DimensionMismatch`] if `start` does not have
    /// `dimension` coordinates.
    pub fn build(&mut self, start: &[f64]) -> Result<(), SimplexError> {
        if start.len() != self.dimension {
            return Err(SimplexError::DimensionMismatch {
                expected: self.dimension,
                found: start.len(),
            });
        }

        let offsets = self.start_configuration.iter().map(|offset| {
            let point = start.iter().zip(offset).map(|(s, o)| s + o).collect();
            PointValue::unevaluated(point)
        });
        self.vertices = std::iter::once(PointValue::unevaluated(start.to_vec()))
            .chain(offsets)
            .collect();
        Ok(())
    }

    /// Evaluates every unevaluated vertex, then sorts all vertices by `order`.
    ///
    /// Vertices that already hold a value are not re-evaluated. The sort is
    /// stable, so vertices that compare equal keep their relative positions.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::NotBuilt`] (converted into `E`) if the simplex
    /// has no vertices, or the first error returned by `f`.
    pub fn evaluate<F, E, C>(&mut self, mut f: F, order: C) -> Result<(), E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: From<SimplexError>,
        C: Fn(&PointValue, &PointValue) -> Ordering,
    {
        if !self.is_built() {
            return Err(SimplexError::NotBuilt.into());
        }

        for vertex in &mut self.vertices {
            if !vertex.is_evaluated() {
                let value = f(vertex.point())?;
                *vertex = PointValue::new(vertex.point().to_vec(), value);
            }
        }
        self.vertices.sort_by(|a, b| order(a, b));
        Ok(())
    }

    /// Inserts `candidate` in sorted position and evicts the worst vertex.
    ///
    /// Vertices `0..dimension` are scanned in order; whenever a vertex is worse
    /// than the candidate the two swap places and the scan continues with the
    /// displaced vertex. Whatever is held at the end lands in the last slot.
    /// On a sorted simplex this keeps the `dimension + 1` best of the old
    /// vertices plus the candidate, still sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::NotBuilt`] if the simplex has no vertices.
    pub fn replace_worst_point<C>(
        &mut self,
        candidate: PointValue,
        order: C,
    ) -> Result<(), SimplexError>
    where
        C: Fn(&PointValue, &PointValue) -> Ordering,
    {
        if !self.is_built() {
            return Err(SimplexError::NotBuilt);
        }

        let mut candidate = candidate;
        for vertex in &mut self.vertices[..self.dimension] {
            if order(vertex, &candidate) == Ordering::Greater {
                std::mem::swap(vertex, &mut candidate);
            }
        }
        self.vertices[self.dimension] = candidate;
        Ok(())
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the simplex is not built or `index` is out of range.
    pub fn point(&self, index: usize) -> Result<&PointValue, SimplexError> {
        self.check_index(index)?;
        Ok(&self.vertices[index])
    }

    /// Replaces the vertex at `index`.
    ///
    /// The vertex is moved in as is. It is not checked for dimension and its
    /// value, evaluated or not, is trusted.
    ///
    /// # Errors
    ///
    /// Returns an error if the simplex is not built or `index` is out of range.
    pub fn set_point(&mut self, index: usize, vertex: PointValue) -> Result<(), SimplexError> {
        self.check_index(index)?;
        self.vertices[index] = vertex;
        Ok(())
    }

    /// Returns a copy of all vertices.
    #[must_use]
    pub fn points(&self) -> Vec<PointValue> {
        self.vertices.clone()
    }

    /// Returns the vertices without copying them.
    ///
    /// Empty until the simplex is built.
    #[must_use]
    pub fn vertices(&self) -> &[PointValue] {
        &self.vertices
    }

    /// Replaces all vertices, taking ownership of `vertices`.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::SizeMismatch`] if `vertices` does not hold
    /// exactly `dimension + 1` vertices.
    pub fn set_points(&mut self, vertices: Vec<PointValue>) -> Result<(), SimplexError> {
        if vertices.len() != self.size() {
            return Err(SimplexError::SizeMismatch {
                expected: self.size(),
                found: vertices.len(),
            });
        }
        self.vertices = vertices;
        Ok(())
    }

    /// Returns the best vertex, if the simplex is built.
    #[must_use]
    pub fn best(&self) -> Option<&PointValue> {
        self.vertices.first()
    }

    /// Returns the worst vertex, if the simplex is built.
    #[must_use]
    pub fn worst(&self) -> Option<&PointValue> {
        self.vertices.last()
    }

    fn check_index(&self, index: usize) -> Result<(), SimplexError> {
        if !self.is_built() {
            return Err(SimplexError::NotBuilt);
        }
        if index >= self.size() {
            return Err(SimplexError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }
}

/// Returns `origin + coefficient * (target - origin)`.
pub(super) fn toward(origin: &[f64], coefficient: f64, target: &[f64]) -> Vec<f64> {
    origin
        .iter()
        .zip(target)
        .map(|(o, t)| o + coefficient * (t - o))
        .collect()
}

/// Returns the coordinate-wise mean of `vertices`.
pub(super) fn centroid(vertices: &[PointValue]) -> Vec<f64> {
    let dimension = vertices.first().map_or(0, PointValue::dimension);
    let mut centroid = vec![0.0; dimension];
    for vertex in vertices {
        for (c, x) in centroid.iter_mut().zip(vertex.point()) {
            *c += x;
        }
    }

    let count = vertices.len() as f64;
    for c in &mut centroid {
        *c /= count;
    }
    centroid
}
