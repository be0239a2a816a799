/// The transform between unbounded and bounded values for one component.
///
/// Chosen once per component from which of its bounds are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mapper {
    /// Both bounds are infinite; values pass through unchanged.
    NoBounds,

    /// Only the lower bound is finite.
    LowerOnly(f64),

    /// Only the upper bound is finite.
    UpperOnly(f64),

    /// Both bounds are finite; a sigmoid and its inverse.
    Both(f64, f64),
}

impl Mapper {
    /// Picks the mapper for a component bounded by `lower` and `upper`.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        match (lower.is_infinite(), upper.is_infinite()) {
            (true, true) => Self::NoBounds,
            (true, false) => Self::UpperOnly(upper),
            (false, true) => Self::LowerOnly(lower),
            (false, false) => Self::Both(lower, upper),
        }
    }

    /// Maps an unbounded value into the bounds.
    #[must_use]
    pub fn to_bounded(self, y: f64) -> f64 {
        match self {
            Self::NoBounds => y,
            Self::LowerOnly(lower) => lower + y.exp(),
            Self::UpperOnly(upper) => upper - (-y).exp(),
            Self::Both(lower, upper) => lower + (upper - lower) / (1.0 + (-y).exp()),
        }
    }

    /// Maps a bounded value back to the unbounded domain.
    ///
    /// Values on a finite bound map to an infinity.
    #[must_use]
    pub fn to_unbounded(self, x: f64) -> f64 {
        match self {
            Self::NoBounds => x,
            Self::LowerOnly(lower) => (x - lower).ln(),
            Self::UpperOnly(upper) => -(upper - x).ln(),
            Self::Both(lower, upper) => ((x - lower) / (upper - x)).ln(),
        }
    }
}
