use std::cmp::Ordering;

use crate::PointValue;

/// The optimization direction.
///
/// Solvers work in terms of a *score* that is always minimized internally:
/// [`Goal::transform`] leaves values unchanged for [`Goal::Minimize`] and
/// negates them for [`Goal::Maximize`]. The ordering returned by
/// [`Goal::compare`] sorts better values first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    /// Lower objective values are better.
    #[default]
    Minimize,

    /// Higher objective values are better.
    Maximize,
}

impl Goal {
    /// Transforms an objective value into a score for internal minimization.
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }

    /// Orders two objective values, better first.
    ///
    /// Uses the IEEE 754 total order, so the result is defined even for NaN.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Minimize => a.total_cmp(&b),
            Self::Maximize => b.total_cmp(&a),
        }
    }

    /// Orders two point/value pairs by value, better first.
    #[must_use]
    pub fn compare_points(self, a: &PointValue, b: &PointValue) -> Ordering {
        self.compare(a.value(), b.value())
    }

    /// Returns a comparator over point/value pairs for this goal.
    pub fn comparator(self) -> impl Fn(&PointValue, &PointValue) -> Ordering {
        move |a, b| self.compare_points(a, b)
    }

    /// Returns `true` if `a` is strictly better than `b`.
    #[must_use]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}
