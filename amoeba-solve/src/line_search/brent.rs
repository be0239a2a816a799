use amoeba_core::Goal;

use super::{Bracket, ConfigError, Point};

/// The golden section ratio, `(3 - √5) / 2`.
const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;

/// Smallest relative tolerance Brent's method can honor.
pub const MIN_REL_TOL: f64 = 2.0 * f64::EPSILON;

/// Brent's method for one-dimensional optimization.
///
/// Combines parabolic interpolation with golden section steps on a bracketing
/// interval. The search stops once the current point is within
/// `2 * (rel_tol * |x| + abs_tol)` of the interval midpoint, accounting for
/// the interval half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    rel_tol: f64,
    abs_tol: f64,
}

impl Brent {
    /// Creates a Brent optimizer with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `rel_tol` is below [`MIN_REL_TOL`] or if `abs_tol`
    /// is not finite and positive.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if rel_tol.is_nan() || rel_tol < MIN_REL_TOL {
            return Err(ConfigError::RelTolTooSmall {
                value: rel_tol,
                min: MIN_REL_TOL,
            });
        }
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(ConfigError::AbsTolNotPositive { value: abs_tol });
        }

        Ok(Self { rel_tol, abs_tol })
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Searches `[bracket.lo, bracket.hi]` starting from `bracket.mid`.
    ///
    /// The objective is evaluated at the start point again rather than trusting
    /// the bracket's value. Returns the best point seen.
    ///
    /// # Errors
    ///
    /// Returns the first error returned by `f`.
    pub fn optimize<F, E>(&self, mut f: F, goal: Goal, bracket: &Bracket) -> Result<Point, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let mut score = |x: f64| f(x).map(|value| goal.transform(value));

        let (mut a, mut b) = if bracket.lo < bracket.hi {
            (bracket.lo, bracket.hi)
        } else {
            (bracket.hi, bracket.lo)
        };
        let mut x = bracket.mid;
        let mut v = x;
        let mut w = x;
        let mut d: f64 = 0.0;
        let mut e: f64 = 0.0;
        let mut fx = score(x)?;
        let mut fv = fx;
        let mut fw = fx;

        // Best-of tracking happens on scores.
        let mut previous: Option<Point> = None;
        let mut current = Point::new(x, fx);
        let mut best = current;

        loop {
            let m = 0.5 * (a + b);
            let tol1 = self.rel_tol * x.abs() + self.abs_tol;
            let tol2 = 2.0 * tol1;

            if (x - m).abs() <= tol2 - 0.5 * (b - a) {
                let last = previous.map_or(current, |p| better(p, current));
                let best = better(best, last);
                return Ok(Point::new(best.x, goal.transform(best.value)));
            }

            let mut parabolic = false;
            if e.abs() > tol1 {
                let mut r = (x - w) * (fx - fv);
                let mut q = (x - v) * (fx - fw);
                let mut p = (x - v) * q - (x - w) * r;
                q = 2.0 * (q - r);
                if q > 0.0 {
                    p = -p;
                } else {
                    q = -q;
                }
                r = e;
                e = d;

                if p > q * (a - x) && p < q * (b - x) && p.abs() < (0.5 * q * r).abs() {
                    d = p / q;
                    let u = x + d;
                    // Keep away from the interval ends.
                    if u - a < tol2 || b - u < tol2 {
                        d = if x <= m { tol1 } else { -tol1 };
                    }
                    parabolic = true;
                }
            }
            if !parabolic {
                e = if x < m { b - x } else { a - x };
                d = GOLDEN_SECTION * e;
            }

            let u = if d.abs() < tol1 {
                if d >= 0.0 { x + tol1 } else { x - tol1 }
            } else {
                x + d
            };
            let fu = score(u)?;

            let last = current;
            current = Point::new(u, fu);
            best = better(best, better(last, current));
            previous = Some(last);

            if fu <= fx {
                if u < x {
                    b = x;
                } else {
                    a = x;
                }
                v = w;
                fv = fw;
                w = x;
                fw = fx;
                x = u;
                fx = fu;
            } else {
                if u < x {
                    a = u;
                } else {
                    b = u;
                }
                if fu <= fw || w == x {
                    v = w;
                    fv = fw;
                    w = u;
                    fw = fu;
                } else if fu <= fv || v == x || v == w {
                    v = u;
                    fv = fu;
                }
            }
        }
    }
}

/// Returns the point with the lower score, preferring `a` on ties.
fn better(a: Point, b: Point) -> Point {
    if a.value <= b.value { a } else { b }
}
