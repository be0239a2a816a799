use amoeba_core::Goal;

use super::{ConfigError, LineSearchError};

/// The golden ratio, used to grow the bracket.
const GOLD: f64 = 1.618_034;

/// Guards the parabolic step against a vanishing denominator.
const EPS_MIN: f64 = 1e-21;

/// Three step lengths straddling an optimum.
///
/// `lo <= hi`, and the value at `mid` is at least as good as the values at both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub mid: f64,
    pub hi: f64,
    pub f_lo: f64,
    pub f_mid: f64,
    pub f_hi: f64,
}

/// Finds a bracket by walking downhill with golden-ratio steps.
///
/// Each step tries a parabolic extrapolation through the last three points,
/// limited to `grow_limit` times the current step, and falls back to a
/// golden-ratio step when the parabola is not useful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBracketFinder"))]
pub struct BracketFinder {
    grow_limit: f64,
    max_evals: usize,
}

impl Default for BracketFinder {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100.0, 50).unwrap()
    }
}

impl BracketFinder {
    /// Creates a bracket finder.
    ///
    /// # Errors
    ///
    /// Returns an error if `grow_limit` is not finite and positive, or if
    /// `max_evals` is zero.
    pub fn new(grow_limit: f64, max_evals: usize) -> Result<Self, ConfigError> {
        if !grow_limit.is_finite() || grow_limit <= 0.0 {
            return Err(ConfigError::GrowLimitNotPositive { value: grow_limit });
        }
        if max_evals == 0 {
            return Err(ConfigError::MaxEvalsZero);
        }

        Ok(Self {
            grow_limit,
            max_evals,
        })
    }

    /// Returns the largest allowed parabolic step, relative to the last step.
    #[must_use]
    pub fn grow_limit(&self) -> f64 {
        self.grow_limit
    }

    /// Returns the evaluation budget of a single search.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Brackets an optimum of `f`, starting from the step lengths `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`LineSearchError::TooManyEvaluations`] (converted into `E`) if
    /// the search needs more than `max_evals` evaluations, or the first error
    /// returned by `f`.
    pub fn search<F, E>(&self, mut f: F, goal: Goal, a: f64, b: f64) -> Result<Bracket, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
        E: From<LineSearchError>,
    {
        let mut evals = 0;
        let mut score = |x: f64| -> Result<f64, E> {
            if evals >= self.max_evals {
                return Err(LineSearchError::TooManyEvaluations {
                    max: self.max_evals,
                }
                .into());
            }
            evals += 1;
            Ok(goal.transform(f(x)?))
        };

        let (mut xa, mut xb) = (a, b);
        let mut fa = score(xa)?;
        let mut fb = score(xb)?;
        if fa < fb {
            std::mem::swap(&mut xa, &mut xb);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut xc = xb + GOLD * (xb - xa);
        let mut fc = score(xc)?;

        while fc < fb {
            let tmp1 = (xb - xa) * (fb - fc);
            let tmp2 = (xb - xc) * (fb - fa);
            let val = tmp2 - tmp1;
            let denom = if val.abs() < EPS_MIN {
                2.0 * EPS_MIN
            } else {
                val
            };

            let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / (2.0 * denom);
            let w_lim = xb + self.grow_limit * (xc - xb);
            let mut fw;

            if (w - xc) * (xb - w) > 0.0 {
                // Parabolic minimum lies between b and c.
                fw = score(w)?;
                if fw < fc {
                    xa = xb;
                    xb = w;
                    fa = fb;
                    fb = fw;
                    break;
                } else if fw > fb {
                    xc = w;
                    fc = fw;
                    break;
                }
                w = xc + GOLD * (xc - xb);
                fw = score(w)?;
            } else if (w - w_lim) * (w_lim - xc) >= 0.0 {
                w = w_lim;
                fw = score(w)?;
            } else if (w - w_lim) * (xc - w) > 0.0 {
                fw = score(w)?;
                if fw < fc {
                    xb = xc;
                    xc = w;
                    w = xc + GOLD * (xc - xb);
                    fb = fc;
                    fc = fw;
                    fw = score(w)?;
                }
            } else {
                w = xc + GOLD * (xc - xb);
                fw = score(w)?;
            }

            xa = xb;
            fa = fb;
            xb = xc;
            fb = fc;
            xc = w;
            fc = fw;
        }

        let (lo, f_lo, hi, f_hi) = if xa <= xc {
            (xa, fa, xc, fc)
        } else {
            (xc, fc, xa, fa)
        };

        // Scores are transformed values; the transform is its own inverse.
        Ok(Bracket {
            lo,
            mid: xb,
            hi,
            f_lo: goal.transform(f_lo),
            f_mid: goal.transform(fb),
            f_hi: goal.transform(f_hi),
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawBracketFinder {
    grow_limit: f64,
    max_evals: usize,
}

#[cfg(feature = "serde")]
impl Default for RawBracketFinder {
    fn default() -> Self {
        let BracketFinder {
            grow_limit,
            max_evals,
        } = BracketFinder::default();
        Self {
            grow_limit,
            max_evals,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawBracketFinder> for BracketFinder {
    type Error = ConfigError;

    fn try_from(raw: RawBracketFinder) -> Result<Self, Self::Error> {
        Self::new(raw.grow_limit, raw.max_evals)
    }
}
