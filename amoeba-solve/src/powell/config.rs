use thiserror::Error;

use crate::line_search::{self, BracketFinder, Brent, LineSearch, MIN_REL_TOL};

/// Configuration for Powell's method.
///
/// The outer tolerances drive the default stopping test after each sweep.
/// The line tolerances drive the Brent search along each direction and
/// default to the square roots of the outer ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    rel_tol: f64,
    abs_tol: f64,
    line: Brent,
    bracket: BracketFinder,
    max_evals: usize,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a Powell config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("rel_tol {value} is below the minimum of {min}")]
    RelTolTooSmall { value: f64, min: f64 },

    #[error("abs_tol must be finite and positive, got {value}")]
    AbsTolNotPositive { value: f64 },

    #[error("max_evals must be strictly positive")]
    MaxEvals,

    #[error("max_iters must be strictly positive")]
    MaxIters,

    #[error("invalid line search settings: {0}")]
    Line(#[from] line_search::ConfigError),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-10, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a config from the outer tolerances.
    ///
    /// Line tolerances are set to `sqrt(rel_tol)` and `sqrt(abs_tol)`, the
    /// evaluation budget to 10 000, and there is no iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `rel_tol` is below twice the machine epsilon or if
    /// `abs_tol` is not finite and positive.
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

        Ok(Self {
            rel_tol,
            abs_tol,
            line: Brent::new(rel_tol.sqrt(), abs_tol.sqrt())?,
            bracket: BracketFinder::default(),
            max_evals: 10_000,
            max_iters: None,
        })
    }

    /// Overrides the line search tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerances are invalid for Brent's method.
    pub fn with_line_tolerances(self, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            line: Brent::new(rel_tol, abs_tol)?,
            ..self
        })
    }

    /// Overrides the bracketing settings of the line search.
    #[must_use]
    pub fn with_bracket(self, bracket: BracketFinder) -> Self {
        Self { bracket, ..self }
    }

    /// Sets the objective evaluation budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxEvals`] if `max_evals` is zero.
    pub fn with_max_evals(self, max_evals: usize) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        Ok(Self { max_evals, ..self })
    }

    /// Caps the number of sweeps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxIters`] if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            max_iters: Some(max_iters),
            ..self
        })
    }

    /// Returns the relative tolerance of the default stopping test.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance of the default stopping test.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance of the line search.
    #[must_use]
    pub fn line_rel_tol(&self) -> f64 {
        self.line.rel_tol()
    }

    /// Returns the absolute tolerance of the line search.
    #[must_use]
    pub fn line_abs_tol(&self) -> f64 {
        self.line.abs_tol()
    }

    /// Returns the bracketing settings.
    #[must_use]
    pub fn bracket(&self) -> BracketFinder {
        self.bracket
    }

    /// Returns the maximum number of objective evaluations.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the sweep cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    pub(super) fn line_search(&self) -> LineSearch {
        LineSearch::new(self.bracket, self.line)
    }
}

/// The file representation of [`Config`]; omitted line tolerances are derived.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConfig {
    rel_tol: f64,
    abs_tol: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line_rel_tol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line_abs_tol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_evals: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_iters: Option<usize>,
    #[serde(default)]
    bracket: BracketFinder,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut config = Self::new(raw.rel_tol, raw.abs_tol)?.with_bracket(raw.bracket);
        if raw.line_rel_tol.is_some() || raw.line_abs_tol.is_some() {
            config = config.with_line_tolerances(
                raw.line_rel_tol.unwrap_or(config.line_rel_tol()),
                raw.line_abs_tol.unwrap_or(config.line_abs_tol()),
            )?;
        }
        if let Some(max_evals) = raw.max_evals {
            config = config.with_max_evals(max_evals)?;
        }
        if let Some(max_iters) = raw.max_iters {
            config = config.with_max_iters(max_iters)?;
        }
        Ok(config)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            rel_tol: config.rel_tol,
            abs_tol: config.abs_tol,
            line_rel_tol: Some(config.line_rel_tol()),
            line_abs_tol: Some(config.line_abs_tol()),
            max_evals: Some(config.max_evals),
            max_iters: config.max_iters,
            bracket: config.bracket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derives_line_tolerances() {
        let config = Config::new(1e-8, 1e-10).unwrap();

        assert_relative_eq!(config.line_rel_tol(), 1e-4);
        assert_relative_eq!(config.line_abs_tol(), 1e-5);
        assert_eq!(config.max_iters(), None);
    }

    #[test]
    fn rejects_invalid_tolerances() {
        assert!(matches!(
            Config::new(f64::EPSILON, 1e-10),
            Err(ConfigError::RelTolTooSmall { .. })
        ));
        assert!(matches!(
            Config::new(1e-8, -1.0),
            Err(ConfigError::AbsTolNotPositive { .. })
        ));
        assert!(matches!(
            Config::default().with_line_tolerances(1e-30, 1e-8),
            Err(ConfigError::Line(
                line_search::ConfigError::RelTolTooSmall { .. }
            ))
        ));
    }

    #[test]
    fn rejects_zero_budgets() {
        assert_eq!(
            Config::default().with_max_evals(0),
            Err(ConfigError::MaxEvals)
        );
        assert_eq!(
            Config::default().with_max_iters(0),
            Err(ConfigError::MaxIters)
        );
    }
}
