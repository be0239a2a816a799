use thiserror::Error;

/// Budgets for a simplex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    max_evals: usize,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a simplex search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_evals must be strictly positive")]
    MaxEvals,

    #[error("max_iters must be strictly positive")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10_000).unwrap()
    }
}

impl Config {
    /// Creates a config with an evaluation budget and no iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxEvals`] if `max_evals` is zero.
    pub fn new(max_evals: usize) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }

        Ok(Self {
            max_evals,
            max_iters: None,
        })
    }

    /// Caps the number of iterations.
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

    /// Returns the maximum number of objective evaluations.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the iteration cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    max_evals: usize,
    #[serde(default)]
    max_iters: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let config = Self::new(raw.max_evals)?;
        match raw.max_iters {
            Some(max_iters) => config.with_max_iters(max_iters),
            None => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_budgets() {
        assert_eq!(Config::new(0), Err(ConfigError::MaxEvals));
        assert_eq!(
            Config::new(10).unwrap().with_max_iters(0),
            Err(ConfigError::MaxIters)
        );

        let config = Config::new(10).unwrap().with_max_iters(3).unwrap();
        assert_eq!(config.max_evals(), 10);
        assert_eq!(config.max_iters(), Some(3));
    }
}
