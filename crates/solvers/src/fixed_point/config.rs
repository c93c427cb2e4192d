use thiserror::Error;

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    tolerance: f64,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a fixed-point solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-5).unwrap()
    }
}

impl Config {
    /// Creates an uncapped config with a validated tolerance.
    ///
    /// Without a cap, a divergent or oscillating iteration never returns.
    /// Use [`Config::with_max_iters`] to bound it.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters: None,
        })
    }

    /// Returns the config capped at `max_iters` updates.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Returns the convergence tolerance on `|u - g(u)|`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the update cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}
