use thiserror::Error;

use super::SlopeCheck;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    max_iters: usize,
    root_tol: f64,
    y_tol: f64,
    step: f64,
    zero_slope: f64,
    slope_check: SlopeCheck,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("root_tol must be finite and positive")]
    RootTol,

    #[error("y_tol must be finite and positive")]
    YTol,

    #[error("step must be finite and positive")]
    Step,

    #[error("zero_slope must be finite and non-negative")]
    ZeroSlope,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-7, 1e-7).unwrap()
    }
}

impl Config {
    /// Default forward-difference step.
    pub const DEFAULT_STEP: f64 = 1e-6;

    /// Default zero-slope floor.
    pub const DEFAULT_ZERO_SLOPE: f64 = 1e-7;

    /// Creates a new config with validated tolerances.
    ///
    /// The derivative settings start at [`Self::DEFAULT_STEP`],
    /// [`Self::DEFAULT_ZERO_SLOPE`] and [`SlopeCheck::Positive`].
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is not finite and positive.
    pub fn new(max_iters: usize, root_tol: f64, y_tol: f64) -> Result<Self, ConfigError> {
        if !root_tol.is_finite() || root_tol <= 0.0 {
            return Err(ConfigError::RootTol);
        }
        if !y_tol.is_finite() || y_tol <= 0.0 {
            return Err(ConfigError::YTol);
        }

        Ok(Self {
            max_iters,
            root_tol,
            y_tol,
            step: Self::DEFAULT_STEP,
            zero_slope: Self::DEFAULT_ZERO_SLOPE,
            slope_check: SlopeCheck::default(),
        })
    }

    /// Returns the config with a different forward-difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        Ok(Self { step, ..self })
    }

    /// Returns the config with a different zero-slope floor.
    ///
    /// # Errors
    ///
    /// Returns an error if `zero_slope` is negative or non-finite.
    pub fn with_zero_slope(self, zero_slope: f64) -> Result<Self, ConfigError> {
        if !zero_slope.is_finite() || zero_slope < 0.0 {
            return Err(ConfigError::ZeroSlope);
        }
        Ok(Self { zero_slope, ..self })
    }

    /// Returns the config with a different slope check.
    #[must_use]
    pub fn with_slope_check(self, slope_check: SlopeCheck) -> Self {
        Self {
            slope_check,
            ..self
        }
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the distance between successive estimates.
    #[must_use]
    pub fn root_tol(&self) -> f64 {
        self.root_tol
    }

    /// Returns the tolerance on the absolute function value.
    #[must_use]
    pub fn y_tol(&self) -> f64 {
        self.y_tol
    }

    /// Returns the forward-difference step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the zero-slope floor.
    #[must_use]
    pub fn zero_slope(&self) -> f64 {
        self.zero_slope
    }

    /// Returns the slope check.
    #[must_use]
    pub fn slope_check(&self) -> SlopeCheck {
        self.slope_check
    }
}
