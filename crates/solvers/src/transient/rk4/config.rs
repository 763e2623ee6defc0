use thiserror::Error;

/// Configuration for the RK4 engine: step size `h` and vector length `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_size: f64,
    dimension: usize,
}

/// Errors that can occur when validating an RK4 config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step size must be positive, got {step_size}")]
    NonPositiveStepSize { step_size: f64 },

    #[error("step size must be finite, got {step_size}")]
    NonFiniteStepSize { step_size: f64 },

    #[error("state vector length must be at least 1")]
    ZeroDimension,
}

impl Config {
    /// Creates a new config with a validated step size and vector length.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` is not finite or not positive, or if
    /// `dimension` is zero.
    pub fn new(step_size: f64, dimension: usize) -> Result<Self, ConfigError> {
        if !step_size.is_finite() {
            return Err(ConfigError::NonFiniteStepSize { step_size });
        }
        if step_size <= 0.0 {
            return Err(ConfigError::NonPositiveStepSize { step_size });
        }
        if dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        Ok(Self {
            step_size,
            dimension,
        })
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the state vector length `n`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
