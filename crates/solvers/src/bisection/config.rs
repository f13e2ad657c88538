use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self { tol: 1e-6 }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The solver stops once the bracket half-width is at most `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite or not positive.
    pub fn new(tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(Self { tol })
    }

    /// Returns the half-width tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}
