use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("no convergence after {max_iters} iterations (last x = {last})")]
    MaxIterationsExceeded { max_iters: usize, last: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess is not finite: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("non-finite evaluation at x = {x}: f(x) = {fx}, f'(x) = {dfx}")]
    NonFiniteEvaluation { x: f64, fx: f64, dfx: f64 },
}
