use std::io;

use thiserror::Error;

use rootline_expr::ParseError;
use rootline_solvers::{bisection, newton};

/// Everything that can end a `rootline` run unsuccessfully.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("could not parse {what}: {source}")]
    Parse {
        what: &'static str,
        source: ParseError,
    },

    #[error("expected a number for {what}, got '{input}'")]
    InvalidNumber { what: &'static str, input: String },

    #[error("Invalid method. Please choose either 'bisection' or 'newton'.")]
    UnknownMethod(String),

    #[error("the Newton-Raphson method needs a derivative")]
    MissingDerivative,

    #[error("input ended before all values were entered")]
    EndOfInput,

    #[error(transparent)]
    Bisection(#[from] bisection::Error),

    #[error(transparent)]
    Newton(#[from] newton::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}
