//! Newton-Raphson root finding from an initial guess.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration replaces the function by its tangent
//! line and jumps to that line's root:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The solver converges when a step moves the iterate by less than the
//! configured tolerance, and returns the new iterate.
//!
//! # Limitations
//!
//! - **Needs the derivative**: `df` must be the analytic derivative of `f`.
//! - **Local**: convergence depends on the initial guess. A flat tangent
//!   fails with [`Error::ZeroDerivative`]; oscillation or divergence fails
//!   with [`Error::MaxIterationsExceeded`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after computing the new iterate
//! and before the convergence test. Observers can return
//! [`Action::StopEarly`] to halt and keep the new iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootline_core::{Function, Observer};

/// Finds a root of `f` by Newton-Raphson iteration from `x0`.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] the first time `df` is exactly zero,
/// [`Error::MaxIterationsExceeded`] if the iteration budget runs out,
/// [`Error::NonFiniteGuess`] if `x0` is not finite, and
/// [`Error::NonFiniteEvaluation`] if `f` or `df` returns a non-finite value.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut x = x0;
    for iter in 1..=config.max_iters() {
        let fx = f.eval(x);
        let dfx = df.eval(x);

        if !fx.is_finite() || !dfx.is_finite() {
            return Err(Error::NonFiniteEvaluation { x, fx, dfx });
        }

        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let x_new = x - fx / dfx;
        let event = Event {
            iter,
            x,
            fx,
            dfx,
            x_new,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: x_new,
                step: event.step(),
                iters: iter,
            });
        }

        if event.step() < config.tol() {
            return Ok(Solution {
                status: Status::Converged,
                root: x_new,
                step: event.step(),
                iters: iter,
            });
        }

        x = x_new;
    }

    Err(Error::MaxIterationsExceeded {
        max_iters: config.max_iters(),
        last: x,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, x0, config, ())
}
