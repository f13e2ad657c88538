//! Bisection root finding on a bracketed interval.
//!
//! # Algorithm
//!
//! Bisection needs an interval `[a, b]` across which the function changes
//! sign. Each iteration evaluates the midpoint and keeps the half whose
//! endpoints still have opposite signs, halving the bracket width. The
//! solver stops once the half-width is at most the configured tolerance and
//! returns the final midpoint.
//!
//! An endpoint whose value is exactly zero satisfies the sign check. It is
//! not returned early; the loop runs as for any other bracket.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the bracket update.
//! An iteration whose midpoint evaluates to exactly zero returns that
//! midpoint immediately with [`Status::ExactRoot`] and emits no event.
//!
//! Observers can return [`Action::StopEarly`] to halt after any event.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootline_core::{Function, Observer};

use bracket::{Bounds, Bracket};

/// Finds a root of `f` using the bisection method.
///
/// Observers see each iteration's bracket, midpoint, and midpoint value.
/// Reversed brackets are normalized before solving.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// show a sign change, or if `f` returns a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    let left_value = evaluate(f, left)?;
    let right_value = evaluate(f, right)?;
    let mut bracket = Bracket::new(bounds, left_value, right_value)?;

    let mut iter = 0;
    while bracket.half_width() > config.tol() {
        let mid = bracket.midpoint();
        if !bracket.is_interior(mid) {
            return Ok(Solution {
                status: Status::PrecisionLimit,
                root: mid,
                bracket: bracket.as_array(),
                iters: iter,
            });
        }

        iter += 1;
        let value = evaluate(f, mid)?;

        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            return Ok(Solution {
                status: Status::ExactRoot,
                root: mid,
                bracket: bracket.as_array(),
                iters: iter,
            });
        }

        bracket.shrink(mid, value);

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            midpoint: mid,
            value,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: bracket.midpoint(),
                bracket: bracket.as_array(),
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::Converged,
        root: bracket.midpoint(),
        bracket: bracket.as_array(),
        iters: iter,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or `f` returns a non-finite value.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, rejecting non-finite values.
fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Function + ?Sized,
{
    let value = f.eval(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteEvaluation { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn config(tol: f64) -> Config {
        Config::new(tol).expect("valid tolerance")
    }

    /// Collects every event and never stops the solver.
    fn recording(events: &mut Vec<Event>) -> impl FnMut(&Event) -> Option<Action> + '_ {
        move |event: &Event| {
            events.push(*event);
            None
        }
    }

    #[test]
    fn finds_root_of_shifted_square() {
        let f = |x: f64| x * x - 4.0;

        let solution = solve_unobserved(&f, [0.0, 3.0], &config(1e-6)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 2.0, epsilon = 1e-6);
        assert!(f(solution.root).abs() < 1e-5);
    }

    #[test]
    fn final_bracket_is_within_twice_the_tolerance() {
        let f = |x: f64| x.cos() - x;
        let tol = 1e-8;

        let solution = solve_unobserved(&f, [0.0, 1.0], &config(tol)).expect("should solve");
        let [left, right] = solution.bracket;

        assert_eq!(solution.status, Status::Converged);
        assert!(right - left <= 2.0 * tol);
        assert!(left <= solution.root && solution.root <= right);
        assert_relative_eq!(solution.root, 0.739_085_133_2, epsilon = 1e-8);
    }

    #[test]
    fn emits_one_event_per_iteration() {
        let f = |x: f64| x * x - 4.0;
        let mut events = Vec::new();

        let solution = solve(&f, [0.0, 3.0], &config(0.5), recording(&mut events))
            .expect("should solve");

        // Half-widths: 1.5 -> 0.75 -> 0.375, so two iterations.
        assert_eq!(solution.iters, 2);
        assert_eq!(
            events,
            vec![
                Event {
                    iter: 1,
                    bracket: [1.5, 3.0],
                    midpoint: 1.5,
                    value: -1.75,
                },
                Event {
                    iter: 2,
                    bracket: [1.5, 2.25],
                    midpoint: 2.25,
                    value: 1.0625,
                },
            ]
        );
        assert_relative_eq!(solution.root, 1.875);
    }

    #[test]
    fn returns_exact_root_without_event() {
        let f = |x: f64| x - 1.0;
        let mut events = Vec::new();

        let solution = solve(&f, [0.0, 2.0], &config(1e-6), recording(&mut events))
            .expect("should solve");

        assert_eq!(solution.status, Status::ExactRoot);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.root, 1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn rejects_same_sign_before_iterating() {
        let f = |x: f64| x * x + 1.0;
        let mut events = Vec::new();

        let result = solve(&f, [-1.0, 1.0], &config(1e-6), recording(&mut events));

        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange {
                left_value,
                right_value,
                ..
            })) if left_value > 0.0 && right_value > 0.0
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn zero_endpoint_enters_the_loop() {
        // f(0) == 0 passes the sign check, and the search then drifts right
        // because f(left) never has a strict sign opposite to f(mid).
        let f = |x: f64| x * (x - 10.0);

        let solution = solve_unobserved(&f, [0.0, 3.0], &config(1e-3)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root, 3.0, epsilon = 1e-3);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let f = |x: f64| x * x - 36.0;

        let solution = solve_unobserved(&f, [10.0, 0.0], &config(1e-10)).expect("should solve");

        assert_relative_eq!(solution.root, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let f = |x: f64| x - 5.0;
        let result = solve_unobserved(&f, [5.0, 5.0], &config(1e-6));
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let f = |x: f64| x;

        let result = solve_unobserved(&f, [f64::NAN, 10.0], &config(1e-6));
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));

        let result = solve_unobserved(&f, [0.0, f64::INFINITY], &config(1e-6));
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
    }

    #[test]
    fn errors_on_non_finite_value() {
        let f = |x: f64| 1.0 / x;

        let result = solve_unobserved(&f, [0.0, 1.0], &config(1e-6));

        assert!(matches!(
            result,
            Err(Error::NonFiniteEvaluation { x, .. }) if x == 0.0
        ));
    }

    #[test]
    fn stops_at_precision_limit() {
        let f = |x: f64| x - 1.0e8 - 0.3;

        let solution =
            solve_unobserved(&f, [0.0, 2.0e8], &config(1e-300)).expect("should stop cleanly");
        let [left, right] = solution.bracket;

        assert_eq!(solution.status, Status::PrecisionLimit);
        // Adjacent floats: nothing left to split.
        assert_eq!(f64::from_bits(left.to_bits() + 1), right);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |x: f64| x * x - 9.0;

        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            if event.iter >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&f, [0.0, 10.0], &config(1e-12), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(calls, 3);
        // Brackets: [0, 5] -> [2.5, 5] -> [2.5, 3.75].
        assert_eq!(solution.bracket, [2.5, 3.75]);
        assert_relative_eq!(solution.root, 3.125);
    }

    #[test]
    fn never_reevaluates_endpoints() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * x - 2.0
        };

        let solution = solve_unobserved(&f, [0.0, 2.0], &config(1e-6)).expect("should solve");

        // Two endpoint evaluations plus one per iteration.
        assert_eq!(calls.get(), solution.iters + 2);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
        let run = || {
            let mut events = Vec::new();
            let solution = solve(&f, [2.0, 3.0], &config(1e-9), recording(&mut events))
                .expect("should solve");
            (solution, events)
        };

        assert_eq!(run(), run());
    }
}
