//! Iterative root finding for real functions of one variable.
//!
//! Each solver lives in its own module and follows the same shape: a
//! validated [`Config`](bisection::Config), a `solve` function that reports
//! every iteration to an [`Observer`], a `solve_unobserved` convenience
//! wrapper, and a module-specific `Error`.
//!
//! # Solvers
//!
//! - [`bisection`]: bracketing method, requires a sign change across `[a, b]`
//! - [`newton`]: open method driven by an analytic derivative
//!
//! The flat functions [`solve_bisection`] and [`solve_newton`] cover the
//! common case of wanting only the root.
//!
//! [`Observer`]: rootline_core::Observer

pub mod bisection;
pub mod display;
pub mod newton;

use rootline_core::Function;

/// Finds a root of `f` on `[a, b]` by bisection, returning only the root.
///
/// # Errors
///
/// Returns [`bisection::Error::InvalidBracket`] if `f(a)` and `f(b)` have the
/// same strict sign, [`bisection::Error::InvalidConfig`] if `tol` is not a
/// positive finite number, and [`bisection::Error::NonFiniteEvaluation`] if
/// `f` produces a non-finite value.
pub fn solve_bisection<F>(f: &F, a: f64, b: f64, tol: f64) -> Result<f64, bisection::Error>
where
    F: Function + ?Sized,
{
    let config = bisection::Config::new(tol)?;
    bisection::solve_unobserved(f, [a, b], &config).map(|solution| solution.root)
}

/// Finds a root of `f` by Newton-Raphson iteration from `x0`, returning only the root.
///
/// # Errors
///
/// Returns [`newton::Error::ZeroDerivative`] if `df` is exactly zero at an
/// iterate, [`newton::Error::MaxIterationsExceeded`] if `max_iter` steps pass
/// without convergence, and [`newton::Error::InvalidConfig`],
/// [`newton::Error::NonFiniteGuess`] or [`newton::Error::NonFiniteEvaluation`]
/// for invalid inputs.
pub fn solve_newton<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, newton::Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    let config = newton::Config::new(tol, max_iter)?;
    newton::solve_unobserved(f, df, x0, &config).map(|solution| solution.root)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bisection_finds_root_of_shifted_square() {
        let f = |x: f64| x * x - 4.0;

        let root = solve_bisection(&f, 0.0, 3.0, 1e-6).expect("should converge");

        assert_relative_eq!(root, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn newton_finds_root_of_shifted_square() {
        let f = |x: f64| x * x - 4.0;
        let df = |x: f64| 2.0 * x;

        let root = solve_newton(&f, &df, 3.0, 1e-6, 50).expect("should converge");

        assert_relative_eq!(root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn bisection_rejects_rootless_bracket() {
        let f = |x: f64| x * x + 1.0;

        let result = solve_bisection(&f, -1.0, 1.0, 1e-6);

        assert!(matches!(
            result,
            Err(bisection::Error::InvalidBracket(
                bisection::BracketError::NoSignChange { .. }
            ))
        ));
    }

    #[test]
    fn newton_rejects_flat_start() {
        let f = |x: f64| x.powi(3);
        let df = |x: f64| 3.0 * x * x;

        let result = solve_newton(&f, &df, 0.0, 1e-6, 50);

        assert!(matches!(result, Err(newton::Error::ZeroDerivative { x }) if x == 0.0));
    }

    #[test]
    fn flat_functions_validate_config() {
        let f = |x: f64| x - 1.0;

        assert!(matches!(
            solve_bisection(&f, 0.0, 2.0, 0.0),
            Err(bisection::Error::InvalidConfig(_))
        ));
        assert!(matches!(
            solve_newton(&f, &|_x: f64| 1.0, 0.0, 1e-6, 0),
            Err(newton::Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn accepts_trait_objects() {
        let f: &dyn Function = &|x: f64| x - 0.5;

        let root = solve_bisection(f, 0.0, 1.0, 1e-9).expect("should converge");

        assert_relative_eq!(root, 0.5);
    }
}
