use std::io::{BufRead, Write};

use rootline_expr::Expr;
use rootline_observers::Progress;
use rootline_solvers::{bisection, display::Float, newton};

use crate::{
    cli::{BisectionArgs, Cli, Command, NewtonArgs},
    error::AppError,
};

/// Runs the command selected on the command line.
///
/// `input` is only read in interactive mode.
pub(crate) fn run<R, W>(cli: Cli, input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    match cli.command {
        Some(Command::Bisection(args)) => bisection_command(&args, cli.quiet, &mut output),
        Some(Command::Newton(args)) => newton_command(&args, cli.quiet, &mut output),
        None => Session::new(input, output).run(cli.quiet),
    }
}

fn bisection_command<W: Write>(
    args: &BisectionArgs,
    quiet: bool,
    output: &mut W,
) -> Result<(), AppError> {
    let f = parse("f(x)", &args.function)?;
    find_by_bisection(&f, args.a, args.b, args.tol, quiet, output).map(|_| ())
}

fn newton_command<W: Write>(
    args: &NewtonArgs,
    quiet: bool,
    output: &mut W,
) -> Result<(), AppError> {
    let f = parse("f(x)", &args.function)?;
    let df = parse("f'(x)", &args.derivative)?;
    find_by_newton(&f, &df, args.x0, args.tol, args.max_iter, quiet, output).map(|_| ())
}

fn parse(what: &'static str, source: &str) -> Result<Expr, AppError> {
    rootline_expr::parse(source).map_err(|source| AppError::Parse { what, source })
}

/// Solves by bisection, printing progress unless `quiet`, then the root.
fn find_by_bisection<W: Write>(
    f: &Expr,
    a: f64,
    b: f64,
    tol: f64,
    quiet: bool,
    output: &mut W,
) -> Result<f64, AppError> {
    let config = bisection::Config::new(tol).map_err(bisection::Error::from)?;

    let solution = if quiet {
        bisection::solve_unobserved(f, [a, b], &config)?
    } else {
        let mut progress = Progress::new(&mut *output);
        let solution = bisection::solve(f, [a, b], &config, &mut progress)?;
        progress.finish()?;
        solution
    };

    writeln!(output, "Root (Bisection): {}", Float(solution.root))?;
    Ok(solution.root)
}

/// Solves by Newton-Raphson, printing progress unless `quiet`, then the root.
fn find_by_newton<W: Write>(
    f: &Expr,
    df: &Expr,
    x0: f64,
    tol: f64,
    max_iter: usize,
    quiet: bool,
    output: &mut W,
) -> Result<f64, AppError> {
    let config = newton::Config::new(tol, max_iter).map_err(newton::Error::from)?;

    let solution = if quiet {
        newton::solve_unobserved(f, df, x0, &config)?
    } else {
        let mut progress = Progress::new(&mut *output);
        let solution = newton::solve(f, df, x0, &config, &mut progress)?;
        progress.finish()?;
        solution
    };

    writeln!(output, "Root (Newton-Raphson): {}", Float(solution.root))?;
    Ok(solution.root)
}

/// Interactive prompt-and-answer session.
struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn run(mut self, quiet: bool) -> Result<(), AppError> {
        writeln!(self.output, "Numerical Methods for Solving Equations")?;

        let f = self.prompt("Enter the function f(x) (e.g., x**2 - 4): ")?;
        let f = parse("f(x)", &f)?;

        // Only Newton-Raphson uses the derivative, so a blank answer is fine.
        let df = self.prompt("Enter the derivative f'(x) (e.g., 2*x): ")?;
        let df = if df.is_empty() {
            None
        } else {
            Some(parse("f'(x)", &df)?)
        };

        let method = self
            .prompt("Choose a method (bisection/newton): ")?
            .to_lowercase();

        match method.as_str() {
            "bisection" => {
                let a = self.prompt_number("Enter the lower bound (a): ", "the lower bound")?;
                let b = self.prompt_number("Enter the upper bound (b): ", "the upper bound")?;
                let tol = self.prompt_number("Enter the tolerance: ", "the tolerance")?;
                find_by_bisection(&f, a, b, tol, quiet, &mut self.output)?;
            }
            "newton" => {
                let df = df.ok_or(AppError::MissingDerivative)?;
                let x0 = self.prompt_number("Enter the initial guess (x0): ", "the initial guess")?;
                let tol = self.prompt_number("Enter the tolerance: ", "the tolerance")?;
                let max_iter = self.prompt_count(
                    "Enter the maximum number of iterations: ",
                    "the maximum number of iterations",
                )?;
                find_by_newton(&f, &df, x0, tol, max_iter, quiet, &mut self.output)?;
            }
            _ => return Err(AppError::UnknownMethod(method)),
        }

        Ok(())
    }

    /// Writes `text`, then reads one line and returns it trimmed.
    fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number(&mut self, text: &str, what: &'static str) -> Result<f64, AppError> {
        let answer = self.prompt(text)?;
        answer
            .parse()
            .map_err(|_| AppError::InvalidNumber { what, input: answer })
    }

    fn prompt_count(&mut self, text: &str, what: &'static str) -> Result<usize, AppError> {
        let answer = self.prompt(text)?;
        answer
            .parse()
            .map_err(|_| AppError::InvalidNumber { what, input: answer })
    }
}
