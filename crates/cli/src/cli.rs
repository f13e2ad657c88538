use clap::{Args, Parser, Subcommand};

/// Find a root of f(x) by bisection or Newton-Raphson.
///
/// Run without a subcommand for interactive prompts.
#[derive(Debug, Parser)]
#[command(name = "rootline", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Only print the root, not the per-iteration progress.
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Bisection on an interval where f changes sign.
    Bisection(BisectionArgs),

    /// Newton-Raphson from an initial guess.
    Newton(NewtonArgs),
}

#[derive(Debug, Args)]
pub(crate) struct BisectionArgs {
    /// The function f(x), e.g. "x**2 - 4".
    #[arg(short, long)]
    pub(crate) function: String,

    /// Lower bound of the interval.
    #[arg(short = 'a', long = "lower", allow_negative_numbers = true)]
    pub(crate) a: f64,

    /// Upper bound of the interval.
    #[arg(short = 'b', long = "upper", allow_negative_numbers = true)]
    pub(crate) b: f64,

    /// Stop once the interval half-width is at most this value.
    #[arg(short, long, default_value_t = 1e-6)]
    pub(crate) tol: f64,
}

#[derive(Debug, Args)]
pub(crate) struct NewtonArgs {
    /// The function f(x), e.g. "x**2 - 4".
    #[arg(short, long)]
    pub(crate) function: String,

    /// The derivative f'(x), e.g. "2*x".
    #[arg(short, long)]
    pub(crate) derivative: String,

    /// Initial guess.
    #[arg(short = 'x', long = "x0", allow_negative_numbers = true)]
    pub(crate) x0: f64,

    /// Stop once a step moves x by less than this value.
    #[arg(short, long, default_value_t = 1e-6)]
    pub(crate) tol: f64,

    /// Give up after this many iterations.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub(crate) max_iter: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_bisection_with_negative_bound() {
        let cli = Cli::try_parse_from([
            "rootline", "bisection", "-f", "x**2 + x", "-a", "-2", "-b", "-0.5",
        ])
        .expect("valid arguments");

        let Some(Command::Bisection(args)) = cli.command else {
            panic!("expected bisection subcommand");
        };
        assert_eq!(args.a, -2.0);
        assert_eq!(args.b, -0.5);
        assert_eq!(args.tol, 1e-6);
    }

    #[test]
    fn parses_newton_defaults() {
        let cli = Cli::try_parse_from([
            "rootline", "newton", "-f", "x**2 - 4", "-d", "2*x", "--x0", "3", "-q",
        ])
        .expect("valid arguments");

        assert!(cli.quiet);
        let Some(Command::Newton(args)) = cli.command else {
            panic!("expected newton subcommand");
        };
        assert_eq!(args.x0, 3.0);
        assert_eq!(args.max_iter, 50);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["rootline"]).expect("valid arguments");
        assert!(cli.command.is_none());
    }
}
