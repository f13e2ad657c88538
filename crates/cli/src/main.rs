//! `rootline`: find a root of f(x) by bisection or Newton-Raphson.
//!
//! With a subcommand, all parameters come from flags. Without one, the
//! program prompts for the function, derivative, method, and parameters.

mod app;
mod cli;
mod error;

use std::{io, process::ExitCode};

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match app::run(cli, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
