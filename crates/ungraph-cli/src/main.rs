//! Entry point for the `ungraph` binary: parse arguments, read the input,
//! dispatch to the subcommand, and map errors to exit codes.

use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to its subcommand implementation.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Print { file } => {
            let content = io::read_input(file)?;
            cmd::print::run(&content, &cli.format)
        }
        Command::Reach {
            file,
            source,
            iterative,
        } => {
            let content = io::read_input(file)?;
            cmd::reach::run(&content, *source, *iterative, &cli.format)
        }
        Command::Path {
            file,
            source,
            target,
            iterative,
        } => {
            let content = io::read_input(file)?;
            cmd::path::run(&content, *source, *target, *iterative, &cli.format)
        }
        Command::Version => {
            println!("{}", ungraph_core::version());
            Ok(())
        }
    }
}
