mod args;
mod session;

use args::{Cli, Command};
use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{io::{self, IsTerminal}, process::ExitCode};
use tracing_subscriber::EnvFilter;
use tutor_diagnose::{checker::split_equation, EquivalenceChecker, SymbolicChecker, Tutor};
use tutor_error::Error;

/// Installs the stderr log subscriber. `--log-level` takes precedence over `RUST_LOG`, and only
/// warnings are shown by default.
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints the report for the error to stderr.
fn report(err: &Error, src_id: &str, input: &str) {
    if let Err(io_err) = err.report_to_stderr(src_id, input) {
        tracing::error!(%io_err, "failed to print error report");
    }
}

/// Runs a one-shot algebra subcommand, printing its result.
fn run_command(command: Command) -> ExitCode {
    let checker = SymbolicChecker;
    let result = match &command {
        Command::Expand { expr } => checker.expand(expr)
            .map(|poly| println!("{}", poly))
            .map_err(|err| report(&err, "input", expr)),
        Command::Simplify { expr } => checker.simplify(expr)
            .map(|simplified| println!("{}", simplified))
            .map_err(|err| report(&err, "input", expr)),
        Command::Check { equation } => check(&checker, equation),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

/// Simplifies both sides of the equation and prints whether they are equivalent.
fn check(checker: &dyn EquivalenceChecker, equation: &str) -> Result<(), ()> {
    let Some((lhs, rhs)) = split_equation(equation) else {
        eprintln!("expected an equation of the form `lhs = rhs`");
        return Err(());
    };

    let lhs_simplified = checker.simplify(lhs).map_err(|err| report(&err, "lhs", lhs))?;
    let rhs_simplified = checker.simplify(rhs).map_err(|err| report(&err, "rhs", rhs))?;
    let equivalent = lhs_simplified.try_eq(&rhs_simplified)
        .map_err(|err| report(&err, "input", equation))?;

    if equivalent {
        println!("equivalent: {} = {}", lhs_simplified, rhs_simplified);
    } else {
        println!("not equivalent: {} != {}", lhs_simplified, rhs_simplified);
    }
    Ok(())
}

/// Runs the interactive read-loop until a terminator, end of input, or Ctrl-C.
fn run_interactive(session: &mut Session) -> Result<(), ReadlineError> {
    let catalog = session.catalog();
    let mut rl = DefaultEditor::new()?;

    println!("{}", catalog.banner);
    println!("{}", catalog.instructions);

    loop {
        let input = match rl.readline(catalog.prompt) {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => return Err(err),
        };

        let Some(response) = session.respond(&input) else {
            break;
        };
        rl.add_history_entry(input.trim())?;
        println!("{}", response);
    }

    println!("{}", catalog.farewell);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Some(command) = cli.command {
        return run_command(command);
    }

    let mut builder = Tutor::builder().language(cli.language);
    if cli.no_checker {
        builder = builder.without_checker();
    }
    let tutor = builder.build();
    let mut session = Session::new(&tutor);

    let result = if io::stdin().is_terminal() {
        run_interactive(&mut session).map_err(|err| err.to_string())
    } else {
        session.run_piped(io::stdin().lock(), io::stdout().lock()).map_err(|err| err.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
