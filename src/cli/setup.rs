//! Setup and teardown for the command-line binary
//!
//! Logging initialisation, and turning parse errors and command failures
//! into messages and exit codes.

use crate::errors::{SweepError, FAILURE_EXIT_CODE};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use colored::Colorize;
use log::LevelFilter;
use std::process::ExitCode;

/// Hint printed after any usage error that involves `--input`.
pub const INPUT_USAGE_HINT: &str =
    "Please give proper filename. For more info check help (run with --help parameter)";

/// Hint printed after any other usage error.
pub const GENERIC_USAGE_HINT: &str = "For more info check help (run with --help parameter)";

/// Map `-v` repetitions to a log level.
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the env_logger backend, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity_level(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_env(env_logger::Env::default());

    if let Err(e) = builder.try_init() {
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Report a clap error and pick the exit code.
///
/// Help and version requests succeed. Every real usage error is printed to
/// stdout with a hint and exits with status 1.
pub fn report_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if err.print().is_err() {
                return ExitCode::from(FAILURE_EXIT_CODE);
            }
            ExitCode::SUCCESS
        }
        _ => {
            print!("{err}");
            println!("{}", usage_hint(&err));
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn usage_hint(err: &clap::Error) -> &'static str {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) if arg.contains("--input") => INPUT_USAGE_HINT,
        _ => GENERIC_USAGE_HINT,
    }
}

/// Find the typed error at the root of a command failure, if any.
pub fn root_sweep_error(err: &anyhow::Error) -> Option<&SweepError> {
    err.chain().find_map(|cause| cause.downcast_ref::<SweepError>())
}

/// Print a command failure to stderr and pick the exit code.
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let root = root_sweep_error(err);
    if root.is_some_and(SweepError::is_user_fixable) {
        eprintln!("{}", GENERIC_USAGE_HINT);
    }

    ExitCode::from(root.map_or(FAILURE_EXIT_CODE, SweepError::exit_code))
}
