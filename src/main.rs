use clap::Parser;
use commitsweep::cli::{self, Cli};
use commitsweep::commands::handle_sweep;
use commitsweep::config::SweepConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::report_parse_error(err),
    };

    cli::init_logging(cli.verbosity);

    let config = SweepConfig::from_cli(&cli);
    match handle_sweep(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report_error(&err),
    }
}
