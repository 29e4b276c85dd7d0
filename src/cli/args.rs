use crate::config::DEFAULT_INPUT_FILE;
use crate::errors::SweepError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Framed by dashed banners, with a notice naming the input file
    Terminal,
    /// Only the cleaned lines
    Plain,
    /// Cleaned lines plus statistics as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "commitsweep")]
#[command(about = "Small util to clean up commit messages and print them to stdout")]
#[command(long_about = "Small util to clean up commit messages and print them to stdout.

Every line is compared to the others, duplicates are deleted and everything \
that is left is ordered alphabetically. Lines sharing a semantic prefix \
(feat, fix, refactor, style, docs, test, chore) stay together; otherwise, if \
the first character of a line differs from the previous line, an empty line \
is added between them.")]
#[command(version)]
pub struct Cli {
    /// Path to a plain text file listing raw commit messages
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "COMMITSWEEP_INPUT",
        default_value = DEFAULT_INPUT_FILE,
        allow_hyphen_values = true,
        value_parser = parse_input_path
    )]
    pub input: PathBuf,

    /// Remove lines that do not start with: feat, fix, refactor, style, docs, test, chore
    #[arg(short, long, env = "COMMITSWEEP_STRICT")]
    pub strict: bool,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        env = "COMMITSWEEP_FORMAT",
        default_value = "terminal"
    )]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Reject empty names and anything that looks like another flag.
fn parse_input_path(value: &str) -> Result<PathBuf, SweepError> {
    if value.is_empty() || value.starts_with('-') {
        return Err(SweepError::InvalidInput {
            value: value.to_string(),
        });
    }
    Ok(PathBuf::from(value))
}
