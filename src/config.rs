//! Run configuration.
//!
//! There is no configuration file; everything comes from command-line flags,
//! with environment variable fallbacks handled by clap. [`SweepConfig`] is the
//! resolved form the command handler works from.

use crate::cli::{Cli, OutputFormat as CliOutputFormat};
use crate::io::output::OutputFormat;
use std::path::PathBuf;

/// Input file used when `--input` is not given.
pub const DEFAULT_INPUT_FILE: &str = "commitsSource.txt";

/// Options for the normalization pipeline itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Drop every line that lacks a semantic prefix.
    pub strict: bool,
}

/// Fully resolved configuration for one `commitsweep` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub input: PathBuf,
    pub strict: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

impl SweepConfig {
    /// Pure conversion from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            strict: cli.strict,
            format: convert_output_format(cli.format),
            output: cli.output.clone(),
            verbosity: cli.verbosity,
        }
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            strict: self.strict,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            strict: false,
            format: OutputFormat::Terminal,
            output: None,
            verbosity: 0,
        }
    }
}

fn convert_output_format(format: CliOutputFormat) -> OutputFormat {
    match format {
        CliOutputFormat::Terminal => OutputFormat::Terminal,
        CliOutputFormat::Plain => OutputFormat::Plain,
        CliOutputFormat::Json => OutputFormat::Json,
    }
}
