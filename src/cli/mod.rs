//! CLI module for commitsweep
//!
//! - Argument parsing and validation (`args`)
//! - Logging setup and exit-code mapping (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, OutputFormat};
pub use setup::{init_logging, report_error, report_parse_error};
