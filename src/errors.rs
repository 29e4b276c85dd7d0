//! Error types for commitsweep.
//!
//! The normalization pipeline itself never fails; everything here comes from
//! the edges: argument validation, reading the input file, and writing output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for every reported failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Debug, Error)]
pub enum SweepError {
    /// `--input` was given something that looks like another flag
    #[error("'{value}' is not a file name")]
    InvalidInput { value: String },

    /// The input file does not exist
    #[error("{} does not exist", .path.display())]
    InputNotFound { path: PathBuf },

    /// Any other failure while reading the input file
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure writing rendered output
    #[error("Failed to write to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    /// Classify a read failure, separating a missing file from other errors.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound { path },
            _ => Self::Read { path, source },
        }
    }

    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            target: target.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput { .. }
            | Self::InputNotFound { .. }
            | Self::Read { .. }
            | Self::Write { .. } => FAILURE_EXIT_CODE,
        }
    }

    /// Whether the user can fix this by changing arguments or files.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InputNotFound { .. })
    }
}
