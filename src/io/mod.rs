pub mod destinations;
pub mod output;

pub use destinations::{
    destination_for, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};
pub use output::{create_writer, render, OutputFormat, OutputWriter, Report};

use crate::errors::SweepError;
use std::fs;
use std::path::Path;

/// Read the whole input file as UTF-8.
///
/// A missing file maps to [`SweepError::InputNotFound`]; every other failure,
/// including invalid UTF-8, maps to [`SweepError::Read`].
pub fn read_input(path: &Path) -> Result<String, SweepError> {
    fs::read_to_string(path).map_err(|e| SweepError::from_read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("commits.txt");
        fs::write(&path, "feat: a\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "feat: a\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, SweepError::InputNotFound { .. }));
    }

    #[test]
    fn test_read_input_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, SweepError::Read { .. }));
    }

    #[test]
    fn test_read_input_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_input(temp_dir.path()).unwrap_err();
        assert!(!matches!(err, SweepError::InputNotFound { .. }));
    }
}
