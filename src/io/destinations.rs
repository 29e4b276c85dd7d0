//! Where rendered output goes.
//!
//! The command writes through [`OutputDestination`] so tests can capture
//! output in memory instead of touching stdout or the file system.

use crate::errors::SweepError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub trait OutputDestination: Send + Sync {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<(), SweepError>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), SweepError>;

    /// Short description for log and error messages.
    fn description(&self) -> String;

    /// Whether this destination is the process's standard output.
    fn is_stdout(&self) -> bool {
        false
    }
}

/// Pick stdout or a file from an optional `--output` path.
pub fn destination_for(output: Option<&Path>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path.to_path_buf())),
        None => Box::new(StdoutDestination),
    }
}

/// Writes the whole output into one file, replacing any previous content.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<(), SweepError> {
        std::fs::write(&self.path, content)
            .map_err(|e| SweepError::write(self.path.display().to_string(), e))
    }

    fn flush(&self) -> Result<(), SweepError> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory destination, used by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), SweepError> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<(), SweepError> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<(), SweepError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(|e| SweepError::write("stdout", e))
    }

    fn flush(&self) -> Result<(), SweepError> {
        io::stdout()
            .lock()
            .flush()
            .map_err(|e| SweepError::write("stdout", e))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }

    fn is_stdout(&self) -> bool {
        true
    }
}
