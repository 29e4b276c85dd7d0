// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod normalize;

// Re-export commonly used types
pub use crate::config::{NormalizeOptions, SweepConfig, DEFAULT_INPUT_FILE};
pub use crate::errors::SweepError;
pub use crate::normalize::{
    classify, handle_commit_msg, is_semantic, normalize, GroupSummary, NormalizationStats,
    Normalized, SemanticPrefix,
};
