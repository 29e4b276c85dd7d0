//! Commit message normalization.
//!
//! The pipeline runs in a fixed order over the lines of one text block:
//!
//! 1. split the text into lines ([`lines::split_lines`])
//! 2. collapse duplicates compared after trimming ([`dedupe::dedupe`])
//! 3. in strict mode, drop lines without a semantic prefix ([`filter::filter_strict`])
//! 4. sort by code point
//! 5. insert blank lines between groups ([`separator`])
//!
//! Every step is pure, so [`handle_commit_msg`] can be called from any thread
//! on any input without failing.
//!
//! ```rust
//! use commitsweep::handle_commit_msg;
//!
//! let cleaned = handle_commit_msg("feat: A\nfix: B\ndocs: C\n", false);
//! assert_eq!(cleaned, "docs: C\nfeat: A\n\nfix: B");
//! ```

pub mod dedupe;
pub mod filter;
pub mod lines;
pub mod prefix;
pub mod separator;

pub use dedupe::dedupe;
pub use filter::filter_strict;
pub use lines::{join_lines, split_lines};
pub use prefix::{classify, is_semantic, SemanticPrefix, UnknownPrefix};
pub use separator::{differs, insert_separators};

use crate::config::NormalizeOptions;
use serde::Serialize;

/// A run of adjacent sorted lines that no separator splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Prefix shared by every line of the run, if they all share one.
    pub prefix: Option<SemanticPrefix>,
    pub count: usize,
}

/// Counters describing one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    pub input_lines: usize,
    pub unique_lines: usize,
    pub dropped_by_strict: usize,
    pub separators: usize,
    pub groups: Vec<GroupSummary>,
}

/// Output of [`normalize`]: the final line sequence and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub lines: Vec<String>,
    pub stats: NormalizationStats,
}

impl Normalized {
    /// The output lines joined with newlines.
    pub fn text(&self) -> String {
        join_lines(&self.lines)
    }
}

/// Run the full pipeline over `text`.
pub fn normalize(text: &str, options: &NormalizeOptions) -> Normalized {
    let raw = split_lines(text);
    let input_lines = raw.len();

    let unique: Vec<String> = dedupe(raw).into_iter().collect();
    let unique_lines = unique.len();

    let mut kept = if options.strict {
        filter_strict(unique)
    } else {
        unique
    };
    let dropped_by_strict = unique_lines - kept.len();

    kept.sort_unstable();

    let positions = separator::separator_positions(&kept);
    let groups = summarize_groups(&kept, &positions);
    let lines = separator::insert_at(kept, &positions);

    let stats = NormalizationStats {
        input_lines,
        unique_lines,
        dropped_by_strict,
        separators: positions.len(),
        groups,
    };

    log::debug!(
        "Normalized {} input lines: {} unique, {} dropped by strict mode, {} groups, {} separators",
        stats.input_lines,
        stats.unique_lines,
        stats.dropped_by_strict,
        stats.groups.len(),
        stats.separators
    );

    Normalized { lines, stats }
}

/// Normalize `text` and return the joined result.
///
/// Equivalent to `normalize(text, &NormalizeOptions { strict }).text()`.
pub fn handle_commit_msg(text: &str, strict: bool) -> String {
    normalize(text, &NormalizeOptions { strict }).text()
}

fn summarize_groups(sorted: &[String], positions: &[usize]) -> Vec<GroupSummary> {
    if sorted.is_empty() {
        return Vec::new();
    }

    let mut bounds = Vec::with_capacity(positions.len() + 2);
    bounds.push(0);
    bounds.extend_from_slice(positions);
    bounds.push(sorted.len());

    bounds
        .windows(2)
        .map(|range| {
            let run = &sorted[range[0]..range[1]];
            GroupSummary {
                prefix: shared_prefix(run),
                count: run.len(),
            }
        })
        .collect()
}

fn shared_prefix(run: &[String]) -> Option<SemanticPrefix> {
    let mut prefixes = run.iter().map(|line| classify(line));
    let first = prefixes.next()??;
    prefixes.all(|p| p == Some(first)).then_some(first)
}
