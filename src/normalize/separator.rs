//! Blank-line separators between groups of sorted lines.
//!
//! Two adjacent lines belong to different groups when both are semantic and
//! carry different prefixes, or, when at least one is not semantic, when
//! their first characters differ. A blank line is inserted before every line
//! that starts a new group, except directly after the first line: the first
//! two sorted lines always stay adjacent.

use super::prefix::classify;

/// Boundaries at or below this index never receive a separator.
const SUPPRESSED_BOUNDARY: usize = 1;

/// Whether `current` starts a new group relative to `prev`.
pub fn differs(prev: &str, current: &str) -> bool {
    match (classify(prev), classify(current)) {
        (Some(prev_prefix), Some(current_prefix)) => prev_prefix != current_prefix,
        _ => prev.chars().next() != current.chars().next(),
    }
}

/// Every index `i >= 1` where `lines[i]` starts a new group.
pub fn group_boundaries<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| differs(pair[0].as_ref(), pair[1].as_ref()))
        .map(|(idx, _)| idx + 1)
        .collect()
}

/// Boundaries that actually receive a separator, ascending.
pub fn separator_positions<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    group_boundaries(lines)
        .into_iter()
        .filter(|&idx| idx > SUPPRESSED_BOUNDARY)
        .collect()
}

/// Insert an empty line before each position in `positions`.
///
/// Positions refer to `lines` as given. They are applied from the highest
/// down so earlier insertions never shift the ones still pending.
pub fn insert_at(mut lines: Vec<String>, positions: &[usize]) -> Vec<String> {
    lines.reserve(positions.len());
    for &idx in positions.iter().rev() {
        log::trace!("Inserting separator before sorted line {}", idx);
        lines.insert(idx, String::new());
    }
    lines
}

/// Insert separators between the groups of an already sorted sequence.
pub fn insert_separators(lines: Vec<String>) -> Vec<String> {
    let positions = separator_positions(&lines);
    insert_at(lines, &positions)
}
