//! Duplicate line removal.

use std::collections::HashSet;

/// Collect the distinct trimmed values of `lines`.
///
/// Input order is not preserved; callers sort the result afterwards.
pub fn dedupe<I, S>(lines: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .collect()
}
