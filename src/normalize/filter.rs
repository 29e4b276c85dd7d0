//! Strict mode filtering.

use super::prefix::is_semantic;

/// Keep only semantic lines, preserving the order of survivors.
pub fn filter_strict<S: AsRef<str>>(lines: Vec<S>) -> Vec<S> {
    lines
        .into_iter()
        .filter(|line| is_semantic(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_strict_drops_unclassified_lines() {
        let kept = filter_strict(vec!["feat: a", "random note", "", "Fix: b", "fixes: c"]);
        assert_eq!(kept, vec!["feat: a", "Fix: b"]);
    }

    #[test]
    fn test_filter_strict_preserves_order() {
        let kept = filter_strict(vec!["fix: 2", "feat: 1", "chore: 3"]);
        assert_eq!(kept, vec!["fix: 2", "feat: 1", "chore: 3"]);
    }

    #[test]
    fn test_filter_strict_empty() {
        assert!(filter_strict(Vec::<String>::new()).is_empty());
    }
}
