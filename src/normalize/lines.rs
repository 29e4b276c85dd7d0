//! Splitting raw commit text into lines and joining lines back into text.

/// Split text on `'\n'`.
///
/// A single trailing newline terminates the last line rather than opening a
/// new empty one. All other empty segments are kept, and the empty string
/// yields one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

/// Join lines with `'\n'`, without a trailing newline.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            joined.push('\n');
        }
        joined.push_str(line.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_empty_string_yields_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_trailing_newline_is_terminator() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_and_extra_trailing_blanks() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_leaves_carriage_returns() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r", "b\r"]);
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines::<&str>(&[]), "");
        assert_eq!(join_lines(&[""]), "");
        assert_eq!(join_lines(&["a", "", "b"]), "a\n\nb");
        assert_eq!(join_lines(&["a".to_string(), "b".to_string()]), "a\nb");
    }
}
