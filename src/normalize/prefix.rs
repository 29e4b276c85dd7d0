//! Semantic commit prefixes and line classification.
//!
//! A line is semantic when it starts with one of the known tags followed by a
//! colon, compared ASCII case-insensitively (`Feat: x`, `FIX: y`). Tags are
//! tried in declaration order and the first match wins, so the matcher is an
//! ordered list of `(tag, pattern)` pairs rather than a map.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Conventional change category at the start of a commit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticPrefix {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Refactoring production code
    Refactor,
    /// Formatting, missing semicolons, etc; no code change
    Style,
    /// Changes to documentation
    Docs,
    /// Adding or refactoring tests; no production code change
    Test,
    /// Build tasks and other housekeeping; no production code change
    Chore,
}

impl SemanticPrefix {
    /// Every prefix, in matching priority order.
    pub const ALL: [SemanticPrefix; 7] = [
        SemanticPrefix::Feat,
        SemanticPrefix::Fix,
        SemanticPrefix::Refactor,
        SemanticPrefix::Style,
        SemanticPrefix::Docs,
        SemanticPrefix::Test,
        SemanticPrefix::Chore,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SemanticPrefix::Feat => "feat",
            SemanticPrefix::Fix => "fix",
            SemanticPrefix::Refactor => "refactor",
            SemanticPrefix::Style => "style",
            SemanticPrefix::Docs => "docs",
            SemanticPrefix::Test => "test",
            SemanticPrefix::Chore => "chore",
        }
    }

    /// Comma separated tag names, for help and diagnostic text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(SemanticPrefix::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SemanticPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown semantic prefix '{0}' (expected one of: {names})", names = SemanticPrefix::names())]
pub struct UnknownPrefix(pub String);

impl FromStr for SemanticPrefix {
    type Err = UnknownPrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPrefix(s.to_string()))
    }
}

static PREFIX_PATTERNS: Lazy<Vec<(SemanticPrefix, Regex)>> = Lazy::new(|| {
    SemanticPrefix::ALL
        .into_iter()
        .map(|prefix| {
            let pattern = RegexBuilder::new(&format!("^{}:", regex::escape(prefix.as_str())))
                .case_insensitive(true)
                .unicode(false)
                .build()
                .unwrap();
            (prefix, pattern)
        })
        .collect()
});

/// Return the first prefix whose pattern matches the start of `line`.
pub fn classify(line: &str) -> Option<SemanticPrefix> {
    PREFIX_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(prefix, _)| *prefix)
}

pub fn is_semantic(line: &str) -> bool {
    classify(line).is_some()
}
