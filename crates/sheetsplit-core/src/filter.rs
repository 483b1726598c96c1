use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// A suppression rule tested against the raw (untrimmed) group-key text.
///
/// Matching is "found anywhere in the text", not full-match. The trait
/// keeps the matching engine swappable: the partitioner only needs an
/// ordered set of predicates over text.
pub trait KeyPattern: fmt::Debug + Send + Sync {
    fn is_match(&self, text: &str) -> bool;
}

impl KeyPattern for Regex {
    fn is_match(&self, text: &str) -> bool {
        Regex::is_match(self, text)
    }
}

/// Literal substring rule, for callers that don't need regex syntax.
#[derive(Debug, Clone)]
pub struct Contains(pub String);

impl KeyPattern for Contains {
    fn is_match(&self, text: &str) -> bool {
        text.contains(&self.0)
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)^table\s+\d+", r"(?i)^county\b"]
        .iter()
        .map(|p| Regex::new(p).expect("default pattern is valid"))
        .collect()
});

/// The stock suppression patterns used by the CLI when none are given:
/// keys starting with the word "table" followed by a number, and keys
/// starting with the word "county", both case-insensitive.
pub fn default_patterns() -> Vec<Box<dyn KeyPattern>> {
    DEFAULT_PATTERNS
        .iter()
        .map(|r| Box::new(r.clone()) as Box<dyn KeyPattern>)
        .collect()
}
