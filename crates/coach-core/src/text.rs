//! Regex and line helpers shared by the plan and profile parsers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Run a lazily compiled pattern against `line`.
pub(crate) fn captures<'t>(pattern: &LazyLock<Option<Regex>>, line: &'t str) -> Option<Captures<'t>> {
    pattern.as_ref()?.captures(line)
}

/// True when a lazily compiled pattern matches anywhere in `text`.
pub(crate) fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Every non-overlapping capture of a lazily compiled pattern.
pub(crate) fn captures_iter<'t>(
    pattern: &'static LazyLock<Option<Regex>>,
    text: &'t str,
) -> impl Iterator<Item = Captures<'t>> + 't {
    pattern
        .as_ref()
        .into_iter()
        .flat_map(move |re| re.captures_iter(text))
}

/// Parse capture group `index` as a number.
pub(crate) fn number<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

/// Trimmed, non-blank lines of a section.
pub(crate) fn content_lines(section: &str) -> impl Iterator<Item = &str> {
    section.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Collapse internal whitespace runs to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
