//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replaces every run of whitespace (including newlines) with one space.
///
/// # Examples
///
/// ```
/// use intlx::utils::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("Hello\n  world"), "Hello world");
/// assert_eq!(collapse_whitespace("a\tb"), "a b");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Checks whether `id` belongs to `namespace`: the part before its first
/// `.` must equal the namespace. No namespace admits every id.
///
/// # Examples
///
/// ```
/// use intlx::utils::in_namespace;
///
/// assert!(in_namespace("foo.bar", Some("foo")));
/// assert!(!in_namespace("foo.bar", Some("baz")));
/// assert!(in_namespace("foo.bar", None));
/// ```
pub fn in_namespace(id: &str, namespace: Option<&str>) -> bool {
    match namespace {
        Some(ns) => id.split('.').next() == Some(ns),
        None => true,
    }
}

/// The text of 1-based line `line` in `source`, without its terminator.
/// Empty when the line does not exist.
pub fn line_at(source: &str, line: usize) -> String {
    line.checked_sub(1)
        .and_then(|i| source.lines().nth(i))
        .unwrap_or_default()
        .to_string()
}
