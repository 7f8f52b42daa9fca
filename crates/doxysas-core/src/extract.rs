use std::sync::LazyLock;

use regex::Regex;

// -- Regex patterns -----------------------------------------------------------

static RE_MACRO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%macro\s+([a-zA-Z_][a-zA-Z0-9_]*)").unwrap());

static RE_MACRO_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").unwrap());

/// Filename stem used when the source has no `%macro` declaration.
pub const FALLBACK_NAME: &str = "untitled";

/// First `%macro <ident>` declaration in the source, case-insensitive.
/// A missing declaration is a normal case, not an error.
pub fn macro_name(code: &str) -> String {
    RE_MACRO_NAME
        .captures(code)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Distinct macro names invoked as `%name(...)`, sorted. The `macro`
/// keyword itself is excluded here rather than in the pattern — the regex
/// crate has no lookahead.
pub fn internal_macro_calls(code: &str) -> Vec<String> {
    let mut names: Vec<String> = RE_MACRO_CALL
        .captures_iter(code)
        .map(|c| c[1].to_string())
        .filter(|name| !name.eq_ignore_ascii_case("macro"))
        .collect();
    names.sort();
    names.dedup();
    names
}
