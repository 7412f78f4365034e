//! Author identity normalisation and ignore-list matching.

use crate::config::AliasMap;

/// Identity used when a commit carries no author at all.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Build the raw `"Name <email>"` identity aliases are matched against.
/// Both parts empty yields an empty string.
pub fn identity(name: &str, email: &str) -> String {
    if name.is_empty() && email.is_empty() {
        return String::new();
    }
    format!("{name} <{email}>")
}

/// Map a raw identity to its canonical form.
///
/// Aliases match the full raw string, case-insensitively; the first
/// matching entry wins. Unmatched identities pass through unchanged.
pub fn normalize_author(raw: &str, aliases: &AliasMap) -> String {
    if raw.is_empty() {
        return UNKNOWN_AUTHOR.to_string();
    }
    let lowered = raw.to_lowercase();
    aliases
        .iter()
        .find(|(alias, _)| alias.to_lowercase() == lowered)
        .map(|(_, canonical)| canonical.clone())
        .unwrap_or_else(|| raw.to_string())
}

/// True when any non-empty ignore substring occurs in `author`, ignoring case.
pub fn is_ignored(author: &str, ignore: &[String]) -> bool {
    if author.is_empty() {
        return false;
    }
    let lowered = author.to_lowercase();
    ignore
        .iter()
        .filter(|sub| !sub.is_empty())
        .any(|sub| lowered.contains(&sub.to_lowercase()))
}

#[cfg(test)]
#[path = "author_test.rs"]
mod tests;
