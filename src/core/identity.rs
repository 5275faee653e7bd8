//! Derivation of filesystem-safe user identifiers from display names.

/// Build a user id from a display name.
///
/// Surrounding whitespace is ignored. Inner spaces become `_`, anything
/// outside `[A-Za-z0-9_]` is dropped (not transliterated), and the result is
/// lower-cased. A name made only of dropped characters yields an empty string.
pub fn derive_user_id(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
