//! Answer comparison for the spelling drill.

/// Compare a typed answer to the target word.
///
/// Both sides are trimmed and lowercased; no fuzzy matching is applied.
pub fn answers_match(typed: &str, target: &str) -> bool {
    normalize(typed) == normalize(target)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
