//! Utility functions for string processing.

/// Normalize a string for search: lowercase and collapse whitespace.
///
/// Leading and trailing whitespace disappears with the collapse, so
/// `"  Data   Structures "` becomes `"data structures"`. No diacritic folding:
/// matching is plain substring containment on this form.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
