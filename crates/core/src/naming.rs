//! Instructor name normalization helpers.
//!
//! Catalog pages render instructor names in a `"Last, First"` (often
//! `"LAST,F"`) convention, while the ratings search expects `"First Last"`.
//! These helpers are shared by the query builder, the cache keying, and the
//! candidate matcher.

/// Convert a `"Last, First"` display name to `"First Last"`.
///
/// Splits on the first comma and trims both parts. Names without a comma
/// (or with an empty side) pass through trimmed unchanged.
///
/// # Examples
///
/// ```
/// use lectern_core::naming::normalize_display_name;
/// assert_eq!(normalize_display_name("TANTALO,C"), "C TANTALO");
/// assert_eq!(normalize_display_name("Cormac Tantalo"), "Cormac Tantalo");
/// assert_eq!(normalize_display_name("  Doe ,  Jane "), "Jane Doe");
/// ```
pub fn normalize_display_name(name: &str) -> String {
    let trimmed = name.trim();

    if let Some((last, first)) = trimmed.split_once(',') {
        let last = last.trim();
        let first = first.trim();
        if !first.is_empty() && !last.is_empty() {
            return format!("{first} {last}");
        }
    }

    trimmed.to_string()
}

/// Normalize a free-text name into a stable cache-key fragment.
///
/// Lower-cases and collapses all interior whitespace runs to a single
/// space, so formatting drift between page loads maps to the same key.
pub fn normalize_cache_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compact a string to its lower-cased letters only.
///
/// Strips every non-alphabetic character, so `"Tantalo, C."` and
/// `"TANTALO C"` both compact to `"tantaloc"`. Used for the matcher's
/// exact-comparison fallback and the compacted search-token variants.
pub fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
