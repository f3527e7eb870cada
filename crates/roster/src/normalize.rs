//! Name canonicalization.
//!
//! Roster exports disagree on name shape: the grading platform emits
//! `"Last, First"`, the forum emits `"First Last"`, and operators type
//! whatever they remember. Everything funnels through [`roster_key`] so
//! the rest of the engine only ever compares one form.

/// Rewrite `"Last, First"` to `"First Last"`; names without a comma pass
/// through unchanged.
///
/// Only the first comma splits: `"Doe, Jane, Jr."` becomes
/// `"Jane, Jr. Doe"`. Pure and total — any input is a valid name.
pub fn normalize_display(raw: &str) -> String {
    match raw.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => raw.to_string(),
    }
}

/// The canonical comparison key: normalized, lowercased, with any
/// remaining commas stripped and whitespace collapsed.
///
/// Applied to every roster source at build time and to every query at
/// match time, so matching is case-insensitive everywhere. A fixed point
/// of itself (`roster_key(roster_key(x)) == roster_key(x)`), so a stored
/// key always exact-matches itself even for multi-comma names.
pub fn roster_key(raw: &str) -> String {
    normalize_display(raw)
        .to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_comma_first_is_swapped() {
        assert_eq!(normalize_display("Doe, Jane"), "Jane Doe");
    }

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(normalize_display("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn inner_whitespace_is_trimmed_around_comma() {
        assert_eq!(normalize_display("Doe ,  Jane"), "Jane Doe");
    }

    #[test]
    fn extra_commas_split_only_once() {
        // Suffixes stay attached to the given-name part.
        assert_eq!(normalize_display("Doe, Jane, Jr."), "Jane, Jr. Doe");
    }

    #[test]
    fn key_is_lowercase_and_trimmed() {
        assert_eq!(roster_key("  Doe, Jane "), "jane doe");
        assert_eq!(roster_key("JANE DOE"), "jane doe");
    }

    #[test]
    fn key_is_idempotent() {
        let once = roster_key("Doe, Jane");
        assert_eq!(roster_key(&once), once);
    }

    #[test]
    fn multi_comma_key_is_a_fixed_point() {
        // The display form keeps the suffix comma; the key must not, or
        // the stored key would re-split on lookup and miss itself.
        let key = roster_key("Doe, Jane, Jr.");
        assert_eq!(key, "jane jr. doe");
        assert_eq!(roster_key(&key), key);
    }
}
