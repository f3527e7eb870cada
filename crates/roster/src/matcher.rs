//! Free-text name matching against a canonical roster.
//!
//! Exact key hits first, then a Jaro-Winkler ranking over all roster keys
//! with a similarity cutoff. One candidate resolves directly; several
//! defer to interactive resolution.

use crate::model::{CanonicalRoster, MatchResult};
use crate::normalize::roster_key;

/// Minimum similarity for a roster key to count as a close match.
pub const MATCH_CUTOFF: f64 = 0.80;

/// At most this many candidates are surfaced for disambiguation.
pub const MAX_CANDIDATES: usize = 5;

/// Match one query against the roster. Deterministic for a given roster
/// snapshot: candidates are ordered by descending similarity, ties by
/// name. The roster is never mutated.
pub fn match_name(query: &str, roster: &CanonicalRoster) -> MatchResult {
    let key = roster_key(query);

    if let Some(email) = roster.get(&key) {
        return MatchResult::Exact(email.to_string());
    }

    let candidates = close_matches(&key, roster);

    match candidates.as_slice() {
        [] => MatchResult::NotFound,
        [only] => {
            // A single close match resolves straight to its entry.
            match roster.get(only) {
                Some(email) => MatchResult::UniqueFuzzy {
                    name: only.clone(),
                    email: email.to_string(),
                },
                None => MatchResult::NotFound,
            }
        }
        _ => MatchResult::Ambiguous(candidates),
    }
}

/// Roster keys within [`MATCH_CUTOFF`] of `key`, best first, capped at
/// [`MAX_CANDIDATES`].
fn close_matches(key: &str, roster: &CanonicalRoster) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = roster
        .keys()
        .map(|name| (strsim::jaro_winkler(key, name), name))
        .filter(|(score, _)| *score >= MATCH_CUTOFF)
        .collect();

    // Descending score; ties by name so ranking is stable across runs.
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });

    scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(&str, &str)]) -> CanonicalRoster {
        let mut r = CanonicalRoster::new();
        for (name, email) in entries {
            r.insert(name, email);
        }
        r
    }

    #[test]
    fn exact_hit_any_casing() {
        let r = roster(&[("Doe, Jane", "jane@x.edu")]);
        assert_eq!(
            match_name("JANE DOE", &r),
            MatchResult::Exact("jane@x.edu".into())
        );
        assert_eq!(
            match_name("jane doe", &r),
            MatchResult::Exact("jane@x.edu".into())
        );
    }

    #[test]
    fn every_key_matches_itself_exactly() {
        let r = roster(&[
            ("Doe, Jane", "jane@x.edu"),
            ("Smith, Bob", "bob@x.edu"),
            ("Nguyen, An", "an@x.edu"),
        ]);
        let entries: Vec<(String, String)> =
            r.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        for (key, email) in entries {
            assert_eq!(match_name(&key, &r), MatchResult::Exact(email));
        }
    }

    #[test]
    fn multi_comma_name_matches_its_own_key() {
        // A suffixed name's stored key must still be an exact hit for
        // itself.
        let r = roster(&[("Doe, Jane, Jr.", "jane@x.edu")]);
        let key = r.keys().next().unwrap().to_string();
        assert_eq!(match_name(&key, &r), MatchResult::Exact("jane@x.edu".into()));
    }

    #[test]
    fn single_close_match_resolves_to_that_entry() {
        // Regression for the single-candidate branch: the close match must
        // resolve to its own roster entry, not a neighbor's.
        let r = roster(&[("Doe, Jane", "jane@x.edu"), ("Xu, Wei", "wei@x.edu")]);
        match match_name("jane do", &r) {
            MatchResult::UniqueFuzzy { name, email } => {
                assert_eq!(name, "jane doe");
                assert_eq!(email, "jane@x.edu");
            }
            other => panic!("expected UniqueFuzzy, got {other:?}"),
        }
    }

    #[test]
    fn several_close_matches_are_deferred() {
        let r = roster(&[
            ("Doe, Jane", "jane@x.edu"),
            ("Doe, Janet", "janet@x.edu"),
            ("Xu, Wei", "wei@x.edu"),
        ]);
        match match_name("jane doh", &r) {
            MatchResult::Ambiguous(candidates) => {
                assert!(candidates.len() >= 2);
                assert!(candidates.contains(&"jane doe".to_string()));
                assert!(candidates.contains(&"janet doe".to_string()));
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn nothing_close_is_not_found() {
        let r = roster(&[("Doe, Jane", "jane@x.edu")]);
        assert_eq!(match_name("zzyzx qqq", &r), MatchResult::NotFound);
    }

    #[test]
    fn candidates_are_capped() {
        let mut r = CanonicalRoster::new();
        for i in 0..10 {
            r.insert(&format!("jane doe{i}"), &format!("jane{i}@x.edu"));
        }
        match match_name("jane do", &r) {
            MatchResult::Ambiguous(candidates) => {
                assert_eq!(candidates.len(), MAX_CANDIDATES)
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn empty_roster_is_not_found() {
        assert_eq!(match_name("anyone", &CanonicalRoster::new()), MatchResult::NotFound);
    }
}
