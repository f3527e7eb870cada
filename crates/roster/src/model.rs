use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::roster_key;

// ---------------------------------------------------------------------------
// Canonical roster
// ---------------------------------------------------------------------------

/// The unified, course-scoped mapping from canonical name key to email.
///
/// Every insert and every lookup passes through [`roster_key`], so callers
/// never have to remember which source lowercased its names. Keys are
/// unique; a colliding insert overwrites (last write wins) and returns
/// the displaced email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalRoster {
    entries: BTreeMap<String, String>,
}

impl CanonicalRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student by display name. Returns the previous email if the
    /// canonical key was already present.
    pub fn insert(&mut self, display_name: &str, email: &str) -> Option<String> {
        self.entries.insert(roster_key(display_name), email.to_string())
    }

    /// Case-insensitive lookup by free-text name.
    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.entries.get(&roster_key(query)).map(String::as_str)
    }

    /// Lookup by an already-canonical key (e.g. a matcher candidate).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for CanonicalRoster {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut roster = Self::new();
        for (name, email) in iter {
            roster.insert(&name, &email);
        }
        roster
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Outcome of matching one free-text query against a roster.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// Query is a roster key (case-insensitively).
    Exact(String),
    /// No exact hit, but exactly one candidate above the cutoff.
    UniqueFuzzy { name: String, email: String },
    /// Two or more candidates above the cutoff, best first.
    Ambiguous(Vec<String>),
    /// Nothing above the cutoff.
    NotFound,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(email) => write!(f, "exact ({email})"),
            Self::UniqueFuzzy { name, email } => write!(f, "close match {name} ({email})"),
            Self::Ambiguous(candidates) => write!(f, "{} close matches", candidates.len()),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// One deferred ambiguity: the original query plus its ranked candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAmbiguity {
    pub query: String,
    pub candidates: Vec<String>,
}

// ---------------------------------------------------------------------------
// Forum membership
// ---------------------------------------------------------------------------

/// Result of cross-referencing forum students against grading-platform
/// emails. `unmatched` is diagnostic: reported to the operator, never
/// fatal.
#[derive(Debug, Default)]
pub struct MembershipOutcome {
    pub roster: CanonicalRoster,
    pub unmatched: Vec<String>,
}

// ---------------------------------------------------------------------------
// Batch application
// ---------------------------------------------------------------------------

/// One failed extension call, surfaced per (student, assignment) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyFailure {
    pub email: String,
    pub assignment: String,
    pub reason: String,
}

/// Best-effort batch result: failures are collected, never aborting.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub applied: usize,
    pub failures: Vec<ApplyFailure>,
}

impl BatchOutcome {
    pub fn merge(&mut self, other: BatchOutcome) {
        self.applied += other.applied;
        self.failures.extend(other.failures);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_canonicalizes_every_source_shape() {
        let mut roster = CanonicalRoster::new();
        roster.insert("Doe, Jane", "jane@x.edu");
        roster.insert("BOB SMITH", "bob@x.edu");
        assert_eq!(roster.lookup("jane doe"), Some("jane@x.edu"));
        assert_eq!(roster.lookup("Jane Doe"), Some("jane@x.edu"));
        assert_eq!(roster.lookup("bob smith"), Some("bob@x.edu"));
    }

    #[test]
    fn colliding_keys_last_write_wins() {
        let mut roster = CanonicalRoster::new();
        assert_eq!(roster.insert("Doe, Jane", "old@x.edu"), None);
        assert_eq!(
            roster.insert("jane doe", "new@x.edu"),
            Some("old@x.edu".to_string())
        );
        assert_eq!(roster.lookup("Jane Doe"), Some("new@x.edu"));
        assert_eq!(roster.len(), 1);
    }
}
