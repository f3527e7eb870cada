//! Roster builders.
//!
//! Three sources produce the same [`CanonicalRoster`]:
//! - the grading platform's CSV export (`name, SID, email, role`),
//! - the forum's CSV export (`name, email, role`),
//! - the forum's live membership list, cross-referenced against the
//!   grading platform's known emails.
//!
//! Only rows with role `Student` (any casing; the platforms disagree on
//! role capitalization) enter the roster. Canonicalization of keys
//! happens inside [`CanonicalRoster::insert`], so all three builders
//! agree on casing.

use std::collections::HashSet;

use gradekit_platform::ForumUser;

use crate::error::RosterError;
use crate::model::{CanonicalRoster, MembershipOutcome};

const STUDENT_ROLE: &str = "Student";

/// Grading-platform export columns, in order.
const GRADING_COLUMNS: usize = 4; // name, SID, email, role

/// Forum export columns, in order.
const FORUM_COLUMNS: usize = 3; // name, email, role

/// Build a roster from a grading-platform CSV export. Header row skipped.
pub fn from_grading_export(csv_data: &str) -> Result<CanonicalRoster, RosterError> {
    parse_export(csv_data, GRADING_COLUMNS, |record| {
        (record[0].to_string(), record[2].to_string(), record[3].to_string())
    })
}

/// Build a roster from a forum CSV export. Header row skipped.
pub fn from_forum_export(csv_data: &str) -> Result<CanonicalRoster, RosterError> {
    parse_export(csv_data, FORUM_COLUMNS, |record| {
        (record[0].to_string(), record[1].to_string(), record[2].to_string())
    })
}

/// Shared CSV walk: positional columns, per-row width check, role filter.
fn parse_export(
    csv_data: &str,
    expected_columns: usize,
    extract: impl Fn(&csv::StringRecord) -> (String, String, String),
) -> Result<CanonicalRoster, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut roster = CanonicalRoster::new();

    for record in reader.records() {
        let record = record.map_err(|e| RosterError::Csv(e.to_string()))?;
        if record.len() < expected_columns {
            return Err(RosterError::ShortRow {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: expected_columns,
                found: record.len(),
            });
        }
        let (name, email, role) = extract(&record);
        if !role.eq_ignore_ascii_case(STUDENT_ROLE) {
            continue;
        }
        roster.insert(&name, &email);
    }

    Ok(roster)
}

/// Build a roster from the forum's membership list, keeping only students
/// whose candidate emails intersect the grading platform's email set.
///
/// The first valid candidate wins. Students with no valid email land in
/// `unmatched` for the operator to review; they never block the build.
pub fn from_forum_membership(
    students: &[ForumUser],
    valid_emails: &HashSet<String>,
) -> MembershipOutcome {
    let mut outcome = MembershipOutcome::default();

    for student in students {
        if !student.role.eq_ignore_ascii_case(STUDENT_ROLE) {
            continue;
        }
        match student.emails.iter().find(|e| valid_emails.contains(*e)) {
            Some(email) => {
                outcome.roster.insert(&student.name, email);
            }
            None => outcome.unmatched.push(student.name.clone()),
        }
    }

    outcome
}
