//! Extension batch application.
//!
//! The batch is a full cross product: every resolved student gets the
//! extension on every filtered assignment. Failures are best-effort —
//! collected per (student, assignment) pair, never aborting the rest of
//! the batch. Extensions do not stack; re-applying replaces (a property
//! of the platform collaborator, which keeps the whole batch idempotent
//! for identical inputs).

use gradekit_platform::AssignmentHandle;

use crate::model::{ApplyFailure, BatchOutcome};

/// Apply one student's extension across all assignments.
pub fn apply_for_student<A: AssignmentHandle>(
    assignments: &[A],
    email: &str,
    days: i64,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for assignment in assignments {
        match assignment.apply_extension(email, days) {
            Ok(()) => outcome.applied += 1,
            Err(e) => outcome.failures.push(ApplyFailure {
                email: email.to_string(),
                assignment: assignment.title().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    outcome
}

/// Apply extensions for every (email, days) pair across all assignments.
pub fn apply_extensions<A: AssignmentHandle>(
    assignments: &[A],
    emails_with_days: &[(String, i64)],
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (email, days) in emails_with_days {
        outcome.merge(apply_for_student(assignments, email, *days));
    }

    outcome
}
