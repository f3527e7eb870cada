//! Grading platform interface.
//!
//! The engine and CLI only see these traits; which backend sits behind
//! them (a live client or the in-memory table in `memory`) is the
//! caller's choice.

use crate::error::PlatformError;

/// One course as listed by the grading platform.
#[derive(Debug, Clone)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub term: String,
}

/// One roster row from the grading platform: name, SID, email, role.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub name: String,
    pub sid: String,
    pub email: String,
    pub role: String,
}

/// A single assignment that extensions can be applied to.
///
/// Extensions do not stack: applying again for the same student replaces
/// the previous extension rather than adding to it.
pub trait AssignmentHandle {
    fn title(&self) -> &str;

    fn apply_extension(&self, email: &str, days: i64) -> Result<(), PlatformError>;
}

pub trait GradingClient {
    type Assignment: AssignmentHandle;

    fn list_courses(&self) -> Result<Vec<CourseSummary>, PlatformError>;

    /// Full roster for a course (students, TAs, instructors).
    fn course_roster(&self, course_id: &str) -> Result<Vec<RosterRow>, PlatformError>;

    /// Assignments whose title contains `title_filter` (substring match).
    fn list_assignments(
        &self,
        course_id: &str,
        title_filter: &str,
    ) -> Result<Vec<Self::Assignment>, PlatformError>;
}
