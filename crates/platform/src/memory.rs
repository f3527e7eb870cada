//! In-memory platform backend.
//!
//! Backs tests and local fixtures. `MemoryGrading` keeps applied
//! extensions in a `(assignment, email)` map where insertion replaces any
//! previous value — the same non-stacking behavior the live platform has.
//! Individual (assignment, email) pairs can be poisoned to force apply
//! failures.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::credentials::Credentials;
use crate::error::PlatformError;
use crate::forum::{ForumClient, ForumCourse, ForumUser};
use crate::grading::{AssignmentHandle, CourseSummary, GradingClient, RosterRow};

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ExtensionLog {
    /// (assignment title, email) -> days. Insert replaces.
    pub applied: BTreeMap<(String, String), i64>,
    /// Pairs whose apply calls fail.
    pub poisoned: BTreeSet<(String, String)>,
    /// Total apply calls made, failures included.
    pub calls: usize,
}

#[derive(Default)]
pub struct MemoryGrading {
    courses: Vec<CourseSummary>,
    rosters: HashMap<String, Vec<RosterRow>>,
    assignments: HashMap<String, Vec<String>>,
    log: Rc<RefCell<ExtensionLog>>,
}

impl MemoryGrading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_course(&mut self, id: &str, name: &str, term: &str) {
        self.courses.push(CourseSummary {
            id: id.to_string(),
            name: name.to_string(),
            term: term.to_string(),
        });
        self.rosters.entry(id.to_string()).or_default();
        self.assignments.entry(id.to_string()).or_default();
    }

    pub fn add_roster_row(&mut self, course_id: &str, name: &str, sid: &str, email: &str, role: &str) {
        self.rosters.entry(course_id.to_string()).or_default().push(RosterRow {
            name: name.to_string(),
            sid: sid.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        });
    }

    pub fn add_assignment(&mut self, course_id: &str, title: &str) {
        self.assignments
            .entry(course_id.to_string())
            .or_default()
            .push(title.to_string());
    }

    /// Force apply calls for this (assignment, email) pair to fail.
    pub fn poison(&mut self, assignment: &str, email: &str) {
        self.log
            .borrow_mut()
            .poisoned
            .insert((assignment.to_string(), email.to_string()));
    }

    /// Snapshot of everything applied so far.
    pub fn applied(&self) -> BTreeMap<(String, String), i64> {
        self.log.borrow().applied.clone()
    }

    pub fn call_count(&self) -> usize {
        self.log.borrow().calls
    }
}

pub struct MemoryAssignment {
    title: String,
    log: Rc<RefCell<ExtensionLog>>,
}

impl AssignmentHandle for MemoryAssignment {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply_extension(&self, email: &str, days: i64) -> Result<(), PlatformError> {
        let mut log = self.log.borrow_mut();
        log.calls += 1;
        let key = (self.title.clone(), email.to_string());
        if log.poisoned.contains(&key) {
            return Err(PlatformError::ExtensionFailed {
                assignment: self.title.clone(),
                email: email.to_string(),
                reason: "rejected by platform".into(),
            });
        }
        log.applied.insert(key, days);
        Ok(())
    }
}

impl GradingClient for MemoryGrading {
    type Assignment = MemoryAssignment;

    fn list_courses(&self) -> Result<Vec<CourseSummary>, PlatformError> {
        Ok(self.courses.clone())
    }

    fn course_roster(&self, course_id: &str) -> Result<Vec<RosterRow>, PlatformError> {
        self.rosters
            .get(course_id)
            .cloned()
            .ok_or_else(|| PlatformError::UnknownCourse(course_id.to_string()))
    }

    fn list_assignments(
        &self,
        course_id: &str,
        title_filter: &str,
    ) -> Result<Vec<MemoryAssignment>, PlatformError> {
        let titles = self
            .assignments
            .get(course_id)
            .ok_or_else(|| PlatformError::UnknownCourse(course_id.to_string()))?;
        Ok(titles
            .iter()
            .filter(|t| t.contains(title_filter))
            .map(|t| MemoryAssignment {
                title: t.clone(),
                log: Rc::clone(&self.log),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Forum
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryForum {
    logged_in: bool,
    reject_login: bool,
    courses: Vec<ForumCourse>,
    users: HashMap<String, Vec<ForumUser>>,
}

impl MemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_logins(&mut self) {
        self.reject_login = true;
    }

    pub fn add_course(&mut self, id: &str, number: &str, term: &str, is_ta: bool) {
        self.courses.push(ForumCourse {
            id: id.to_string(),
            number: number.to_string(),
            term: term.to_string(),
            is_ta,
        });
        self.users.entry(id.to_string()).or_default();
    }

    pub fn add_user(&mut self, course_id: &str, name: &str, role: &str, raw_emails: &str) {
        self.users.entry(course_id.to_string()).or_default().push(ForumUser {
            name: name.to_string(),
            role: role.to_string(),
            emails: ForumUser::parse_emails(raw_emails),
        });
    }
}

impl ForumClient for MemoryForum {
    fn login(&mut self, credentials: &Credentials) -> Result<(), PlatformError> {
        if self.reject_login || credentials.email.is_empty() {
            return Err(PlatformError::LoginFailed("invalid credentials".into()));
        }
        self.logged_in = true;
        Ok(())
    }

    fn ta_courses(&self) -> Result<Vec<ForumCourse>, PlatformError> {
        if !self.logged_in {
            return Err(PlatformError::LoginFailed("not logged in".into()));
        }
        Ok(self.courses.iter().filter(|c| c.is_ta).cloned().collect())
    }

    fn course_users(&self, course_id: &str) -> Result<Vec<ForumUser>, PlatformError> {
        if !self.logged_in {
            return Err(PlatformError::LoginFailed("not logged in".into()));
        }
        self.users
            .get(course_id)
            .cloned()
            .ok_or_else(|| PlatformError::UnknownCourse(course_id.to_string()))
    }
}
