//! TOML-backed platform fixture.
//!
//! Loads a snapshot of both platforms into the in-memory backends so the
//! binary can run end to end against local data. Format:
//!
//! ```toml
//! [[course]]
//! id = "123456"
//! name = "CS 101"
//! term = "Fall 2026"
//! assignments = ["hw4: graphs", "hw4 redux"]
//!
//! [[course.roster]]
//! name = "Doe, Jane"
//! sid = "S1"
//! email = "jane@x.edu"
//! role = "Student"
//!
//! [[forum-course]]
//! id = "n1"
//! number = "cs101"
//! term = "Fall 2026"
//! is-ta = true
//!
//! [[forum-course.user]]
//! name = "Jane Doe"
//! role = "student"
//! emails = "jane@x.edu, jane@personal.example"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PlatformError;
use crate::memory::{MemoryForum, MemoryGrading};

#[derive(Debug, Deserialize, Default)]
struct FixtureFile {
    #[serde(default, rename = "course")]
    courses: Vec<FixtureCourse>,
    #[serde(default, rename = "forum-course")]
    forum_courses: Vec<FixtureForumCourse>,
}

#[derive(Debug, Deserialize)]
struct FixtureCourse {
    id: String,
    name: String,
    #[serde(default)]
    term: String,
    #[serde(default)]
    assignments: Vec<String>,
    #[serde(default)]
    roster: Vec<FixtureRosterRow>,
}

#[derive(Debug, Deserialize)]
struct FixtureRosterRow {
    name: String,
    #[serde(default)]
    sid: String,
    email: String,
    #[serde(default = "default_role")]
    role: String,
}

fn default_role() -> String {
    "Student".to_string()
}

#[derive(Debug, Deserialize)]
struct FixtureForumCourse {
    id: String,
    number: String,
    #[serde(default)]
    term: String,
    #[serde(default, rename = "is-ta")]
    is_ta: bool,
    #[serde(default, rename = "user")]
    users: Vec<FixtureForumUser>,
}

#[derive(Debug, Deserialize)]
struct FixtureForumUser {
    name: String,
    role: String,
    #[serde(default)]
    emails: String,
}

/// Load a fixture file into in-memory grading and forum backends.
pub fn load(path: &Path) -> Result<(MemoryGrading, MemoryForum), PlatformError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PlatformError::Transport(format!("{}: {e}", path.display())))?;
    parse(&contents)
}

fn parse(contents: &str) -> Result<(MemoryGrading, MemoryForum), PlatformError> {
    let fixture: FixtureFile =
        toml::from_str(contents).map_err(|e| PlatformError::Transport(e.to_string()))?;

    let mut grading = MemoryGrading::new();
    for course in &fixture.courses {
        grading.add_course(&course.id, &course.name, &course.term);
        for row in &course.roster {
            grading.add_roster_row(&course.id, &row.name, &row.sid, &row.email, &row.role);
        }
        for title in &course.assignments {
            grading.add_assignment(&course.id, title);
        }
    }

    let mut forum = MemoryForum::new();
    for course in &fixture.forum_courses {
        forum.add_course(&course.id, &course.number, &course.term, course.is_ta);
        for user in &course.users {
            forum.add_user(&course.id, &user.name, &user.role, &user.emails);
        }
    }

    Ok((grading, forum))
}
