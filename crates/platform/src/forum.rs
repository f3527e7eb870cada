//! Forum platform interface.

use crate::credentials::Credentials;
use crate::error::PlatformError;

/// One course the logged-in user belongs to on the forum.
#[derive(Debug, Clone)]
pub struct ForumCourse {
    pub id: String,
    pub number: String,
    pub term: String,
    pub is_ta: bool,
}

/// One forum user. The platform reports emails as a single
/// comma-separated field; `parse_emails` splits it.
#[derive(Debug, Clone)]
pub struct ForumUser {
    pub name: String,
    pub role: String,
    pub emails: Vec<String>,
}

impl ForumUser {
    /// Split a raw `"a@x.edu, b@y.edu"` field into candidate emails.
    pub fn parse_emails(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

pub trait ForumClient {
    fn login(&mut self, credentials: &Credentials) -> Result<(), PlatformError>;

    /// Courses where the logged-in user holds the TA role.
    fn ta_courses(&self) -> Result<Vec<ForumCourse>, PlatformError>;

    /// All enrolled users of a course, every role included.
    fn course_users(&self, course_id: &str) -> Result<Vec<ForumUser>, PlatformError>;
}
