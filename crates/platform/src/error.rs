use std::fmt;

#[derive(Debug)]
pub enum PlatformError {
    /// A required credential environment variable is unset.
    MissingCredential(String),
    /// Login to the platform was rejected.
    LoginFailed(String),
    /// A course id that the platform does not know.
    UnknownCourse(String),
    /// An assignment id that the platform does not know.
    UnknownAssignment(String),
    /// An individual extension call failed.
    ExtensionFailed { assignment: String, email: String, reason: String },
    /// Transport-level failure talking to the platform.
    Transport(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential(var) => {
                write!(f, "missing credential: environment variable {var} is not set")
            }
            Self::LoginFailed(msg) => write!(f, "login failed: {msg}"),
            Self::UnknownCourse(id) => write!(f, "unknown course: {id}"),
            Self::UnknownAssignment(id) => write!(f, "unknown assignment: {id}"),
            Self::ExtensionFailed { assignment, email, reason } => {
                write!(f, "extension for {email} on '{assignment}' failed: {reason}")
            }
            Self::Transport(msg) => write!(f, "platform transport error: {msg}"),
        }
    }
}

impl std::error::Error for PlatformError {}
