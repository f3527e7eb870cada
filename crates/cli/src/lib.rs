//! Command implementations for the `gradekit` binary.
//!
//! Commands live here (as a library) so integration tests can drive them
//! headlessly with in-memory platform backends and scripted prompts.

pub mod exit_codes;
pub mod extend;
pub mod prompt;
pub mod setup;

use gradekit_config::ConfigError;
use gradekit_platform::PlatformError;
use gradekit_roster::PromptClosed;

use exit_codes::{platform_exit_code, EXIT_CONFIG, EXIT_ERROR, EXIT_USAGE};

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from config error with proper exit code.
    pub fn config(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::CourseMissing(_) => {
                Some("run `gradekit configure` to set up this course".to_string())
            }
            _ => None,
        };
        Self { code: EXIT_CONFIG, message: err.to_string(), hint }
    }

    /// Create error from platform error with proper exit code.
    pub fn platform(err: PlatformError) -> Self {
        let hint = match &err {
            PlatformError::MissingCredential(var) => {
                Some(format!("set {var} in the environment or in a .env file"))
            }
            PlatformError::LoginFailed(_) => {
                Some("check the credentials in your environment or .env file".to_string())
            }
            _ => None,
        };
        Self { code: platform_exit_code(&err), message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<PromptClosed> for CliError {
    fn from(err: PromptClosed) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::{EXIT_CREDENTIALS, EXIT_PLATFORM};
    use std::path::PathBuf;

    #[test]
    fn missing_credential_maps_to_its_own_code() {
        let err = CliError::platform(PlatformError::MissingCredential("GS_EMAIL".into()));
        assert_eq!(err.code, EXIT_CREDENTIALS);
        assert!(err.hint.unwrap().contains("GS_EMAIL"));
    }

    #[test]
    fn other_platform_errors_map_to_platform_code() {
        let err = CliError::platform(PlatformError::UnknownCourse("c9".into()));
        assert_eq!(err.code, EXIT_PLATFORM);
    }

    #[test]
    fn missing_course_config_hints_at_configure() {
        let err = CliError::config(ConfigError::CourseMissing(PathBuf::from("cs101.toml")));
        assert_eq!(err.code, EXIT_CONFIG);
        assert!(err.hint.unwrap().contains("configure"));
    }
}
