//! Environment-based credentials.
//!
//! Both platforms authenticate with an email/password pair read from the
//! environment. A `.env` file in the working directory is honored via
//! `load_dotenv()`; callers run it once at startup before reading.

use std::env;

use crate::error::PlatformError;

/// Grading platform credential pair.
pub const GRADING_EMAIL_VAR: &str = "GS_EMAIL";
pub const GRADING_PASSWORD_VAR: &str = "GS_PASSWORD";

/// Forum platform credential pair.
pub const FORUM_EMAIL_VAR: &str = "PZ_EMAIL";
pub const FORUM_PASSWORD_VAR: &str = "PZ_PASSWORD";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Load `.env` if present. Missing files are fine; real env vars win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn required(var: &str) -> Result<String, PlatformError> {
    env::var(var).map_err(|_| PlatformError::MissingCredential(var.to_string()))
}

/// Credentials for the grading platform. Fatal to the calling flow when
/// either variable is unset.
pub fn grading_credentials() -> Result<Credentials, PlatformError> {
    Ok(Credentials {
        email: required(GRADING_EMAIL_VAR)?,
        password: required(GRADING_PASSWORD_VAR)?,
    })
}

/// Credentials for the forum platform.
pub fn forum_credentials() -> Result<Credentials, PlatformError> {
    Ok(Credentials {
        email: required(FORUM_EMAIL_VAR)?,
        password: required(FORUM_PASSWORD_VAR)?,
    })
}
