//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Domain      | Description                                   |
//! |------|-------------|-----------------------------------------------|
//! | 0    | Universal   | Success (an empty name list is still success) |
//! | 1    | Universal   | General error (unspecified)                   |
//! | 2    | Universal   | CLI usage error (bad args, missing course id) |
//! | 3    | config      | Settings or course config missing/malformed   |
//! | 4    | credentials | Required credential env var unset             |
//! | 5    | platform    | Grading/forum platform call failed            |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use gradekit_platform::PlatformError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Settings or per-course config missing or malformed.
pub const EXIT_CONFIG: u8 = 3;

/// A required credential environment variable is unset.
pub const EXIT_CREDENTIALS: u8 = 4;

/// A grading or forum platform call failed (login, listing, apply).
pub const EXIT_PLATFORM: u8 = 5;

/// Map a PlatformError to its exit code.
pub fn platform_exit_code(err: &PlatformError) -> u8 {
    match err {
        PlatformError::MissingCredential(_) => EXIT_CREDENTIALS,
        _ => EXIT_PLATFORM,
    }
}
