use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// TOML serialization error.
    Serialize(String),
    /// IO error (file read/write, directory creation).
    Io(String),
    /// Course config file absent. Fatal to flows that need it.
    CourseMissing(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Serialize(msg) => write!(f, "config serialize error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::CourseMissing(path) => {
                write!(f, "course config not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
