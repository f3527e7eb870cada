// Application settings
// Loaded from ~/.config/gradekit/settings.toml

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tool-wide settings. Passed explicitly into each stage; there is no
/// process-global settings object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding per-course config files.
    #[serde(rename = "course-path")]
    pub course_path: PathBuf,

    /// Registered course identifiers.
    pub courses: Vec<String>,

    /// Newly configured courses become the default course.
    #[serde(rename = "default-to-newest")]
    pub default_to_newest: bool,

    /// Extension length in days when `--days` is omitted.
    #[serde(rename = "default-length")]
    pub default_length: i64,

    /// Course used when `--id` is omitted.
    #[serde(rename = "default-course", skip_serializing_if = "Option::is_none")]
    pub default_course: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            course_path: config_dir().join("courses"),
            courses: Vec::new(),
            default_to_newest: true,
            default_length: 5,
            default_course: None,
        }
    }
}

/// Outcome of registering a course identifier, for the caller to report.
#[derive(Debug, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// The identifier was already registered (its config gets overwritten).
    pub already_existed: bool,
    /// The identifier became the default course.
    pub promoted_default: bool,
}

impl Settings {
    /// The settings file path under the user config directory.
    pub fn config_path() -> PathBuf {
        config_dir().join("settings.toml")
    }

    /// Load settings from the default location, writing a default file
    /// first if none exists.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        Self::load_or_init_at(&Self::config_path())
    }

    /// Load settings from `path`, initializing defaults when absent.
    pub fn load_or_init_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Register a course identifier, maintaining the default course.
    ///
    /// The first registered course always becomes the default; afterwards
    /// `default-to-newest` decides. The caller reports the outcome.
    pub fn register_course(&mut self, identifier: &str) -> RegisterOutcome {
        let already_existed = self.courses.iter().any(|c| c == identifier);
        if !already_existed {
            self.courses.push(identifier.to_string());
        }

        let promoted_default = if self.default_course.is_none() || self.default_to_newest {
            self.default_course = Some(identifier.to_string());
            true
        } else {
            false
        };

        RegisterOutcome { already_existed, promoted_default }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradekit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_initializes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings::load_or_init_at(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists(), "default file should be written");

        // Second load reads the file it just wrote.
        let reloaded = Settings::load_or_init_at(&path).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn round_trips_kebab_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut settings = Settings::default();
        settings.register_course("cs101");
        settings.save_to(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("default-to-newest"));
        assert!(raw.contains("default-length"));
        assert!(raw.contains("default-course"));

        let reloaded = Settings::load_or_init_at(&path).unwrap();
        assert_eq!(reloaded.default_course.as_deref(), Some("cs101"));
    }

    #[test]
    fn first_course_becomes_default() {
        let mut settings = Settings { default_to_newest: false, ..Settings::default() };
        let outcome = settings.register_course("cs101");
        assert!(!outcome.already_existed);
        assert!(outcome.promoted_default);
        assert_eq!(settings.default_course.as_deref(), Some("cs101"));

        // default-to-newest off: the second course does not take over.
        let outcome = settings.register_course("cs202");
        assert!(!outcome.promoted_default);
        assert_eq!(settings.default_course.as_deref(), Some("cs101"));
    }

    #[test]
    fn newest_promotes_when_enabled() {
        let mut settings = Settings::default();
        settings.register_course("cs101");
        let outcome = settings.register_course("cs202");
        assert!(outcome.promoted_default);
        assert_eq!(settings.default_course.as_deref(), Some("cs202"));
    }

    #[test]
    fn re_registering_flags_overwrite() {
        let mut settings = Settings::default();
        settings.register_course("cs101");
        let outcome = settings.register_course("cs101");
        assert!(outcome.already_existed);
        assert_eq!(settings.courses, vec!["cs101"]);
    }
}
