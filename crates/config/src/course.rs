// Per-course configuration
// One TOML file per course under the settings course-path directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gradekit_roster::CanonicalRoster;

use crate::error::ConfigError;
use crate::settings::Settings;

/// A configured course: its grading-platform id plus the canonical roster
/// built during setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseConfig {
    #[serde(rename = "gradescope-id")]
    pub gradescope_id: String,
    pub roster: CanonicalRoster,
}

impl CourseConfig {
    /// Path of the config file for `identifier` under `settings.course_path`.
    pub fn path_for(settings: &Settings, identifier: &str) -> PathBuf {
        settings.course_path.join(format!("{identifier}.toml"))
    }

    pub fn load(settings: &Settings, identifier: &str) -> Result<Self, ConfigError> {
        Self::load_from(&Self::path_for(settings, identifier))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::CourseMissing(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self, settings: &Settings, identifier: &str) -> Result<(), ConfigError> {
        self.save_to(&Self::path_for(settings, identifier))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))
    }
}
