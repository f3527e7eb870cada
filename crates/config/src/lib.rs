// Configuration loading

pub mod course;
pub mod error;
pub mod settings;

pub use course::CourseConfig;
pub use error::ConfigError;
pub use settings::Settings;
