//! `gradekit-platform` — collaborator interfaces for the grading and forum
//! platforms, plus credentials and an in-memory backend.
//!
//! Real HTTP clients are deliberately absent: the engine and CLI only
//! depend on the traits here, and tests drive them through `memory`.

pub mod credentials;
pub mod error;
pub mod fixture;
pub mod forum;
pub mod grading;
pub mod memory;

pub use credentials::Credentials;
pub use error::PlatformError;
pub use forum::{ForumClient, ForumCourse, ForumUser};
pub use grading::{AssignmentHandle, CourseSummary, GradingClient, RosterRow};
