//! Course domain model.
//!
//! # Invariants
//! - `name` is stored trimmed and is never empty.
//! - Name comparison uses [`normalize_course_name`]; display keeps casing.

use super::validation::{deserialize_trimmed, ValidationError};
use serde::{Deserialize, Serialize};

/// Positive integer identifier of a course.
pub type CourseId = u32;

/// One enrolled course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(deserialize_with = "deserialize_trimmed")]
    pub name: String,
}

impl Course {
    /// Creates a course with a trimmed name.
    ///
    /// # Errors
    /// - `ValidationError::MissingName` when `name` is blank.
    pub fn new(id: CourseId, name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
        })
    }

    /// Returns whether `name` refers to this course after normalization.
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_course_name(&self.name) == normalize_course_name(name)
    }
}

/// Comparison key for course names: trimmed and lowercased.
pub fn normalize_course_name(name: &str) -> String {
    name.trim().to_lowercase()
}
