//! Validation failures raised while constructing records from raw input.

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recoverable input validation failure.
///
/// Every variant is safe to surface to the terminal layer for a re-prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Course name is empty after trimming.
    MissingName,
    /// Assignment title is empty after trimming.
    MissingTitle,
    /// Due date is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Status is not one of the known lifecycle values.
    InvalidStatus(String),
    /// Score parsed but lies outside `[0, 100]`.
    ScoreOutOfRange(f64),
    /// Score is not a finite real number.
    NotANumber(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "course name is required"),
            Self::MissingTitle => write!(f, "assignment title is required"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; expected Not Started|In Progress|Completed"
            ),
            Self::ScoreOutOfRange(value) => {
                write!(f, "score {value} must be between 0 and 100")
            }
            Self::NotANumber(value) => write!(f, "score `{value}` is not a number"),
        }
    }
}

impl Error for ValidationError {}

/// Deserializes a string field with surrounding whitespace removed.
pub(crate) fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}
