//! Assignment domain model.
//!
//! # Responsibility
//! - Define the persisted assignment record and its lifecycle status.
//! - Parse raw status and score input into typed values.
//!
//! # Invariants
//! - `title` is stored trimmed and is never empty.
//! - `score`, when present, is finite and within `[0, 100]`.
//! - `created_at` is informational and never used for ordering.

use super::course::CourseId;
use super::due_date::DueDate;
use super::validation::{deserialize_trimmed, ValidationError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Positive integer identifier of an assignment.
pub type AssignmentId = u32;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Progress state of one assignment.
///
/// Serialized with the human labels used by the durable file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl AssignmentStatus {
    /// Statuses in menu order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parses a status label; blank input selects the default.
    ///
    /// Accepts `Not Started`, `not_started`, `not-started` and `NotStarted`
    /// spellings case-insensitively.
    ///
    /// # Errors
    /// - `ValidationError::InvalidStatus` for any other value.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let compact: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "" => Ok(Self::default()),
            "notstarted" => Ok(Self::NotStarted),
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::InvalidStatus(input.trim().to_string())),
        }
    }
}

impl Display for AssignmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub course_id: CourseId,
    #[serde(deserialize_with = "deserialize_trimmed")]
    pub title: String,
    pub due_date: DueDate,
    pub status: AssignmentStatus,
    /// Percentage score, `None` when not graded yet.
    #[serde(default)]
    pub score: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl Assignment {
    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }

    /// Checks record-level invariants of an already constructed assignment.
    ///
    /// Used on records read back from the durable store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() || self.title.trim() != self.title {
            return Err(ValidationError::MissingTitle);
        }
        if let Some(score) = self.score {
            check_score(score)?;
        }
        Ok(())
    }
}

/// Parses an optional score; `None` or blank input means no score.
///
/// # Errors
/// - `ValidationError::NotANumber` when the text is not a finite number.
/// - `ValidationError::ScoreOutOfRange` when outside `[0, 100]`.
pub fn parse_score(input: Option<&str>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = input.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let value = raw
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
    check_score(value).map(Some)
}

/// Range-checks a numeric score.
pub fn check_score(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(value.to_string()));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ValidationError::ScoreOutOfRange(value));
    }
    Ok(value)
}

/// Renders a percentage with two decimals, e.g. `92.50%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
