//! Running course grade from recorded scores.
//!
//! # Invariants
//! - Only assignments with a present score participate.
//! - "No scores yet" is `CourseGrade::NoData`, never a zero mean.
//! - The mean is kept at full precision; rounding happens in formatting.

use crate::model::assignment::{format_percent, AssignmentId};
use crate::model::course::CourseId;
use crate::repo::record_store::RecordStore;
use crate::service::error::{ServiceError, ServiceResult};

/// One score included in a grade.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub assignment_id: AssignmentId,
    pub title: String,
    pub score: f64,
}

/// Grade of one course.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseGrade {
    /// The course has no scored assignments.
    NoData,
    /// Unweighted mean of `entries`, in store order.
    Graded {
        entries: Vec<ScoredEntry>,
        mean: f64,
    },
}

impl CourseGrade {
    pub fn mean(&self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::Graded { mean, .. } => Some(*mean),
        }
    }

    pub fn entries(&self) -> &[ScoredEntry] {
        match self {
            Self::NoData => &[],
            Self::Graded { entries, .. } => entries,
        }
    }

    /// Mean rendered with two decimals, e.g. `85.00%`.
    pub fn display_mean(&self) -> Option<String> {
        self.mean().map(format_percent)
    }
}

/// Computes the current grade of `course_id`.
///
/// # Errors
/// - `ServiceError::UnknownCourse` when the course does not exist.
pub fn current_grade(store: &RecordStore, course_id: CourseId) -> ServiceResult<CourseGrade> {
    if store.get_course(course_id).is_none() {
        return Err(ServiceError::UnknownCourse(course_id));
    }

    let entries: Vec<ScoredEntry> = store
        .assignments()
        .iter()
        .filter(|assignment| assignment.course_id == course_id)
        .filter_map(|assignment| {
            assignment.score.map(|score| ScoredEntry {
                assignment_id: assignment.id,
                title: assignment.title.clone(),
                score,
            })
        })
        .collect();

    if entries.is_empty() {
        return Ok(CourseGrade::NoData);
    }

    let total: f64 = entries.iter().map(|entry| entry.score).sum();
    let mean = total / entries.len() as f64;
    Ok(CourseGrade::Graded { entries, mean })
}
