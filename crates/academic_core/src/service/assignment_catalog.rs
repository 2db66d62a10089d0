//! Assignment creation and deadline queries.
//!
//! # Responsibility
//! - Validate raw assignment input in a fixed order before any mutation.
//! - Persist new assignments through the gateway.
//! - Produce the deadline view in a deterministic total order.
//!
//! # Invariants
//! - Validation order: course, title, due date, status, score.
//! - Deadline order: due date ascending (unparsed dates last), then id.

use crate::model::assignment::{parse_score, Assignment, AssignmentId, AssignmentStatus};
use crate::model::course::{Course, CourseId};
use crate::model::due_date::DueDate;
use crate::model::validation::ValidationError;
use crate::repo::record_store::RecordStore;
use crate::service::error::{ServiceError, ServiceResult};
use crate::storage::StateGateway;
use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use log::info;

/// Raw assignment input as supplied by the terminal layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAssignment {
    pub course_id: CourseId,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub due_date: String,
    /// `None` or blank selects `AssignmentStatus::NotStarted`.
    pub status: Option<String>,
    /// `None` or blank records no score.
    pub score: Option<String>,
}

/// Fully validated assignment awaiting confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDraft {
    pub course: Course,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub score: Option<f64>,
}

/// Deadline list row: an assignment plus its resolved course label.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineEntry {
    pub assignment: Assignment,
    pub course_label: String,
}

/// Validated-creation surface for assignments.
pub struct AssignmentCatalog<G: StateGateway> {
    gateway: G,
}

impl<G: StateGateway> AssignmentCatalog<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validates `input` without mutating `store`.
    ///
    /// # Errors
    /// - `ServiceError::UnknownCourse` when `course_id` does not resolve.
    /// - `ServiceError::Validation` for the first failing field.
    pub fn preview(
        &self,
        store: &RecordStore,
        input: &NewAssignment,
    ) -> ServiceResult<AssignmentDraft> {
        let course = store
            .get_course(input.course_id)
            .ok_or(ServiceError::UnknownCourse(input.course_id))?
            .clone();

        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle.into());
        }

        let due_date = DueDate::parse(&input.due_date)?;
        let status = AssignmentStatus::parse(input.status.as_deref().unwrap_or(""))?;
        let score = parse_score(input.score.as_deref())?;

        Ok(AssignmentDraft {
            course,
            title: title.to_string(),
            due_date,
            status,
            score,
        })
    }

    /// Validates, appends and saves a new assignment.
    ///
    /// # Errors
    /// - Any error from [`Self::preview`]; `store` is unchanged.
    /// - `ServiceError::Storage` when saving fails; `store` is unchanged.
    pub fn create(
        &self,
        store: &mut RecordStore,
        input: &NewAssignment,
    ) -> ServiceResult<Assignment> {
        let draft = self.preview(store, input)?;
        self.commit(store, draft)
    }

    /// Appends and saves a previously previewed draft.
    ///
    /// # Errors
    /// - `ServiceError::UnknownCourse` when the draft's course is gone.
    /// - `ServiceError::IdSpaceExhausted` when no assignment id is left.
    /// - `ServiceError::Storage` when saving fails.
    pub fn commit(
        &self,
        store: &mut RecordStore,
        draft: AssignmentDraft,
    ) -> ServiceResult<Assignment> {
        if store.get_course(draft.course.id).is_none() {
            return Err(ServiceError::UnknownCourse(draft.course.id));
        }

        let id = store
            .next_assignment_id()
            .ok_or(ServiceError::IdSpaceExhausted)?;
        let assignment = Assignment {
            id,
            course_id: draft.course.id,
            title: draft.title,
            due_date: DueDate::Date(draft.due_date),
            status: draft.status,
            score: draft.score,
            created_at: now_seconds(),
        };

        let mut next = store.clone();
        next.append_assignment(assignment.clone());
        self.gateway.save(&next)?;
        *store = next;

        info!(
            "event=assignment_create module=catalog status=ok assignment_id={} course_id={} scored={}",
            assignment.id,
            assignment.course_id,
            assignment.score.is_some()
        );
        Ok(assignment)
    }
}

/// Assignments ordered by due date then id.
///
/// When `only_incomplete` is set, `Completed` assignments are skipped.
pub fn list_sorted(store: &RecordStore, only_incomplete: bool) -> Vec<Assignment> {
    let mut items: Vec<Assignment> = store
        .assignments()
        .iter()
        .filter(|assignment| !(only_incomplete && assignment.is_completed()))
        .cloned()
        .collect();
    items.sort_by_key(|assignment| (assignment.due_date.sort_key(), assignment.id));
    items
}

/// Sorted deadline rows with course labels resolved.
pub fn upcoming(store: &RecordStore, only_incomplete: bool) -> Vec<DeadlineEntry> {
    list_sorted(store, only_incomplete)
        .into_iter()
        .map(|assignment| DeadlineEntry {
            course_label: store.course_label(assignment.course_id),
            assignment,
        })
        .collect()
}

/// Single assignment lookup for detail views.
pub fn get_assignment(store: &RecordStore, id: AssignmentId) -> Option<&Assignment> {
    store.get_assignment(id)
}

fn now_seconds() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
