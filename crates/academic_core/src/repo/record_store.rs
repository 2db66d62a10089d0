//! In-memory owner of all course and assignment records.
//!
//! # Responsibility
//! - Hold both collections in insertion order.
//! - Allocate identifiers and resolve lookups by id or normalized name.
//!
//! # Invariants
//! - New ids are `1 + max(existing)` per collection, or `1` when empty.
//! - Ids never exceed [`MAX_RECORD_ID`]; allocation past it yields `None`.
//! - Callers append records with freshly allocated ids only.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::model::course::{normalize_course_name, Course, CourseId};
use serde::{Deserialize, Serialize};

/// Largest id a record may carry.
pub const MAX_RECORD_ID: u32 = u32::MAX - 1;

/// Whole application state; the unit of load/save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordStore {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    assignments: Vec<Assignment>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns whether both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.assignments.is_empty()
    }

    /// Next free course id, `None` once the id space is exhausted.
    pub fn next_course_id(&self) -> Option<CourseId> {
        allocate_id(self.courses.iter().map(|course| course.id))
    }

    /// Next free assignment id, `None` once the id space is exhausted.
    pub fn next_assignment_id(&self) -> Option<AssignmentId> {
        allocate_id(self.assignments.iter().map(|assignment| assignment.id))
    }

    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn get_assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|assignment| assignment.id == id)
    }

    /// Finds a course whose trimmed, case-folded name equals `name`'s.
    pub fn find_course_by_name(&self, name: &str) -> Option<&Course> {
        let wanted = normalize_course_name(name);
        self.courses
            .iter()
            .find(|course| normalize_course_name(&course.name) == wanted)
    }

    /// Display label for a course reference, tolerating dangling ids.
    pub fn course_label(&self, id: CourseId) -> String {
        self.get_course(id)
            .map_or_else(|| format!("Course #{id}"), |course| course.name.clone())
    }

    pub fn append_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn append_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }
}

/// Returns `1 + max(ids)`, or `1` for an empty sequence.
///
/// Returns `None` instead of exceeding [`MAX_RECORD_ID`].
pub fn allocate_id<I>(ids: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    match ids.into_iter().max() {
        None => Some(1),
        Some(max) => max.checked_add(1).filter(|id| *id <= MAX_RECORD_ID),
    }
}
