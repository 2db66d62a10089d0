//! Course find-or-create use-case.
//!
//! # Responsibility
//! - Resolve course names to existing records without duplicating them.
//! - Create and persist new courses when no match exists.
//!
//! # Invariants
//! - At most one course per normalized name.
//! - Reuse of an existing course is reported, never silent.

use crate::model::course::Course;
use crate::repo::record_store::RecordStore;
use crate::model::validation::ValidationError;
use crate::service::error::{ServiceError, ServiceResult};
use crate::storage::StateGateway;
use log::info;

/// Outcome of [`CourseRegistry::resolve_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseResolution {
    pub course: Course,
    /// `false` when an existing course with the same normalized name was reused.
    pub created: bool,
}

/// Find-or-create surface for courses.
pub struct CourseRegistry<G: StateGateway> {
    gateway: G,
}

impl<G: StateGateway> CourseRegistry<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns the course named `name`, creating and saving it when absent.
    ///
    /// # Errors
    /// - `ValidationError::MissingName` for blank names.
    /// - `ServiceError::IdSpaceExhausted` when a new course has no free id.
    /// - `ServiceError::Storage` when the new course cannot be saved; `store`
    ///   is left untouched in that case.
    pub fn resolve_or_create(
        &self,
        store: &mut RecordStore,
        name: &str,
    ) -> ServiceResult<CourseResolution> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName.into());
        }

        if let Some(existing) = store.find_course_by_name(name) {
            info!(
                "event=course_resolve module=registry status=ok created=false course_id={}",
                existing.id
            );
            return Ok(CourseResolution {
                course: existing.clone(),
                created: false,
            });
        }

        let id = store
            .next_course_id()
            .ok_or(ServiceError::IdSpaceExhausted)?;
        let candidate = Course::new(id, name)?;

        let mut next = store.clone();
        next.append_course(candidate.clone());
        self.gateway.save(&next)?;
        *store = next;

        info!(
            "event=course_resolve module=registry status=ok created=true course_id={}",
            candidate.id
        );
        Ok(CourseResolution {
            course: candidate,
            created: true,
        })
    }
}

/// Courses in insertion order, as shown by course pickers.
pub fn list_courses(store: &RecordStore) -> &[Course] {
    store.courses()
}

/// Resolves a course by normalized name without creating it.
pub fn find_course<'a>(store: &'a RecordStore, name: &str) -> Option<&'a Course> {
    store.find_course_by_name(name)
}
