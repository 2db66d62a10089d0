//! Core domain logic for the academic helper.
//! This crate is the single source of truth for course, assignment and grade
//! invariants; terminal front-ends only call into it.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::assignment::{
    format_percent, parse_score, Assignment, AssignmentId, AssignmentStatus,
};
pub use model::course::{normalize_course_name, Course, CourseId};
pub use model::due_date::{DueDate, DuePreset};
pub use model::validation::ValidationError;
pub use repo::record_store::{allocate_id, RecordStore, MAX_RECORD_ID};
pub use service::assignment_catalog::{
    get_assignment, list_sorted, upcoming, AssignmentCatalog, AssignmentDraft, DeadlineEntry,
    NewAssignment,
};
pub use service::course_registry::{find_course, list_courses, CourseRegistry, CourseResolution};
pub use service::error::{ServiceError, ServiceResult};
pub use service::grade_service::{current_grade, CourseGrade, ScoredEntry};
pub use storage::{
    bootstrap, JsonFileGateway, MemoryGateway, StateGateway, StorageError, StorageResult,
    DEFAULT_DATA_FILE, SEED_COURSE_NAMES,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
