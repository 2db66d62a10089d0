//! Whole-state persistence boundary.
//!
//! # Responsibility
//! - Load and save the complete [`RecordStore`] as one unit.
//! - Recover from unreadable stores by starting from an empty state.
//! - Seed default courses on first run.
//!
//! # Invariants
//! - `load` never fails; corruption is logged and replaced by an empty state.
//! - Records returned by `load` satisfy model invariants.
//! - `save` overwrites the previous content; no incremental writes.

mod json_file;
mod memory;

pub use json_file::JsonFileGateway;
pub use memory::MemoryGateway;

use crate::model::course::{normalize_course_name, Course};
use crate::repo::record_store::{RecordStore, MAX_RECORD_ID};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default durable store file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "academic_helper_data.json";

/// Courses inserted when the store has none.
pub const SEED_COURSE_NAMES: [&str; 3] = [
    "CS 361 – Software Engineering I",
    "MTH 265 – Intro to Series",
    "CS 340 – Intro to Databases",
];

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while writing the durable store.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write data file: {err}"),
            Self::Serialize(err) => write!(f, "failed to encode state: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Reason a persisted store was discarded at load time.
///
/// Never returned to callers of [`StateGateway::load`]; only logged.
#[derive(Debug)]
pub struct DataCorruption {
    reason: String,
}

impl DataCorruption {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for DataCorruption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "data corruption: {}", self.reason)
    }
}

impl Error for DataCorruption {}

/// Durable storage contract for the whole application state.
pub trait StateGateway {
    /// Returns the persisted state, or an empty state when none is usable.
    fn load(&self) -> RecordStore;
    /// Replaces the persisted state with `store`.
    fn save(&self, store: &RecordStore) -> StorageResult<()>;
}

impl<G: StateGateway + ?Sized> StateGateway for &G {
    fn load(&self) -> RecordStore {
        (**self).load()
    }

    fn save(&self, store: &RecordStore) -> StorageResult<()> {
        (**self).save(store)
    }
}

/// Loads state and inserts the seed courses when no course exists yet.
///
/// # Side effects
/// - Saves immediately when seeding happened.
pub fn bootstrap<G: StateGateway>(gateway: &G) -> StorageResult<RecordStore> {
    let mut store = gateway.load();
    if !store.courses().is_empty() {
        return Ok(store);
    }

    for (id, name) in (1..).zip(SEED_COURSE_NAMES) {
        store.append_course(Course {
            id,
            name: name.to_string(),
        });
    }
    gateway.save(&store)?;
    info!(
        "event=seed_courses module=storage status=ok count={}",
        SEED_COURSE_NAMES.len()
    );
    Ok(store)
}

pub(crate) fn encode_state(store: &RecordStore) -> StorageResult<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

pub(crate) fn decode_state(text: &str) -> Result<RecordStore, DataCorruption> {
    let store: RecordStore =
        serde_json::from_str(text).map_err(|err| DataCorruption::new(err.to_string()))?;
    check_integrity(&store)?;
    Ok(store)
}

/// Decodes persisted text, logging and discarding anything unusable.
pub(crate) fn decode_or_empty(text: &str, source: &str) -> RecordStore {
    match decode_state(text) {
        Ok(store) => {
            info!(
                "event=state_load module=storage status=ok source={} courses={} assignments={}",
                source,
                store.courses().len(),
                store.assignments().len()
            );
            store
        }
        Err(err) => {
            warn!(
                "event=state_load module=storage status=fallback source={} error_code=data_corruption error={}",
                source, err
            );
            RecordStore::new()
        }
    }
}

fn check_integrity(store: &RecordStore) -> Result<(), DataCorruption> {
    let mut course_ids = HashSet::new();
    let mut course_names = HashSet::new();
    for course in store.courses() {
        if !is_valid_id(course.id) || !course_ids.insert(course.id) {
            return Err(DataCorruption::new(format!(
                "invalid or duplicate course id {}",
                course.id
            )));
        }
        let normalized = normalize_course_name(&course.name);
        if normalized.is_empty() || !course_names.insert(normalized) {
            return Err(DataCorruption::new(format!(
                "empty or duplicate name for course {}",
                course.id
            )));
        }
    }

    let mut assignment_ids = HashSet::new();
    for assignment in store.assignments() {
        if !is_valid_id(assignment.id) || !assignment_ids.insert(assignment.id) {
            return Err(DataCorruption::new(format!(
                "invalid or duplicate assignment id {}",
                assignment.id
            )));
        }
        assignment.validate().map_err(|err| {
            DataCorruption::new(format!("assignment {}: {err}", assignment.id))
        })?;
    }
    Ok(())
}

fn is_valid_id(id: u32) -> bool {
    (1..=MAX_RECORD_ID).contains(&id)
}
