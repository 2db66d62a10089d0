//! Error type shared by course, assignment and grade use-cases.

use crate::model::course::CourseId;
use crate::model::validation::ValidationError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Raw input failed boundary validation.
    Validation(ValidationError),
    /// Referenced course id does not exist.
    UnknownCourse(CourseId),
    /// Mutation could not be persisted.
    Storage(StorageError),
    /// No id below `MAX_RECORD_ID` is left for a new record.
    IdSpaceExhausted,
}

impl ServiceError {
    /// Returns whether the terminal layer may re-prompt and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownCourse(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCourse(id) => write!(f, "course not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted => write!(f, "no record ids left to allocate"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnknownCourse(_) => None,
            Self::Storage(err) => Some(err),
            Self::IdSpaceExhausted => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
