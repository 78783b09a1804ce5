//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type RosterResult<T> = Result<T, RosterError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of user input and roster
/// invariants. Soft per-record conflicts (e.g. "already marked") are **not**
/// errors; they ride in the batch report instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// An index token was neither a positive integer nor a `lo:hi` range.
    #[error("invalid index token: '{token}' (expected a positive integer or a range X:Y with X <= Y)")]
    ParseIndex { token: String },

    /// Command arguments did not match the command's grammar.
    #[error("invalid command format\n{usage}")]
    ParseCommand { usage: String },

    /// One or more resolved positions exceed the current displayed list.
    ///
    /// `max_one_based` is the largest index the user may reference right now.
    #[error("the student index provided is invalid, index must be between 1 and {max_one_based} (inclusive)")]
    InvalidStudentIndex { max_one_based: usize },

    /// Exercise ordinal outside the tracked range.
    #[error("the exercise index provided is invalid, index must be between 0 to 9 (inclusive)")]
    InvalidExerciseIndex,

    /// A field value failed validation (e.g. malformed student id).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An add collided with an existing student identity.
    #[error("a student with id {id} already exists in the roster")]
    DuplicateStudent { id: String },

    /// An identity-keyed lookup found no matching student.
    #[error("student not found")]
    NotFound,
}

impl RosterError {
    pub fn parse_index(token: impl Into<String>) -> Self {
        Self::ParseIndex { token: token.into() }
    }

    pub fn parse_command(usage: impl Into<String>) -> Self {
        Self::ParseCommand { usage: usage.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_student(id: impl Into<String>) -> Self {
        Self::DuplicateStudent { id: id.into() }
    }
}
