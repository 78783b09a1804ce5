//! Fixed-size exercise completion tracking.

use serde::{Deserialize, Serialize};

/// Number of tracked exercises per student. The tracker array is always
/// exactly this long; there are no partial arrays.
pub const NUMBER_OF_EXERCISES: usize = 10;

/// Completion status of one exercise slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStatus {
    Done,
    NotDone,
}

impl ExerciseStatus {
    /// User-facing rendering used in command feedback.
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseStatus::Done => "done",
            ExerciseStatus::NotDone => "not done",
        }
    }
}

/// Why a mark attempt produced no new tracker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkError {
    /// Ordinal outside `0..NUMBER_OF_EXERCISES`.
    OutOfRange,
    /// The slot already holds the requested status. A soft conflict: the
    /// caller reports it, never errors on it.
    AlreadyMarked,
}

/// Immutable exercise-status array of length [`NUMBER_OF_EXERCISES`].
///
/// "Mutation" returns a new tracker; the original is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTracker {
    statuses: [ExerciseStatus; NUMBER_OF_EXERCISES],
}

impl ExerciseTracker {
    /// Fresh tracker with every exercise not done.
    pub fn new() -> Self {
        Self { statuses: [ExerciseStatus::NotDone; NUMBER_OF_EXERCISES] }
    }

    pub fn from_statuses(statuses: [ExerciseStatus; NUMBER_OF_EXERCISES]) -> Self {
        Self { statuses }
    }

    pub fn status_of(&self, ordinal: usize) -> Option<ExerciseStatus> {
        self.statuses.get(ordinal).copied()
    }

    pub fn statuses(&self) -> &[ExerciseStatus; NUMBER_OF_EXERCISES] {
        &self.statuses
    }

    /// New tracker with `ordinal` set to `status`.
    ///
    /// Setting a slot to the status it already holds is a conflict, not a
    /// silent no-op.
    pub fn with_status(&self, ordinal: usize, status: ExerciseStatus) -> Result<Self, MarkError> {
        match self.status_of(ordinal) {
            None => Err(MarkError::OutOfRange),
            Some(current) if current == status => Err(MarkError::AlreadyMarked),
            Some(_) => {
                let mut statuses = self.statuses;
                statuses[ordinal] = status;
                Ok(Self { statuses })
            }
        }
    }
}

impl Default for ExerciseTracker {
    fn default() -> Self {
        Self::new()
    }
}
