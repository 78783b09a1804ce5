//! Roster domain module: student records and the roster collection.
//!
//! This crate contains the record model (immutable `Student` values with
//! validated fields and a fixed-size exercise tracker) and the `Roster`
//! collection that separates the backing store from the displayed projection.
//! Pure domain logic; no IO, no HTTP, no storage.

pub mod exercises;
pub mod fields;
pub mod roster;
pub mod student;

pub use exercises::{ExerciseStatus, ExerciseTracker, MarkError, NUMBER_OF_EXERCISES};
pub use fields::{Email, GithubUsername, Name, Phone, StudentId, Tag};
pub use roster::{Roster, SortOrder};
pub use student::Student;
