//! The roster collection: backing store plus displayed projection.
//!
//! Two ownership layers. The backing store is the source of truth, keyed by
//! student identity. The displayed list is a pure projection (active filter,
//! then active sort) recomputed on demand; command index positions are always
//! relative to the projection, never the backing store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use classtrack_core::{Entity, RosterError, RosterResult};

use crate::fields::StudentId;
use crate::student::Student;

/// Ordering applied to the displayed projection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    ByName,
    ById,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::ByName => "name",
            SortOrder::ById => "student id",
        }
    }
}

/// The mutable in-memory collection commands read from and write into.
///
/// Exactly one command runs at a time against a roster; the executing command
/// holds exclusive access through `&mut` for its whole duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
    filter: Option<String>,
    sort: Option<SortOrder>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from pre-existing records (the load path). Duplicate
    /// identities are rejected.
    pub fn from_students(students: Vec<Student>) -> RosterResult<Self> {
        let mut roster = Self::new();
        for student in students {
            roster.add_student(student)?;
        }
        Ok(roster)
    }

    /// Number of records in the backing store (not the projection).
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.students.iter().any(|s| s.id() == id)
    }

    /// All records in backing-store order, for persistence collaborators.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Append a new record; the identity must be free.
    pub fn add_student(&mut self, student: Student) -> RosterResult<()> {
        if self.contains(student.id()) {
            return Err(RosterError::duplicate_student(student.id().as_str()));
        }
        debug!(id = %student.student_id(), "roster: add");
        self.students.push(student);
        Ok(())
    }

    /// Identity-keyed replace: install `updated` where `id` currently lives.
    ///
    /// The record keeps its position in the backing store, so displayed
    /// positions stay stable across a replace. If `updated` carries a
    /// different identity, that identity must be free.
    pub fn replace_student(&mut self, id: &StudentId, updated: Student) -> RosterResult<()> {
        let position = self
            .students
            .iter()
            .position(|s| s.id() == id)
            .ok_or(RosterError::NotFound)?;
        if updated.id() != id && self.contains(updated.id()) {
            return Err(RosterError::duplicate_student(updated.id().as_str()));
        }
        debug!(id = %id, "roster: replace");
        self.students[position] = updated;
        Ok(())
    }

    /// Identity-keyed removal, returning the removed record.
    pub fn remove_student(&mut self, id: &StudentId) -> RosterResult<Student> {
        let position = self
            .students
            .iter()
            .position(|s| s.id() == id)
            .ok_or(RosterError::NotFound)?;
        debug!(id = %id, "roster: remove");
        Ok(self.students.remove(position))
    }

    /// Restrict the projection to names containing `keyword`
    /// (case-insensitive).
    pub fn set_filter(&mut self, keyword: impl Into<String>) {
        self.filter = Some(keyword.into());
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Set the projection ordering.
    pub fn sort_by(&mut self, order: SortOrder) {
        self.sort = Some(order);
    }

    /// The filtered, sorted view the user is currently looking at.
    ///
    /// Recomputed from the backing store on every call; command index
    /// positions resolve against exactly this sequence.
    pub fn displayed(&self) -> Vec<Student> {
        let mut view: Vec<Student> = match &self.filter {
            None => self.students.clone(),
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                self.students
                    .iter()
                    .filter(|s| s.name().as_str().to_lowercase().contains(&keyword))
                    .cloned()
                    .collect()
            }
        };
        match self.sort {
            None => {}
            Some(SortOrder::ByName) => view.sort_by(|a, b| a.name().cmp(b.name())),
            Some(SortOrder::ById) => view.sort_by(|a, b| a.student_id().cmp(b.student_id())),
        }
        view
    }

    pub fn displayed_len(&self) -> usize {
        match &self.filter {
            None => self.students.len(),
            Some(_) => self.displayed().len(),
        }
    }
}
