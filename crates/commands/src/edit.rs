//! Edit a student's contact fields.
//!
//! Editing never mutates in place: unset fields are copied through from the
//! current record, a new `Student` is constructed, and the old record is
//! replaced by identity. The student id and the exercise tracker always
//! carry over unchanged.

use std::collections::BTreeSet;

use tracing::info;

use classtrack_core::{Entity, Index, IndexSet, RosterError, RosterResult};
use classtrack_roster::{Email, GithubUsername, Name, Phone, Roster, Student, Tag};

use crate::command::Command;
use crate::result::CommandResult;

/// Optional replacement values; `None` keeps the existing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEdits {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub github_username: Option<GithubUsername>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl StudentEdits {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.github_username.is_some()
            || self.tags.is_some()
    }

    fn merged_into(&self, current: &Student) -> Student {
        Student::with_tracker(
            current.student_id().clone(),
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.phone.clone().unwrap_or_else(|| current.phone().clone()),
            self.email.clone().unwrap_or_else(|| current.email().clone()),
            self.github_username.clone().unwrap_or_else(|| current.github_username().clone()),
            self.tags.clone().unwrap_or_else(|| current.tags().clone()),
            current.exercise_tracker().clone(),
        )
    }
}

/// Replaces the record at one displayed position with an edited copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    target: Index,
    edits: StudentEdits,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub fn new(target: Index, edits: StudentEdits) -> Self {
        Self { target, edits }
    }
}

impl Command for EditCommand {
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult> {
        if !self.edits.is_any_field_edited() {
            return Err(RosterError::validation("at least one field to edit must be provided"));
        }
        IndexSet::single(self.target).validate_against(roster.displayed_len())?;
        let current = roster.displayed()[self.target.zero_based()].clone();
        let edited = self.edits.merged_into(&current);
        roster.replace_student(current.id(), edited.clone())?;
        info!(id = %edited.student_id(), "edit executed");
        Ok(CommandResult::new(format!("Edited student: {}", edited.name_and_id())))
    }
}
