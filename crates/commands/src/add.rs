//! Add a student to the roster.

use tracing::info;

use classtrack_core::RosterResult;
use classtrack_roster::{Roster, Student};

use crate::command::Command;
use crate::result::CommandResult;

/// Adds one student; a duplicate identity is a hard error.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    student: Student,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub fn new(student: Student) -> Self {
        Self { student }
    }
}

impl Command for AddCommand {
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult> {
        roster.add_student(self.student.clone())?;
        info!(id = %self.student.student_id(), "add executed");
        Ok(CommandResult::new(format!("New student added: {}", self.student.name_and_id())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classtrack_core::RosterError;
    use classtrack_roster::{Email, GithubUsername, Name, Phone, StudentId, Tag};
    use std::collections::BTreeSet;

    fn student(id: &str, name: &str) -> Student {
        Student::new(
            StudentId::new(id).unwrap(),
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("someone@example.com").unwrap(),
            GithubUsername::new("someone").unwrap(),
            BTreeSet::from([Tag::new("cs2103").unwrap()]),
        )
    }

    #[test]
    fn adds_a_new_student() {
        let mut roster = Roster::new();
        let result = AddCommand::new(student("A0000001X", "Alice Pauline"))
            .execute(&mut roster)
            .unwrap();
        assert_eq!(result.feedback(), "New student added: Alice Pauline (A0000001X)");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut roster = Roster::new();
        roster.add_student(student("A0000001X", "Alice Pauline")).unwrap();
        let err = AddCommand::new(student("A0000001X", "Someone Else"))
            .execute(&mut roster)
            .unwrap_err();
        assert_eq!(err, RosterError::duplicate_student("A0000001X"));
        assert_eq!(roster.len(), 1);
    }
}
