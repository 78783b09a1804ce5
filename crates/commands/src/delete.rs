//! Delete a student by displayed index.

use tracing::info;

use classtrack_core::{Entity, Index, IndexSet, RosterResult};
use classtrack_roster::Roster;

use crate::command::Command;
use crate::result::CommandResult;

/// Removes the student at one displayed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub fn new(target: Index) -> Self {
        Self { target }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult> {
        IndexSet::single(self.target).validate_against(roster.displayed_len())?;
        let target = roster.displayed()[self.target.zero_based()].clone();
        let removed = roster.remove_student(target.id())?;
        info!(id = %removed.student_id(), "delete executed");
        Ok(CommandResult::new(format!("Deleted student: {}", removed.name_and_id())))
    }
}
