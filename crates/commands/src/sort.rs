//! Sort the displayed list.

use tracing::info;

use classtrack_core::RosterResult;
use classtrack_roster::{Roster, SortOrder};

use crate::command::Command;
use crate::result::CommandResult;

/// Sets the ordering of the displayed projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    order: SortOrder,
}

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";

    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }
}

impl Command for SortCommand {
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult> {
        roster.sort_by(self.order);
        info!(order = self.order.as_str(), "sort executed");
        Ok(CommandResult::new(format!(
            "Sorted {} students by {}",
            roster.displayed_len(),
            self.order.as_str()
        )))
    }
}
