//! The command abstraction.

use classtrack_core::RosterResult;
use classtrack_roster::Roster;

use crate::result::CommandResult;

/// A user operation against the roster.
///
/// Commands represent **intent**: a request to change (or inspect) the
/// roster. They are transient, carry all their parameters, and are executed
/// exactly once, one at a time, against the single in-memory collection. The
/// `&mut Roster` receiver is the exclusive-access discipline: no other
/// command can run while one executes.
pub trait Command {
    /// Execute against the roster, returning aggregated user feedback.
    ///
    /// Hard failures (bad indices, duplicate identities) must surface before
    /// the first write; soft per-record conflicts belong in the feedback
    /// message, not in the error channel.
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult>;
}
