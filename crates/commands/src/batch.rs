//! Multi-index batch application: validate everything, then apply per record.
//!
//! The template behind every command that targets "students 1 through 5".
//! Varying per-record logic is passed in as a plain function rather than a
//! subclass hook, and the outcome accumulation is part of the return value,
//! so the mechanism stays referentially transparent and testable on its own.

use tracing::debug;

use classtrack_core::{Entity, IndexSet, RosterError, RosterResult};
use classtrack_roster::{Roster, Student};

/// What the per-record action decided for one target.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchDecision {
    /// Install this record in place of the current one.
    Replace(Student),
    /// Leave the record untouched and report it as rejected.
    Reject,
}

/// Aggregated per-record outcomes of one batch, in processing order
/// (ascending resolved position). Request-scoped: consumed to build the
/// feedback message, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub updated: Vec<Student>,
    pub rejected: Vec<Student>,
}

/// Apply `action` to every record `targets` resolves to in the currently
/// displayed list.
///
/// Validation is all-or-nothing: the entire index set is checked against the
/// displayed list size before the first record is touched, so an
/// out-of-range member can never leave the batch half-applied. Application
/// is per-record: a rejection never blocks the remaining targets.
///
/// Replacements are written back immediately (identity-keyed), so an action
/// that looks at a later target observes earlier writes within the same
/// batch.
///
/// Actions should not change projection membership: a replacement that stops
/// matching the active filter shrinks the displayed list mid-batch, and any
/// later position that falls off the end surfaces as [`RosterError::NotFound`].
pub fn apply_to_targets<F>(
    roster: &mut Roster,
    targets: &IndexSet,
    mut action: F,
) -> RosterResult<BatchReport>
where
    F: FnMut(&Student) -> RosterResult<BatchDecision>,
{
    targets.validate_against(roster.displayed_len())?;

    let mut report = BatchReport::default();
    for position in targets.iter() {
        // Re-read the projection each turn; earlier replacements in this
        // batch are visible here.
        let current = roster
            .displayed()
            .get(position.zero_based())
            .cloned()
            .ok_or(RosterError::NotFound)?;
        match action(&current)? {
            BatchDecision::Replace(updated) => {
                roster.replace_student(current.id(), updated.clone())?;
                report.updated.push(updated);
            }
            BatchDecision::Reject => report.rejected.push(current),
        }
    }
    debug!(
        targets = targets.len(),
        updated = report.updated.len(),
        rejected = report.rejected.len(),
        "batch applied"
    );
    Ok(report)
}
