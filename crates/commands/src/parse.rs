//! Argument parsing for the mark-exercise command.
//!
//! Grammar: `INDEX[:INDEX] ei/EXERCISE_INDEX s/STATUS`, e.g. `1:3 ei/1 s/y`.
//! The outer command-word tokenizer is the host application's concern; this
//! covers only the `marke` argument grammar.

use classtrack_core::{IndexSet, RosterError, RosterResult};
use classtrack_roster::ExerciseStatus;

use crate::mark_exercise::MarkExerciseCommand;

/// Parse the arguments following the `marke` command word.
///
/// The `ei/` token is one-based like every other user-facing index
/// (`ei/1`..`ei/10`); it maps onto the zero-based exercise ordinal the
/// command and its feedback use. `ei/0` is a parse failure; a too-large
/// token parses fine and surfaces as the exercise-index error at execution
/// time.
pub fn parse_mark_exercise(args: &str) -> RosterResult<MarkExerciseCommand> {
    let usage_err = || RosterError::parse_command(MarkExerciseCommand::MESSAGE_USAGE);

    let mut index_token: Option<&str> = None;
    let mut exercise_token: Option<&str> = None;
    let mut status_token: Option<&str> = None;

    for token in args.split_whitespace() {
        if let Some(rest) = token.strip_prefix("ei/") {
            if exercise_token.replace(rest).is_some() {
                return Err(usage_err());
            }
        } else if let Some(rest) = token.strip_prefix("s/") {
            if status_token.replace(rest).is_some() {
                return Err(usage_err());
            }
        } else if index_token.replace(token).is_some() {
            return Err(usage_err());
        }
    }

    let targets = IndexSet::resolve(index_token.ok_or_else(usage_err)?)?;
    let exercise_one_based: usize = exercise_token
        .ok_or_else(usage_err)?
        .parse()
        .map_err(|_| usage_err())?;
    let exercise = exercise_one_based.checked_sub(1).ok_or_else(usage_err)?;
    let status = match status_token.ok_or_else(usage_err)? {
        "y" => ExerciseStatus::Done,
        "n" => ExerciseStatus::NotDone,
        _ => return Err(usage_err()),
    };

    Ok(MarkExerciseCommand::new(targets, exercise, status))
}
