//! Mark an exercise as done / not done for one or more students.

use tracing::info;

use classtrack_core::{IndexSet, RosterError, RosterResult};
use classtrack_roster::{ExerciseStatus, MarkError, NUMBER_OF_EXERCISES, Roster, Student};

use crate::batch::{BatchDecision, BatchReport, apply_to_targets};
use crate::command::Command;
use crate::result::CommandResult;

/// Marks a specific exercise with a given status for every student the index
/// set resolves to in the last listing.
///
/// Students whose slot already holds the requested status are folded into an
/// "already marked" line of the feedback instead of failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkExerciseCommand {
    targets: IndexSet,
    /// Zero-based exercise ordinal.
    exercise: usize,
    status: ExerciseStatus,
}

impl MarkExerciseCommand {
    pub const COMMAND_WORD: &'static str = "marke";

    pub const MESSAGE_USAGE: &'static str = "marke: Marks the exercise status of one or more students identified by their index numbers in the last listing.\n\
         Parameters: INDEX (must be a positive integer or range X:Y) ei/EXERCISE_INDEX s/STATUS (y or n)\n\
         Example: marke 1:3 ei/1 s/y\n\
         Example: marke 2 ei/3 s/y";

    pub fn new(targets: IndexSet, exercise: usize, status: ExerciseStatus) -> Self {
        Self { targets, exercise, status }
    }

    fn apply_to_student(&self, student: &Student) -> RosterResult<BatchDecision> {
        match student.exercise_tracker().with_status(self.exercise, self.status) {
            Ok(tracker) => Ok(BatchDecision::Replace(student.with_exercise_tracker(tracker))),
            Err(MarkError::AlreadyMarked) => Ok(BatchDecision::Reject),
            // ordinal is validated before the batch starts
            Err(MarkError::OutOfRange) => Err(RosterError::InvalidExerciseIndex),
        }
    }

    fn build_message(&self, report: &BatchReport) -> String {
        let action = self.status.as_str();
        let mut message = String::new();

        if !report.rejected.is_empty() {
            message.push_str(&format!(
                "Exercise {} already marked as {} for {}",
                self.exercise,
                action,
                joined_names(&report.rejected)
            ));
        }

        if !report.updated.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!(
                "Exercise {} marked as {} for: {}",
                self.exercise,
                action,
                joined_names(&report.updated)
            ));
        }

        message
    }
}

impl Command for MarkExerciseCommand {
    fn execute(&self, roster: &mut Roster) -> RosterResult<CommandResult> {
        // Exercise ordinal is checked before any index resolution, so a bad
        // ordinal wins over a bad student index.
        if self.exercise >= NUMBER_OF_EXERCISES {
            return Err(RosterError::InvalidExerciseIndex);
        }

        let report = apply_to_targets(roster, &self.targets, |s| self.apply_to_student(s))?;
        info!(
            exercise = self.exercise,
            status = self.status.as_str(),
            updated = report.updated.len(),
            already_marked = report.rejected.len(),
            "marke executed"
        );
        Ok(CommandResult::new(self.build_message(&report)))
    }
}

fn joined_names(students: &[Student]) -> String {
    students.iter().map(Student::name_and_id).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn typical_roster() -> Roster {
        Roster::from_students(vec![
            student("A0000001X", "Alice Pauline"),
            student("A0000002Y", "Benson Meier"),
            student("A0000003Z", "Carl Kurz"),
        ])
        .unwrap()
    }

    fn premark(roster: &mut Roster, position: usize, exercise: usize) {
        let target = roster.displayed()[position].clone();
        let tracker =
            target.exercise_tracker().with_status(exercise, ExerciseStatus::Done).unwrap();
        let id = target.student_id().clone();
        roster.replace_student(&id, target.with_exercise_tracker(tracker)).unwrap();
    }

    #[test]
    fn marks_a_single_student_done() {
        let mut roster = typical_roster();
        let cmd = MarkExerciseCommand::new(
            IndexSet::resolve("2").unwrap(),
            3,
            ExerciseStatus::Done,
        );

        let result = cmd.execute(&mut roster).unwrap();

        assert_eq!(
            result.feedback(),
            "Exercise 3 marked as done for: Benson Meier (A0000002Y)"
        );
        assert_eq!(
            roster.displayed()[1].exercise_tracker().status_of(3),
            Some(ExerciseStatus::Done)
        );
    }

    #[test]
    fn batch_reports_already_marked_and_updated_separately() {
        let mut roster = typical_roster();
        premark(&mut roster, 1, 0);

        let cmd = MarkExerciseCommand::new(
            IndexSet::resolve("1:3").unwrap(),
            0,
            ExerciseStatus::Done,
        );
        let result = cmd.execute(&mut roster).unwrap();

        assert_eq!(
            result.feedback(),
            "Exercise 0 already marked as done for Benson Meier (A0000002Y)\n\
             Exercise 0 marked as done for: Alice Pauline (A0000001X), Carl Kurz (A0000003Z)"
        );
        // roster updated only for 1 and 3; 2 untouched beyond the premark
        for (i, expected) in [true, true, true].iter().enumerate() {
            assert_eq!(
                roster.displayed()[i].exercise_tracker().status_of(0)
                    == Some(ExerciseStatus::Done),
                *expected,
                "student {}",
                i + 1
            );
        }
    }

    #[test]
    fn remarking_same_status_leaves_record_value_equal() {
        let mut roster = typical_roster();
        let cmd =
            MarkExerciseCommand::new(IndexSet::resolve("1").unwrap(), 5, ExerciseStatus::Done);
        cmd.execute(&mut roster).unwrap();
        let after_first = roster.displayed()[0].clone();

        let result = cmd.execute(&mut roster).unwrap();

        assert_eq!(roster.displayed()[0], after_first);
        assert_eq!(
            result.feedback(),
            "Exercise 5 already marked as done for Alice Pauline (A0000001X)"
        );
    }

    #[test]
    fn marking_opposite_status_changes_only_that_slot() {
        let mut roster = typical_roster();
        premark(&mut roster, 0, 7);
        let before = roster.displayed()[0].clone();

        let cmd =
            MarkExerciseCommand::new(IndexSet::resolve("1").unwrap(), 7, ExerciseStatus::NotDone);
        cmd.execute(&mut roster).unwrap();

        let after = roster.displayed()[0].clone();
        assert!(before.is_same_student(&after));
        assert_ne!(before, after);
        assert_eq!(after.exercise_tracker().status_of(7), Some(ExerciseStatus::NotDone));
        assert_eq!(after.with_exercise_tracker(before.exercise_tracker().clone()), before);
    }

    #[test]
    fn out_of_range_exercise_fails_before_index_validation() {
        let mut roster = typical_roster();
        let before = roster.clone();
        // student index is out of range too; the exercise error must win
        let cmd = MarkExerciseCommand::new(
            IndexSet::resolve("7:9").unwrap(),
            NUMBER_OF_EXERCISES,
            ExerciseStatus::Done,
        );

        let err = cmd.execute(&mut roster).unwrap_err();

        assert_eq!(err, RosterError::InvalidExerciseIndex);
        assert_eq!(roster, before);
    }

    #[test]
    fn out_of_range_student_index_reports_one_based_bound() {
        let mut roster = typical_roster();
        let before = roster.clone();
        let cmd =
            MarkExerciseCommand::new(IndexSet::resolve("4").unwrap(), 0, ExerciseStatus::Done);

        let err = cmd.execute(&mut roster).unwrap_err();

        assert_eq!(err, RosterError::InvalidStudentIndex { max_one_based: 3 });
        assert_eq!(roster, before);
    }

    #[test]
    fn equality_is_structural_on_targets_exercise_and_status() {
        let a = MarkExerciseCommand::new(IndexSet::resolve("1:3").unwrap(), 2, ExerciseStatus::Done);
        let b = MarkExerciseCommand::new(IndexSet::resolve("1:3").unwrap(), 2, ExerciseStatus::Done);
        let c = MarkExerciseCommand::new(IndexSet::resolve("1:3").unwrap(), 2, ExerciseStatus::NotDone);
        let d = MarkExerciseCommand::new(IndexSet::resolve("1:2").unwrap(), 2, ExerciseStatus::Done);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: executing the same mark twice reports every target
            /// as already marked the second time and changes nothing.
            #[test]
            fn remark_is_reported_not_applied(
                lo in 1usize..3,
                span in 0usize..2,
                exercise in 0usize..NUMBER_OF_EXERCISES,
            ) {
                let hi = lo + span;
                let mut roster = typical_roster();
                let cmd = MarkExerciseCommand::new(
                    IndexSet::resolve(&format!("{lo}:{hi}")).unwrap(),
                    exercise,
                    ExerciseStatus::Done,
                );

                cmd.execute(&mut roster).unwrap();
                let after_first = roster.clone();
                let result = cmd.execute(&mut roster).unwrap();

                prop_assert_eq!(&roster, &after_first);
                let expected_prefix =
                    format!("Exercise {exercise} already marked as done for ");
                prop_assert!(result.feedback().starts_with(&expected_prefix));
                prop_assert!(!result.feedback().contains("marked as done for:"));
            }
        }
    }
}
