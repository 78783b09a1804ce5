//! Command layer: user operations against the roster.
//!
//! Commands are deterministic functions of (roster state, parameters). Each
//! validates its input fully before the first write, applies per-record
//! changes through identity-keyed replacement, and reports an aggregated
//! feedback message. The multi-index batch machinery lives in [`batch`];
//! [`mark_exercise`] is its primary instantiation.

pub mod add;
pub mod batch;
pub mod command;
pub mod delete;
pub mod edit;
pub mod mark_exercise;
pub mod parse;
pub mod result;
pub mod sort;

pub use add::AddCommand;
pub use batch::{BatchDecision, BatchReport, apply_to_targets};
pub use command::Command;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, StudentEdits};
pub use mark_exercise::MarkExerciseCommand;
pub use parse::parse_mark_exercise;
pub use result::CommandResult;
pub use sort::SortCommand;
