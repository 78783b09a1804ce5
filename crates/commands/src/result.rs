//! Command feedback value object.

use serde::{Deserialize, Serialize};

/// The user-visible outcome of one executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self { feedback: feedback.into() }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl core::fmt::Display for CommandResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.feedback)
    }
}
