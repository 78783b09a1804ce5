//! The student record: one roster entry, immutable once constructed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use classtrack_core::Entity;

use crate::exercises::ExerciseTracker;
use crate::fields::{Email, GithubUsername, Name, Phone, StudentId, Tag};

/// One student's stored data.
///
/// Identity-equal on [`StudentId`] alone (see [`Student::is_same_student`]),
/// value-equal on all fields (derived `PartialEq`). Every edit constructs a
/// new `Student`; fields never mutate in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    student_id: StudentId,
    name: Name,
    phone: Phone,
    email: Email,
    github_username: GithubUsername,
    tags: BTreeSet<Tag>,
    exercises: ExerciseTracker,
}

impl Student {
    pub fn new(
        student_id: StudentId,
        name: Name,
        phone: Phone,
        email: Email,
        github_username: GithubUsername,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            student_id,
            name,
            phone,
            email,
            github_username,
            tags,
            exercises: ExerciseTracker::new(),
        }
    }

    /// Build a student with a specific exercise tracker (roster load,
    /// copy-edit paths).
    pub fn with_tracker(
        student_id: StudentId,
        name: Name,
        phone: Phone,
        email: Email,
        github_username: GithubUsername,
        tags: BTreeSet<Tag>,
        exercises: ExerciseTracker,
    ) -> Self {
        Self { student_id, name, phone, email, github_username, tags, exercises }
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn github_username(&self) -> &GithubUsername {
        &self.github_username
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn exercise_tracker(&self) -> &ExerciseTracker {
        &self.exercises
    }

    /// New record identical to this one except for the exercise tracker.
    pub fn with_exercise_tracker(&self, exercises: ExerciseTracker) -> Self {
        Self {
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            github_username: self.github_username.clone(),
            tags: self.tags.clone(),
            exercises,
        }
    }

    /// Identity equality: same student id.
    ///
    /// A weaker notion than `==`, which compares every field. Domain-named
    /// front for [`Entity::is_same`].
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.is_same(other)
    }

    /// Display form used in command feedback, e.g. `Alice Pauline (A0123456X)`.
    pub fn name_and_id(&self) -> String {
        format!("{} ({})", self.name, self.student_id)
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        &self.student_id
    }
}
