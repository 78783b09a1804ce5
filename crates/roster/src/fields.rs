//! Validated field value objects for student records.
//!
//! Each newtype validates on construction and is immutable afterwards, so a
//! `Student` built from these can never hold a malformed field.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use classtrack_core::{RosterError, RosterResult};

/// Student identifier: `A` followed by 7 digits and an uppercase letter.
///
/// This is the identity key: two records with the same id are the same
/// student regardless of every other field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(RosterError::validation(format!(
                "student id '{value}' must be 'A' followed by 7 digits and an uppercase letter"
            )))
        }
    }

    fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 9
            && bytes[0] == b'A'
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display name: non-empty, alphanumeric words separated by spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        let valid = !value.trim().is_empty()
            && value.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if valid {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(RosterError::validation(
                "name must be non-empty and contain only alphanumeric characters and spaces",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        if value.len() >= 3 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(RosterError::validation(
                "phone must contain only digits and be at least 3 digits long",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address: `local@domain`, both parts non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        let valid = matches!(
            value.split_once('@'),
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.starts_with('.')
        );
        if valid {
            Ok(Self(value))
        } else {
            Err(RosterError::validation("email must be of the form local@domain"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// GitHub username: alphanumeric or hyphen, no leading/trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GithubUsername(String);

impl GithubUsername {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        let valid = !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if valid {
            Ok(Self(value))
        } else {
            Err(RosterError::validation(
                "github username must be alphanumeric with interior hyphens only",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tag: one alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> RosterResult<Self> {
        let value = value.into();
        if !value.is_empty() && value.chars().all(char::is_alphanumeric) {
            Ok(Self(value))
        } else {
            Err(RosterError::validation("tag must be one alphanumeric word"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_display_and_fromstr {
    ($($t:ty),+) => {
        $(
            impl core::fmt::Display for $t {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $t {
                type Err = RosterError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }
        )+
    };
}

impl_display_and_fromstr!(StudentId, Name, Phone, Email, GithubUsername, Tag);
