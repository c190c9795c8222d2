//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record rendered by list and detail views.
//! - Provide field-level validation for dataset construction.
//!
//! # Invariants
//! - `id` is unique within a directory and never reused.
//! - `phone` is kept exactly as stored; no normalization is applied.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a contact.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = String;

/// Validation error for contacts, groups and directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required contact field is blank.
    BlankField {
        contact_id: ContactId,
        field: &'static str,
    },
    /// A group title is blank.
    BlankGroupTitle,
    /// Contact `group` label does not match its enclosing group title.
    GroupMismatch {
        contact_id: ContactId,
        group: String,
        title: String,
    },
    /// The same contact id appears more than once.
    DuplicateId(ContactId),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { contact_id, field } => {
                write!(f, "contact `{contact_id}` has blank `{field}`")
            }
            Self::BlankGroupTitle => write!(f, "group title cannot be blank"),
            Self::GroupMismatch {
                contact_id,
                group,
                title,
            } => write!(
                f,
                "contact `{contact_id}` is labeled `{group}` but listed under `{title}`"
            ),
            Self::DuplicateId(contact_id) => write!(f, "duplicate contact id `{contact_id}`"),
        }
    }
}

impl Error for ContactValidationError {}

/// Single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    /// Display name. Matched case-insensitively by search.
    pub name: String,
    /// Phone digits as stored. Matched literally by search.
    pub phone: String,
    /// Label of the group this contact is listed under.
    pub group: String,
}

impl Contact {
    pub fn new(
        id: impl Into<ContactId>,
        name: impl Into<String>,
        phone: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            group: group.into(),
        }
    }

    /// Checks that all fields are non-blank.
    ///
    /// # Errors
    /// - Returns `BlankField` naming the first blank field. A blank `id` is
    ///   reported with an empty `contact_id`.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let fields = [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("group", self.group.as_str()),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactValidationError::BlankField {
                    contact_id: self.id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// Read-only detail projection of a selected contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub name: String,
    pub phone: String,
    pub group: String,
}

impl From<&Contact> for ContactDetail {
    fn from(value: &Contact) -> Self {
        Self {
            name: value.name.clone(),
            phone: value.phone.clone(),
            group: value.group.clone(),
        }
    }
}
