//! Grouped directory model.
//!
//! # Responsibility
//! - Hold ordered groups of contacts in the section shape list UIs render.
//! - Provide lookup helpers used by selection and tests.
//!
//! # Invariants
//! - Group order and contact order are never reordered by helpers.
//! - A validated directory has unique contact ids and matching group labels.

use crate::model::contact::{Contact, ContactValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named, ordered collection of contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub title: String,
    /// Serialized as `data` to match the section list shape.
    #[serde(rename = "data")]
    pub contacts: Vec<Contact>,
}

impl Group {
    pub fn new(title: impl Into<String>, contacts: Vec<Contact>) -> Self {
        Self {
            title: title.into(),
            contacts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Validates the title and every contact listed in this group.
    ///
    /// # Errors
    /// - `BlankGroupTitle` when the title is blank.
    /// - Any contact-level error from [`Contact::validate`].
    /// - `GroupMismatch` when a contact's label differs from the title.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.title.trim().is_empty() {
            return Err(ContactValidationError::BlankGroupTitle);
        }
        for contact in &self.contacts {
            contact.validate()?;
            if contact.group != self.title {
                return Err(ContactValidationError::GroupMismatch {
                    contact_id: contact.id.clone(),
                    group: contact.group.clone(),
                    title: self.title.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Full ordered sequence of groups.
///
/// Serialized as a bare array of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    groups: Vec<Group>,
}

impl Directory {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Returns a directory with zero groups.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns whether the directory has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn contact_count(&self) -> usize {
        self.groups.iter().map(|group| group.contacts.len()).sum()
    }

    /// Iterates all contacts in display order (group by group).
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.groups.iter().flat_map(|group| group.contacts.iter())
    }

    /// Finds one contact by stable ID.
    pub fn find_contact(&self, id: &str) -> Option<&Contact> {
        self.contacts().find(|contact| contact.id == id)
    }

    /// Finds one group by exact title.
    pub fn group(&self, title: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.title == title)
    }

    /// Validates every group and checks id uniqueness across groups.
    ///
    /// # Errors
    /// - Any group-level error from [`Group::validate`].
    /// - `DuplicateId` for the first repeated contact id.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            group.validate()?;
            for contact in &group.contacts {
                if !seen.insert(contact.id.as_str()) {
                    return Err(ContactValidationError::DuplicateId(contact.id.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Directory, Group};
    use crate::model::contact::{Contact, ContactValidationError};

    fn sample() -> Directory {
        Directory::new(vec![
            Group::new(
                "Family",
                vec![
                    Contact::new("1", "Mom", "111", "Family"),
                    Contact::new("2", "Dad", "112", "Family"),
                ],
            ),
            Group::new("Work", vec![Contact::new("3", "Boss", "113", "Work")]),
        ])
    }

    #[test]
    fn counts_and_lookup_follow_display_order() {
        let directory = sample();
        assert_eq!(directory.group_count(), 2);
        assert_eq!(directory.contact_count(), 3);
        let ids = directory
            .contacts()
            .map(|contact| contact.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(directory.find_contact("3").map(|c| c.name.as_str()), Some("Boss"));
        assert!(directory.find_contact("99").is_none());
        assert_eq!(directory.group("Work").map(|g| g.contacts.len()), Some(1));
    }

    #[test]
    fn validate_rejects_duplicate_ids_across_groups() {
        let directory = Directory::new(vec![
            Group::new("Family", vec![Contact::new("1", "Mom", "111", "Family")]),
            Group::new("Work", vec![Contact::new("1", "Boss", "113", "Work")]),
        ]);
        assert_eq!(
            directory.validate(),
            Err(ContactValidationError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn validate_rejects_group_label_mismatch() {
        let group = Group::new("Family", vec![Contact::new("1", "Boss", "113", "Work")]);
        let error = group.validate().expect_err("mismatch must be rejected");
        assert!(error.to_string().contains("listed under `Family`"));
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let group = Group::new("Work", vec![Contact::new("7", "Boss", "  ", "Work")]);
        assert_eq!(
            group.validate(),
            Err(ContactValidationError::BlankField {
                contact_id: "7".to_string(),
                field: "phone",
            })
        );
        assert_eq!(
            Group::new(" ", Vec::new()).validate(),
            Err(ContactValidationError::BlankGroupTitle)
        );
    }

    #[test]
    fn sample_directory_is_valid() {
        assert!(sample().validate().is_ok());
        assert!(Directory::empty().is_empty());
    }
}
