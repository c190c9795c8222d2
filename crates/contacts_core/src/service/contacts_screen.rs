//! Contacts screen state service.
//!
//! # Responsibility
//! - Own the search text, displayed directory and detail overlay state of
//!   one screen instance.
//! - Recompute the displayed directory on every search text change.
//!
//! # Invariants
//! - The displayed directory is always `filter_directory(reference, search_text)`.
//! - Filtering never narrows a previous result; it always starts from the
//!   reference directory.
//! - Selection only resolves contacts that are currently displayed.
//! - Dismissing the detail overlay has no effect on directory data.

use crate::directory::reference::reference_directory;
use crate::model::contact::{Contact, ContactDetail, ContactId};
use crate::model::directory::Directory;
use crate::search::filter::filter_directory;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Screen header text.
pub const SCREEN_TITLE: &str = "Contacts Manager";
/// Search bar placeholder text.
pub const SEARCH_PLACEHOLDER: &str = "Search by name or phone...";
/// Message rendered when the displayed directory has no groups.
pub const EMPTY_RESULT_MESSAGE: &str = "No contacts found";
/// Detail overlay heading.
pub const DETAIL_TITLE: &str = "Contact Details";

/// Screen-level error for selection use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// Contact ID is unknown or hidden by the active search.
    ContactNotFound(ContactId),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(id) => write!(f, "contact not displayed: {id}"),
        }
    }
}

impl Error for ScreenError {}

/// State holder for a single contacts screen.
#[derive(Debug, Clone)]
pub struct ContactsScreen {
    reference: &'static Directory,
    search_text: String,
    displayed: Directory,
    selected: Option<Contact>,
    detail_visible: bool,
}

impl ContactsScreen {
    /// Creates a screen over `reference` with an empty search bar.
    pub fn new(reference: &'static Directory) -> Self {
        Self {
            reference,
            search_text: String::new(),
            displayed: reference.clone(),
            selected: None,
            detail_visible: false,
        }
    }

    /// Creates a screen over the compiled-in reference directory.
    pub fn with_reference_directory() -> Self {
        Self::new(reference_directory())
    }

    /// Stores new search text and returns the recomputed displayed directory.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> &Directory {
        self.search_text = text.into();
        self.displayed = filter_directory(self.reference, &self.search_text);
        &self.displayed
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn displayed(&self) -> &Directory {
        &self.displayed
    }

    pub fn reference(&self) -> &'static Directory {
        self.reference
    }

    /// Returns whether the list should show [`EMPTY_RESULT_MESSAGE`].
    pub fn is_empty_result(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Selects a displayed contact and opens the detail overlay.
    ///
    /// # Errors
    /// - `ContactNotFound` when `id` is not in the displayed directory. State
    ///   is left unchanged in that case.
    pub fn select_contact(&mut self, id: &str) -> Result<&Contact, ScreenError> {
        let contact = self
            .displayed
            .find_contact(id)
            .cloned()
            .ok_or_else(|| ScreenError::ContactNotFound(id.to_string()))?;
        info!(
            "event=contact_select module=service status=ok contact_id={}",
            contact.id
        );
        self.detail_visible = true;
        Ok(&*self.selected.insert(contact))
    }

    /// Returns the last selected contact snapshot, visible or not.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail_visible
    }

    /// Returns the detail view while the overlay is open.
    pub fn detail(&self) -> Option<ContactDetail> {
        if !self.detail_visible {
            return None;
        }
        self.selected.as_ref().map(ContactDetail::from)
    }

    /// Closes the detail overlay.
    pub fn dismiss_detail(&mut self) {
        if self.detail_visible {
            info!("event=contact_dismiss module=service status=ok");
        }
        self.detail_visible = false;
    }
}

impl Default for ContactsScreen {
    fn default() -> Self {
        Self::with_reference_directory()
    }
}
