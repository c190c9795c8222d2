//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact search and detail lookups to Dart via FRB.
//! - Flatten core types into plain envelopes the UI renders directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls are stateless; Dart owns search text and overlay visibility.
//! - Every search filters the reference directory from scratch.

use contacts_core::{
    core_version as core_version_inner, filter_directory, init_logging as init_logging_inner,
    ping as ping_inner, reference_directory, Contact, Group, EMPTY_RESULT_MESSAGE,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the contacts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
}

/// One titled section of the contacts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSection {
    pub title: String,
    pub items: Vec<ContactItem>,
}

/// Search response envelope for the contacts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsSearchResponse {
    /// Non-empty sections in display order.
    pub sections: Vec<ContactSection>,
    /// Empty-state text when nothing matched, otherwise a hit summary.
    pub message: String,
    pub total_contacts: u32,
    /// Whether the UI should render the empty-state message.
    pub is_empty: bool,
}

/// Read-only fields shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetailItem {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    pub group: String,
}

/// Detail lookup envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetailResponse {
    pub ok: bool,
    pub detail: Option<ContactDetailItem>,
    pub message: String,
}

/// Filters the reference directory by `query`.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Query is used as typed (no trimming).
/// - Never panics; an unmatched query returns zero sections.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_search(query: String) -> ContactsSearchResponse {
    let filtered = filter_directory(reference_directory(), &query);
    let sections = filtered
        .groups()
        .iter()
        .map(to_contact_section)
        .collect::<Vec<_>>();
    let total_contacts = u32::try_from(filtered.contact_count()).unwrap_or(u32::MAX);
    let is_empty = sections.is_empty();
    let message = if is_empty {
        EMPTY_RESULT_MESSAGE.to_string()
    } else {
        format!("Found {total_contacts} contact(s).")
    };

    ContactsSearchResponse {
        sections,
        message,
        total_contacts,
        is_empty,
    }
}

/// Looks up one contact for the detail overlay.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown IDs return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_detail(contact_id: String) -> ContactDetailResponse {
    match reference_directory().find_contact(contact_id.trim()) {
        Some(contact) => ContactDetailResponse {
            ok: true,
            detail: Some(to_contact_detail_item(contact)),
            message: "Contact found.".to_string(),
        },
        None => {
            warn!(
                "event=contact_detail module=ffi status=not_found contact_id={}",
                contact_id.trim()
            );
            ContactDetailResponse {
                ok: false,
                detail: None,
                message: format!("contact_detail failed: contact not found: {}", contact_id.trim()),
            }
        }
    }
}

fn to_contact_section(group: &Group) -> ContactSection {
    ContactSection {
        title: group.title.clone(),
        items: group
            .contacts
            .iter()
            .map(|contact| ContactItem {
                contact_id: contact.id.clone(),
                name: contact.name.clone(),
                phone: contact.phone.clone(),
            })
            .collect(),
    }
}

fn to_contact_detail_item(contact: &Contact) -> ContactDetailItem {
    ContactDetailItem {
        contact_id: contact.id.clone(),
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        group: contact.group.clone(),
    }
}
