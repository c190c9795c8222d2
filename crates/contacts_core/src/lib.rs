//! Core domain logic for the contacts screen.
//! This crate is the single source of truth for directory and search rules.

pub mod directory;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use directory::reference::reference_directory;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactDetail, ContactId, ContactValidationError};
pub use model::directory::{Directory, Group};
pub use search::filter::{contact_matches, filter_directory};
pub use service::contacts_screen::{
    ContactsScreen, ScreenError, DETAIL_TITLE, EMPTY_RESULT_MESSAGE, SCREEN_TITLE,
    SEARCH_PLACEHOLDER,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
