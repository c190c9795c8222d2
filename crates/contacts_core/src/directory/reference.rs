//! Reference contact directory.
//!
//! # Invariants
//! - Built once per process on first access.
//! - Exposed only by shared reference; callers derive views by filtering.

use crate::model::contact::Contact;
use crate::model::directory::{Directory, Group};
use once_cell::sync::Lazy;

/// `(id, name, phone)` rows per group title, in display order.
const REFERENCE_ROWS: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Family",
        &[
            ("1", "Mom", "03001234567"),
            ("2", "Dad", "03001234568"),
            ("3", "Sister", "03001234569"),
        ],
    ),
    (
        "Friends",
        &[
            ("4", "Ali", "03001234570"),
            ("5", "Ahmed", "03001234571"),
            ("6", "Sara", "03001234572"),
        ],
    ),
    (
        "Work",
        &[
            ("7", "Boss", "03001234573"),
            ("8", "Manager", "03001234574"),
            ("9", "Colleague", "03001234575"),
            ("10", "HR", "03001234576"),
        ],
    ),
];

static REFERENCE_DIRECTORY: Lazy<Directory> = Lazy::new(build_reference_directory);

/// Returns the immutable reference directory.
pub fn reference_directory() -> &'static Directory {
    &REFERENCE_DIRECTORY
}

fn build_reference_directory() -> Directory {
    let groups = REFERENCE_ROWS
        .iter()
        .map(|(title, rows)| {
            let contacts = rows
                .iter()
                .map(|(id, name, phone)| Contact::new(*id, *name, *phone, *title))
                .collect();
            Group::new(*title, contacts)
        })
        .collect();
    Directory::new(groups)
}
