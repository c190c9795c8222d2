//! Substring filter over grouped contacts.
//!
//! # Responsibility
//! - Match contacts by case-insensitive name or literal phone substring.
//! - Re-group survivors without reordering.
//!
//! # Invariants
//! - The input directory is never mutated.
//! - An empty query returns the input unchanged.
//! - Output never contains an empty group.
//! - The query is used as typed; it is not trimmed.

use crate::model::contact::Contact;
use crate::model::directory::{Directory, Group};
use log::debug;

/// Returns whether one contact matches `query`.
///
/// Name matching lowercases both sides. Phone matching is literal.
/// Every contact matches the empty query.
pub fn contact_matches(contact: &Contact, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(contact, query, &query.to_lowercase())
}

/// Filters `directory` by `query` into a new directory.
///
/// Total over all inputs; an unmatched query yields a directory with zero
/// groups.
pub fn filter_directory(directory: &Directory, query: &str) -> Directory {
    if query.is_empty() {
        let unchanged = directory.clone();
        log_filter_result(query, &unchanged);
        return unchanged;
    }

    let lowered = query.to_lowercase();
    let groups = directory
        .groups()
        .iter()
        .filter_map(|group| {
            let contacts = group
                .contacts
                .iter()
                .filter(|contact| matches_lowered(contact, query, &lowered))
                .cloned()
                .collect::<Vec<_>>();
            if contacts.is_empty() {
                None
            } else {
                Some(Group::new(group.title.clone(), contacts))
            }
        })
        .collect::<Vec<_>>();
    let filtered = Directory::new(groups);
    log_filter_result(query, &filtered);
    filtered
}

// Counts only; query text and contact fields stay out of logs.
fn log_filter_result(query: &str, result: &Directory) {
    debug!(
        "event=contacts_filter module=search status=ok query_chars={} groups={} contacts={}",
        query.chars().count(),
        result.group_count(),
        result.contact_count()
    );
}

fn matches_lowered(contact: &Contact, query: &str, lowered: &str) -> bool {
    contact.name.to_lowercase().contains(lowered) || contact.phone.contains(query)
}

#[cfg(test)]
mod tests {
    use super::{contact_matches, filter_directory};
    use crate::model::contact::Contact;
    use crate::model::directory::{Directory, Group};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use once_cell::sync::OnceCell;
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};

    struct CaptureLogger {
        records: Mutex<Vec<(ThreadId, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.records.lock() {
                records.push((thread::current().id(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: OnceCell<&'static CaptureLogger> = OnceCell::new();

    /// Returns messages logged by the current thread while running `f`.
    fn captured_messages(f: impl FnOnce()) -> Vec<String> {
        let logger = CAPTURE.get_or_init(|| {
            let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger {
                records: Mutex::new(Vec::new()),
            }));
            log::set_logger(logger).expect("no other logger in unit tests");
            log::set_max_level(LevelFilter::Debug);
            logger
        });
        f();
        let current = thread::current().id();
        logger
            .records
            .lock()
            .expect("capture lock")
            .iter()
            .filter(|(thread_id, _)| *thread_id == current)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn sample() -> Directory {
        Directory::new(vec![
            Group::new(
                "Friends",
                vec![
                    Contact::new("4", "Ali", "03001234570", "Friends"),
                    Contact::new("5", "Ahmed", "03001234571", "Friends"),
                ],
            ),
            Group::new("Work", vec![Contact::new("10", "HR", "03001234576", "Work")]),
        ])
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let contact = Contact::new("4", "Ali", "03001234570", "Friends");
        assert!(contact_matches(&contact, "ALI"));
        assert!(contact_matches(&contact, "li"));
        assert!(!contact_matches(&contact, "alx"));
    }

    #[test]
    fn phone_match_is_literal_substring() {
        let contact = Contact::new("10", "HR", "03001234576", "Work");
        assert!(contact_matches(&contact, "4576"));
        assert!(!contact_matches(&contact, "0300 1234"));
    }

    #[test]
    fn query_is_not_trimmed() {
        let directory = sample();
        assert!(filter_directory(&directory, " ali").is_empty());
    }

    #[test]
    fn empty_groups_are_dropped() {
        let filtered = filter_directory(&sample(), "hr");
        assert_eq!(filtered.group_count(), 1);
        assert_eq!(filtered.groups()[0].title, "Work");
    }

    #[test]
    fn filter_logs_counts_for_empty_and_non_empty_queries() {
        let directory = sample();
        let messages = captured_messages(|| {
            let _ = filter_directory(&directory, "");
            let _ = filter_directory(&directory, "ahm");
        });
        let events = messages
            .iter()
            .filter(|message| message.starts_with("event=contacts_filter"))
            .collect::<Vec<_>>();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains("query_chars=0 groups=2 contacts=3"));
        assert!(events[1].contains("query_chars=3 groups=1 contacts=1"));
        assert!(messages.iter().all(|message| !message.contains("ahm")));
    }

    #[test]
    fn empty_query_is_identity() {
        let directory = sample();
        assert_eq!(filter_directory(&directory, ""), directory);
    }
}
