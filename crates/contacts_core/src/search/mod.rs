//! Contact search entry points.
//!
//! # Responsibility
//! - Derive the displayed directory from a directory and a search string.
//! - Keep match rules inside core so every front end filters identically.

pub mod filter;
