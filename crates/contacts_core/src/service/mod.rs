//! Core use-case services.
//!
//! # Responsibility
//! - Hold per-screen UI state on top of the filter transform.
//! - Keep UI/FFI layers decoupled from dataset and match details.

pub mod contacts_screen;
