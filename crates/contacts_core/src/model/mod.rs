//! Contact directory domain model.
//!
//! # Responsibility
//! - Define the value types shared by filter, screen state and FFI layers.
//! - Keep the grouped section shape consumed by list UIs in one place.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Group order and intra-group contact order are insertion order.

pub mod contact;
pub mod directory;
