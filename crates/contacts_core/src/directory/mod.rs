//! Compiled-in contact datasets.
//!
//! # Responsibility
//! - Own the reference directory shown when the search bar is empty.
//!
//! # Invariants
//! - The reference directory is built once and never mutated.

pub mod reference;
