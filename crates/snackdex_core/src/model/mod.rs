//! Domain model for snack records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and controller.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `SnackId`.
//! - Deletion is hard delete; there are no tombstones or versions.

pub mod snack;
