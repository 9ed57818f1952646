//! Store layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-store contract for snack CRUD.
//! - Isolate SQLite query details from controller orchestration.
//!
//! # Invariants
//! - Listing is always ordered ascending by id.
//! - Zero-rows-affected update/delete is reported as a count, not an error.

pub mod snack_store;
