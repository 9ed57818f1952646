//! Core domain logic for snackdex.
//! This crate is the single source of truth for the snack CRUD contract.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use controller::snack_controller::{
    CommandError, CommandResult, DeleteDecision, DeleteOutcome, MutationOutcome, SnackController,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snack::{SnackFields, SnackId, SnackRecord};
pub use repo::snack_store::{SnackStore, SqliteSnackStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
