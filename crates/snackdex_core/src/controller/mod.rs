//! Presentation-facing command layer.
//!
//! # Responsibility
//! - Orchestrate store calls into user-action level commands.
//! - Keep presentation layers (console, GUI, web) decoupled from SQL.
//!
//! # Invariants
//! - Commands never bypass the store contract.
//! - No command failure may leave the mirror or form half-updated.

pub mod snack_controller;
