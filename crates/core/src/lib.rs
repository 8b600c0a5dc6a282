//! Domain layer for the asset tracker.
//!
//! Holds the entity types, the error taxonomy, the store traits that the
//! persistence layer implements, and the services that enforce the asset
//! lifecycle. Nothing in here talks to a database directly.

pub mod error;
pub mod inventory;
pub mod types;
