//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the services in [`tracker_core::inventory`] and map
//! errors via [`AppError`](crate::error::AppError).

pub mod assets;
pub mod categories;
pub mod employees;
