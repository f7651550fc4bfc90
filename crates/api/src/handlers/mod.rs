//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `qdo_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod notes;
pub mod root;
pub mod todos;
