//! Domain types, errors, and pure helpers shared by the `db` and `api` crates.
//!
//! This crate performs no I/O.

pub mod error;
pub mod search;
pub mod types;
