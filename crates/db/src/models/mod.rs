//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for inserts and updates
//! - A `Serialize` response shape built from the row (where the entity is exposed)

pub mod note;
pub mod todo;
pub mod user;
