//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and a create DTO for inserts. Rows are never updated, so
//! there are no update DTOs.

pub mod mood_entry;
