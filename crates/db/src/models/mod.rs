//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and, where rows are created by the API, a create DTO.

pub mod role;
pub mod user;
