//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! the pool (or, inside a transaction, the connection) as the first argument.

pub mod role_repo;
pub mod user_repo;

pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
