//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Query parameter structs for filtered listing where the resource
//!   supports it

pub mod access_log;
pub mod detection;
pub mod vehicle;
