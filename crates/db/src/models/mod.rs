//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod asset;
pub mod client;
pub mod copy_variation;
pub mod execution;
pub mod matrix;
pub mod matrix_configuration;
pub mod motivation;
pub mod password_reset;
pub mod role;
pub mod session;
pub mod status;
pub mod template;
pub mod user;
