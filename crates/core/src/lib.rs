//! Domain logic shared by the database and API crates.
//!
//! Nothing in here touches the network or the database: validation rules,
//! catalogs, pagination math, templated content generation, and the object
//! storage abstraction used for uploaded assets.

pub mod assets;
pub mod catalog;
pub mod clients;
pub mod error;
pub mod executions;
pub mod generation;
pub mod matrix;
pub mod pagination;
pub mod roles;
pub mod storage;
pub mod templates;
pub mod types;
