//! Request extractors for identity and roles.

pub mod auth;
pub mod rbac;
