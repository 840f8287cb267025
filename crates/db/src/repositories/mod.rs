//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod client_repo;
pub mod copy_variation_repo;
pub mod execution_repo;
pub mod matrix_configuration_repo;
pub mod matrix_item_repo;
pub mod matrix_repo;
pub mod motivation_repo;
pub mod password_reset_repo;
pub mod role_repo;
pub mod session_repo;
pub mod template_repo;
pub mod user_repo;

pub use asset_repo::AssetRepo;
pub use client_repo::ClientRepo;
pub use copy_variation_repo::CopyVariationRepo;
pub use execution_repo::ExecutionRepo;
pub use matrix_configuration_repo::MatrixConfigurationRepo;
pub use matrix_item_repo::MatrixItemRepo;
pub use matrix_repo::MatrixRepo;
pub use motivation_repo::MotivationRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;

/// Build an `ILIKE` pattern matching `term` anywhere, escaping wildcards.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("logo"), "%logo%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
