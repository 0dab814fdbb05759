//! Shared DTOs (schemas-as-code) for the metafix workspace.
//!
//! # Design constraints
//! - These types cross process boundaries as JSON.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod field;
pub mod issue;
pub mod migration;
pub mod object;

/// Schema identifiers.
pub mod schema {
    pub const METAFIX_ISSUES_V1: &str = "metafix.issues.v1";
    pub const METAFIX_MIGRATION_V1: &str = "metafix.migration.v1";
}
