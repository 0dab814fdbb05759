//! Domain logic: turn detected metadata-health issues into migration
//! fragments.
//!
//! This crate owns *which* issues get reconciled and how raw column
//! defaults are normalized. It does not own migration construction;
//! that's the injected [`MigrationFieldBuilder`].

mod fixers;
mod ports;

pub use fixers::{DefaultValueFixer, default_value_from_column_default};
pub use ports::MigrationFieldBuilder;
