use metafix_types::migration::{FieldMetadataUpdate, MigrationActionKind, MigrationFragment};
use metafix_types::object::ObjectMetadata;

/// Migration-fragment construction.
///
/// metafix-domain uses this so fixers can be tested against a recording
/// fake; the production builder lives with the migration subsystem.
pub trait MigrationFieldBuilder {
    /// Build one migration fragment per update pair.
    ///
    /// Fixers call this once per run with the whole batch so the builder
    /// can resolve cross-references between fields in a single pass over
    /// the object collection. Errors propagate to the caller unchanged.
    fn create(
        &self,
        object_metadata_collection: &[ObjectMetadata],
        update_collection: Vec<FieldMetadataUpdate>,
        action: MigrationActionKind,
    ) -> anyhow::Result<Vec<MigrationFragment>>;
}
