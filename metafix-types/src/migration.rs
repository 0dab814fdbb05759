use crate::field::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Action kind for a batch of field-metadata changes handed to the
/// migration builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationActionKind {
    Create,
    Update,
    Delete,
}

impl MigrationActionKind {
    pub fn is_update(self) -> bool {
        matches!(self, MigrationActionKind::Update)
    }
}

/// A current/altered pair handed to the migration builder.
///
/// `current` is what the metadata must look like right now (re-derived
/// from live schema state); `altered` is the target definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadataUpdate {
    pub current: FieldMetadata,
    pub altered: FieldMetadata,
}

/// A partial, not-yet-executed migration entity.
///
/// Produced by the migration builder; this workspace treats `actions` as
/// an opaque, builder-specific payload and forwards it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationFragment {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,

    #[serde(default)]
    pub actions: Vec<serde_json::Value>,
}
