use crate::field::FieldMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The platform's structured record for a user-facing object.
///
/// Fixers forward the full object collection to the migration builder so
/// it can resolve cross-references between fields in one pass; they do
/// not inspect it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub id: Uuid,

    pub name_singular: String,

    pub name_plural: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,

    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
}
