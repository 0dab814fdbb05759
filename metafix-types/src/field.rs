use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured field default, as recorded by the metadata store.
///
/// Wire shapes are fixed: literal defaults serialize as `{"value": ...}`
/// and generator defaults as `{"type": "now"}` / `{"type": "uuid"}`. The
/// "no default" case is carried as `Option::None` on the field record and
/// round-trips as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Number {
        value: f64,
    },
    Boolean {
        value: bool,
    },
    Text {
        value: String,
    },
    Generated {
        #[serde(rename = "type")]
        generator: GeneratedDefault,
    },
}

/// Server-side value generators a column default can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedDefault {
    Now,
    Uuid,
}

/// The platform's structured record for a user-facing field.
///
/// Reads are tolerant: optional fields may be absent and are omitted on
/// write. `default_value` is the exception — it round-trips `null`
/// because "no default" is meaningful on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub id: Uuid,

    pub object_metadata_id: Uuid,

    pub name: String,

    pub field_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,

    #[serde(default)]
    pub default_value: Option<DefaultValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
