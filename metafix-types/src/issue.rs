use crate::field::FieldMetadata;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One table column as reported by live schema introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStructure {
    pub table_name: String,

    pub column_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,

    /// Raw SQL default expression, verbatim. Absent when the column has
    /// no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_default: Option<String>,
}

/// A detected disagreement between live schema state and stored metadata.
///
/// Closed union: the detector only emits these kinds, and each fixer
/// consumes the kinds it owns and skips the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HealthIssue {
    ColumnDefaultValueConflict {
        field_metadata: FieldMetadata,
        column_structure: ColumnStructure,
    },
    ColumnNullabilityConflict {
        field_metadata: FieldMetadata,
        column_structure: ColumnStructure,
    },
    ColumnTypeConflict {
        field_metadata: FieldMetadata,
        column_structure: ColumnStructure,
    },
    MissingColumn {
        field_metadata: FieldMetadata,
        table_name: String,
    },
}

impl HealthIssue {
    /// Stable tag for logging and reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            HealthIssue::ColumnDefaultValueConflict { .. } => "column_default_value_conflict",
            HealthIssue::ColumnNullabilityConflict { .. } => "column_nullability_conflict",
            HealthIssue::ColumnTypeConflict { .. } => "column_type_conflict",
            HealthIssue::MissingColumn { .. } => "missing_column",
        }
    }

    /// The target (correct) field definition this issue was raised for.
    pub fn field_metadata(&self) -> &FieldMetadata {
        match self {
            HealthIssue::ColumnDefaultValueConflict { field_metadata, .. }
            | HealthIssue::ColumnNullabilityConflict { field_metadata, .. }
            | HealthIssue::ColumnTypeConflict { field_metadata, .. }
            | HealthIssue::MissingColumn { field_metadata, .. } => field_metadata,
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum IssueParseError {
    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Parse a detector-emitted issue collection.
///
/// Unknown object fields are ignored; an unknown issue tag is an error,
/// since the issue set is a closed union.
pub fn parse_issues(raw: &str) -> Result<Vec<HealthIssue>, IssueParseError> {
    serde_json::from_str(raw).map_err(|e| IssueParseError::Json {
        message: e.to_string(),
    })
}
