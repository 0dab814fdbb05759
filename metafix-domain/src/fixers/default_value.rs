use crate::ports::MigrationFieldBuilder;
use metafix_types::field::{DefaultValue, FieldMetadata, GeneratedDefault};
use metafix_types::issue::{ColumnStructure, HealthIssue};
use metafix_types::migration::{FieldMetadataUpdate, MigrationActionKind, MigrationFragment};
use metafix_types::object::ObjectMetadata;
use tracing::debug;

/// Reconciles column-default conflicts by rewriting the stored field
/// default to match what the live schema reports.
pub struct DefaultValueFixer;

impl DefaultValueFixer {
    /// Turn detected default-value conflicts into UPDATE migration
    /// fragments.
    ///
    /// Issues of any other kind are skipped and never reach the builder.
    pub fn fix(
        &self,
        builder: &dyn MigrationFieldBuilder,
        object_metadata_collection: &[ObjectMetadata],
        issues: &[HealthIssue],
    ) -> anyhow::Result<Vec<MigrationFragment>> {
        let mut conflicts: Vec<(&FieldMetadata, &ColumnStructure)> = Vec::new();
        for issue in issues {
            match issue {
                HealthIssue::ColumnDefaultValueConflict {
                    field_metadata,
                    column_structure,
                } => conflicts.push((field_metadata, column_structure)),
                other => {
                    debug!(kind = other.kind(), "issue kind out of scope, skipping");
                }
            }
        }

        if conflicts.is_empty() {
            return Ok(vec![]);
        }

        Self::fix_column_default_value_issues(builder, object_metadata_collection, &conflicts)
    }

    fn fix_column_default_value_issues(
        builder: &dyn MigrationFieldBuilder,
        object_metadata_collection: &[ObjectMetadata],
        conflicts: &[(&FieldMetadata, &ColumnStructure)],
    ) -> anyhow::Result<Vec<MigrationFragment>> {
        let update_collection = conflicts
            .iter()
            .map(|(field_metadata, column_structure)| {
                let old_default =
                    default_value_from_column_default(column_structure.column_default.as_deref());

                let mut current = (*field_metadata).clone();
                current.default_value = old_default;

                FieldMetadataUpdate {
                    current,
                    altered: (*field_metadata).clone(),
                }
            })
            .collect();

        // One batched call so the builder can cross-reference fields in a
        // single pass.
        builder.create(
            object_metadata_collection,
            update_collection,
            MigrationActionKind::Update,
        )
    }
}

/// Re-derive a structured default from the raw SQL expression a column
/// carries.
///
/// Ordered rule set, first match wins. The numeric rule fires before the
/// boolean/empty/fallback rules, so numeric-looking text never reaches
/// them. Total: every input (or its absence) maps to exactly one shape.
/// Quoted or cast expressions such as `'abc'::text` land in the text
/// fallback verbatim, quotes included.
pub fn default_value_from_column_default(column_default: Option<&str>) -> Option<DefaultValue> {
    let text = match column_default {
        None | Some("NULL") => return None,
        Some(text) => text,
    };

    if let Ok(value) = text.parse::<f64>() {
        // "NaN" parses as f64 but is not a numeric literal; it falls
        // through to the text fallback.
        if !value.is_nan() {
            return Some(DefaultValue::Number { value });
        }
    }

    match text {
        "true" => Some(DefaultValue::Boolean { value: true }),
        "false" => Some(DefaultValue::Boolean { value: false }),
        "" => Some(DefaultValue::Text {
            value: String::new(),
        }),
        "now()" => Some(DefaultValue::Generated {
            generator: GeneratedDefault::Now,
        }),
        _ if text.starts_with("public.uuid_generate_v4") => Some(DefaultValue::Generated {
            generator: GeneratedDefault::Uuid,
        }),
        _ => Some(DefaultValue::Text {
            value: text.to_string(),
        }),
    }
}
