//! Document schemas: the per-document-type field layout
//!
//! A [`DocumentSchema`] is an ordered sequence of sections, each holding
//! either a flat field list or a repeatable table. Created once at
//! document-type definition time and never mutated at runtime.

mod field;
mod section;

pub use field::{FieldDescriptor, FieldKind, SelectOption};
pub use section::{Section, SectionBody, TableSpec};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Complete schema for one document type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSchema {
    /// Unique document type identifier (e.g. "invoice.intake")
    pub doc_type: String,

    /// Human-readable document name
    pub name: String,

    /// Ordered sections
    pub sections: Vec<Section>,

    /// Whether submission proceeds while validation errors remain.
    /// Print-first document types set this; the default blocks.
    #[serde(default)]
    pub allow_submit_with_errors: bool,

    /// Whether removing a dynamic column also purges its values from
    /// existing rows. The default retains orphaned values so the data
    /// survives a re-add of the same column.
    #[serde(default)]
    pub purge_dynamic_values_on_column_remove: bool,
}

impl DocumentSchema {
    pub fn builder(doc_type: impl Into<String>, name: impl Into<String>) -> DocumentSchemaBuilder {
        DocumentSchemaBuilder {
            schema: DocumentSchema {
                doc_type: doc_type.into(),
                name: name.into(),
                sections: Vec::new(),
                allow_submit_with_errors: false,
                purge_dynamic_values_on_column_remove: false,
            },
        }
    }

    /// Load a schema from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let schema: DocumentSchema = serde_json::from_str(json)?;
        schema.check_keys()?;
        Ok(schema)
    }

    /// All scalar (non-table) fields, in schema order
    pub fn scalar_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|s| match &s.body {
            SectionBody::Fields { fields } => fields.as_slice(),
            SectionBody::Table { .. } => &[],
        })
    }

    /// All table sections, in schema order
    pub fn tables(&self) -> impl Iterator<Item = &TableSpec> {
        self.sections.iter().filter_map(|s| match &s.body {
            SectionBody::Table { table } => Some(table),
            SectionBody::Fields { .. } => None,
        })
    }

    /// Get a scalar field descriptor by key
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.scalar_fields().find(|f| f.key == key)
    }

    /// Get a table spec by key
    pub fn table(&self, key: &str) -> Option<&TableSpec> {
        self.tables().find(|t| t.key == key)
    }

    /// All required scalar fields
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.scalar_fields().filter(|f| f.required)
    }

    /// Reject duplicate keys: scalar keys and table keys share one namespace;
    /// column keys must be unique within their table.
    fn check_keys(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for field in self.scalar_fields() {
            if !seen.insert(field.key.as_str()) {
                return Err(FormError::DuplicateFieldKey(field.key.clone()));
            }
        }
        for table in self.tables() {
            if !seen.insert(table.key.as_str()) {
                return Err(FormError::DuplicateFieldKey(table.key.clone()));
            }
            let mut cols = HashSet::new();
            for col in &table.columns {
                if !cols.insert(col.key.as_str()) {
                    return Err(FormError::DuplicateFieldKey(format!(
                        "{}.{}",
                        table.key, col.key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`DocumentSchema`]; `build` rejects duplicate field keys.
pub struct DocumentSchemaBuilder {
    schema: DocumentSchema,
}

impl DocumentSchemaBuilder {
    pub fn section(mut self, title: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        self.schema.sections.push(Section::fields(title, fields));
        self
    }

    pub fn table_section(mut self, title: impl Into<String>, table: TableSpec) -> Self {
        self.schema.sections.push(Section::table(title, table));
        self
    }

    pub fn allow_submit_with_errors(mut self, allow: bool) -> Self {
        self.schema.allow_submit_with_errors = allow;
        self
    }

    pub fn purge_dynamic_values_on_column_remove(mut self, purge: bool) -> Self {
        self.schema.purge_dynamic_values_on_column_remove = purge;
        self
    }

    pub fn build(self) -> Result<DocumentSchema, FormError> {
        self.schema.check_keys()?;
        Ok(self.schema)
    }
}
