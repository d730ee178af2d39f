//! Sections: titled groups of fields, flat or repeatable

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::field::FieldDescriptor;

/// A repeatable table section: an ordered sequence of rows sharing a fixed
/// column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Key the table's rows live under in the form record; also the address
    /// of section-level errors (e.g. a min-row shortfall).
    pub key: String,

    /// Fixed columns every row exposes
    pub columns: Vec<FieldDescriptor>,

    /// Minimum row count; fewer rows is a section-level validation error
    #[serde(default)]
    pub min_rows: usize,

    /// Fixed default cell values used to seed every appended row.
    /// Columns absent here default to the empty string.
    #[serde(default)]
    pub row_template: HashMap<String, String>,
}

impl TableSpec {
    pub fn new(key: impl Into<String>, columns: Vec<FieldDescriptor>) -> Self {
        Self {
            key: key.into(),
            columns,
            min_rows: 0,
            row_template: HashMap::new(),
        }
    }

    pub fn min_rows(mut self, min: usize) -> Self {
        self.min_rows = min;
        self
    }

    pub fn template_value(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.row_template.insert(column.into(), value.into());
        self
    }

    /// Get a fixed column by key
    pub fn column(&self, key: &str) -> Option<&FieldDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// Body of a section: either a flat field list or a repeatable table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Fields { fields: Vec<FieldDescriptor> },
    Table { table: TableSpec },
}

/// A titled, ordered group of fields within a document type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn fields(title: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Fields { fields },
        }
    }

    pub fn table(title: impl Into<String>, table: TableSpec) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Table { table },
        }
    }
}
