//! Dynamic table extension: ad-hoc columns added at runtime
//!
//! A user can extend any repeatable table with an extra column without
//! touching the document type's compiled schema. Definitions live in a
//! per-table, per-session list; values live in each row's dynamic sub-map.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A runtime-added table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicColumn {
    /// Derived from the label by stripping whitespace; unique per table
    pub key: String,

    /// Label as entered
    pub label: String,
}

/// Derive a column key from a user-entered label by removing all whitespace
pub fn derive_column_key(label: &str) -> String {
    label.split_whitespace().collect()
}

/// Per-table list of dynamic columns, in definition order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicColumns {
    columns: Vec<DynamicColumn>,
}

impl DynamicColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&DynamicColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Columns in definition order
    pub fn iter(&self) -> impl Iterator<Item = &DynamicColumn> {
        self.columns.iter()
    }

    pub fn as_slice(&self) -> &[DynamicColumn] {
        &self.columns
    }

    /// Add a column named by the user. The key is the label stripped of
    /// whitespace; a duplicate key is rejected visibly and the list is left
    /// unchanged. Rejection is uniform across all document types.
    pub fn add(&mut self, raw_label: &str) -> Result<DynamicColumn, FormError> {
        let key = derive_column_key(raw_label);
        if key.is_empty() {
            return Err(FormError::EmptyColumnLabel);
        }
        if self.contains(&key) {
            return Err(FormError::DuplicateColumn { key });
        }
        let column = DynamicColumn {
            key,
            label: raw_label.trim().to_string(),
        };
        self.columns.push(column.clone());
        Ok(column)
    }

    /// Remove a column definition by key. Existing row values under the key
    /// are not touched here; purging is the session's policy call.
    pub fn remove(&mut self, key: &str) -> Option<DynamicColumn> {
        let pos = self.columns.iter().position(|c| c.key == key)?;
        Some(self.columns.remove(pos))
    }
}
