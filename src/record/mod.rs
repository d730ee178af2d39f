//! Form state: the mutable record behind one open document instance
//!
//! A [`FormRecord`] is created fresh from a schema (all fields empty, tables
//! with zero rows), mutated field-by-field as the user types, and discarded
//! when the instance closes. There is no persistence.

mod row;
mod value;

pub use row::{RowId, RowRecord, RowSet};
pub use value::FieldValue;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormError;
use crate::schema::{DocumentSchema, SectionBody};

/// Keys reserved for out-of-scope collaborator widgets (attachment lists,
/// signature blocks, ad-hoc custom-field rows). They write opaque values
/// here; the engine carries them through resolution untouched.
pub const RESERVED_KEYS: [&str; 3] = ["attachments", "signatures", "customFields"];

/// Mutable state of one open document instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    values: HashMap<String, FieldValue>,

    #[serde(default)]
    reserved: HashMap<String, Value>,
}

impl FormRecord {
    /// Fresh record for a schema: every scalar field empty, every table with
    /// zero rows. A min-row shortfall is a validation finding, not a seed.
    pub fn new(schema: &DocumentSchema) -> Self {
        let mut values = HashMap::new();
        for field in schema.scalar_fields() {
            values.insert(field.key.clone(), FieldValue::Empty);
        }
        for table in schema.tables() {
            values.insert(table.key.clone(), FieldValue::Rows(RowSet::new()));
        }
        Self {
            values,
            reserved: HashMap::new(),
        }
    }

    /// Current value of a field
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Set a scalar field's value
    pub fn set_scalar(&mut self, key: &str, value: FieldValue) -> Result<(), FormError> {
        match self.values.get_mut(key) {
            None => Err(FormError::UnknownPath(key.to_string())),
            Some(FieldValue::Rows(_)) => Err(FormError::IsATable(key.to_string())),
            Some(slot) => {
                *slot = value;
                Ok(())
            }
        }
    }

    /// Rows of a table section
    pub fn rows(&self, table_key: &str) -> Result<&RowSet, FormError> {
        match self.values.get(table_key) {
            Some(FieldValue::Rows(rows)) => Ok(rows),
            Some(_) => Err(FormError::NotATable(table_key.to_string())),
            None => Err(FormError::UnknownPath(table_key.to_string())),
        }
    }

    /// Mutable rows of a table section
    pub fn rows_mut(&mut self, table_key: &str) -> Result<&mut RowSet, FormError> {
        match self.values.get_mut(table_key) {
            Some(FieldValue::Rows(rows)) => Ok(rows),
            Some(_) => Err(FormError::NotATable(table_key.to_string())),
            None => Err(FormError::UnknownPath(table_key.to_string())),
        }
    }

    /// Collaborator write-back under a reserved key
    pub fn set_reserved(&mut self, key: &str, value: Value) -> Result<(), FormError> {
        if !RESERVED_KEYS.contains(&key) {
            return Err(FormError::NotAReservedKey(key.to_string()));
        }
        self.reserved.insert(key.to_string(), value);
        Ok(())
    }

    /// Current collaborator value under a reserved key
    pub fn reserved(&self, key: &str) -> Option<&Value> {
        self.reserved.get(key)
    }

    /// Resolve to the plain submission payload: scalar values in schema
    /// order, every table inlined as an array of row objects with their
    /// `dynamicFields` sub-map, reserved collaborator slots appended.
    pub fn resolve(&self, schema: &DocumentSchema) -> Value {
        let mut out = Map::new();
        for section in &schema.sections {
            match &section.body {
                SectionBody::Fields { fields } => {
                    for field in fields {
                        let value = self
                            .values
                            .get(&field.key)
                            .map(FieldValue::to_json_scalar)
                            .unwrap_or(Value::Null);
                        out.insert(field.key.clone(), value);
                    }
                }
                SectionBody::Table { table } => {
                    let rows = match self.values.get(&table.key) {
                        Some(FieldValue::Rows(rows)) => rows
                            .iter()
                            .map(|row| resolve_row(row, table))
                            .collect::<Vec<Value>>(),
                        _ => Vec::new(),
                    };
                    out.insert(table.key.clone(), Value::Array(rows));
                }
            }
        }
        for (key, value) in &self.reserved {
            out.insert(key.clone(), value.clone());
        }
        Value::Object(out)
    }
}

fn resolve_row(row: &RowRecord, table: &crate::schema::TableSpec) -> Value {
    let mut obj = Map::new();
    for col in &table.columns {
        obj.insert(col.key.clone(), Value::String(row.cell(&col.key).to_string()));
    }
    let dynamic: Map<String, Value> = row
        .dynamic
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    obj.insert("dynamicFields".to_string(), Value::Object(dynamic));
    Value::Object(obj)
}
