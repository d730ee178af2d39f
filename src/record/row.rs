//! Rows of repeatable table sections
//!
//! Rows carry a generated stable id so edits address a row reliably even as
//! positions shift; display order is kept separately from the row storage.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::FieldDescriptor;

/// Stable identifier for a row, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    /// Create a new row ID with a fresh UUID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a table section: fixed cells plus ad-hoc dynamic cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub id: RowId,

    /// Fixed column key -> value
    pub cells: HashMap<String, String>,

    /// Dynamic column key -> value. Entries may outlive their column
    /// definition when the document type retains orphaned values.
    #[serde(default)]
    pub dynamic: HashMap<String, String>,
}

impl RowRecord {
    /// Seed a row from the table's fixed default shape: every column present,
    /// template value where one is declared, empty string otherwise.
    pub fn from_template(
        columns: &[FieldDescriptor],
        template: &HashMap<String, String>,
    ) -> Self {
        let cells = columns
            .iter()
            .map(|col| {
                let value = template.get(&col.key).cloned().unwrap_or_default();
                (col.key.clone(), value)
            })
            .collect();
        Self {
            id: RowId::new(),
            cells,
            dynamic: HashMap::new(),
        }
    }

    /// Fixed cell value, empty string when unset
    pub fn cell(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set_cell(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Dynamic cell value, empty string when unset
    pub fn dynamic_cell(&self, column: &str) -> &str {
        self.dynamic.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set_dynamic_cell(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.dynamic.insert(column.into(), value.into());
    }
}

/// Ordered row storage: arena keyed by stable id, display order kept apart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
    rows: HashMap<RowId, RowRecord>,
    order: Vec<RowId>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a row; returns its stable id
    pub fn push(&mut self, row: RowRecord) -> RowId {
        let id = row.id;
        self.rows.insert(id, row);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut RowRecord> {
        self.rows.get_mut(&id)
    }

    /// Row at a display position
    pub fn at(&self, index: usize) -> Option<&RowRecord> {
        self.order.get(index).and_then(|id| self.rows.get(id))
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut RowRecord> {
        let id = *self.order.get(index)?;
        self.rows.get_mut(&id)
    }

    /// Display position of a row
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.order.iter().position(|r| *r == id)
    }

    /// Remove a row by stable id; remaining rows keep their relative order
    pub fn remove(&mut self, id: RowId) -> Option<RowRecord> {
        let pos = self.index_of(id)?;
        self.order.remove(pos);
        self.rows.remove(&id)
    }

    /// Remove a row by display position
    pub fn remove_at(&mut self, index: usize) -> Option<RowRecord> {
        if index >= self.order.len() {
            return None;
        }
        let id = self.order.remove(index);
        self.rows.remove(&id)
    }

    /// Rows in display order
    pub fn iter(&self) -> impl Iterator<Item = &RowRecord> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    /// Strip a dynamic column's values from every row
    pub fn purge_dynamic(&mut self, key: &str) {
        for row in self.rows.values_mut() {
            row.dynamic.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;

    fn three_rows() -> (RowSet, Vec<RowId>) {
        let columns = vec![FieldDescriptor::text("item", "Item")];
        let template = HashMap::new();
        let mut rows = RowSet::new();
        let ids: Vec<RowId> = (0..3)
            .map(|i| {
                let mut row = RowRecord::from_template(&columns, &template);
                row.set_cell("item", format!("row-{i}"));
                rows.push(row)
            })
            .collect();
        (rows, ids)
    }

    #[test]
    fn template_seeds_every_column() {
        let columns = vec![
            FieldDescriptor::text("code", "Code"),
            FieldDescriptor::number("qty", "Quantity"),
        ];
        let mut template = HashMap::new();
        template.insert("qty".to_string(), "1".to_string());

        let row = RowRecord::from_template(&columns, &template);
        assert_eq!(row.cell("code"), "");
        assert_eq!(row.cell("qty"), "1");
        assert!(row.dynamic.is_empty());
    }

    #[test]
    fn removal_preserves_relative_order() {
        let (mut rows, ids) = three_rows();
        rows.remove(ids[1]).expect("row exists");

        let remaining: Vec<&str> = rows.iter().map(|r| r.cell("item")).collect();
        assert_eq!(remaining, vec!["row-0", "row-2"]);
        assert_eq!(rows.index_of(ids[2]), Some(1));
    }

    #[test]
    fn positional_removal_matches_display_order() {
        let (mut rows, ids) = three_rows();
        let removed = rows.remove_at(0).expect("row exists");
        assert_eq!(removed.id, ids[0]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.at(0).map(|r| r.id), Some(ids[1]));
    }

    #[test]
    fn stable_id_survives_reordering_edits() {
        let (mut rows, ids) = three_rows();
        rows.remove_at(0);
        // the row formerly at position 2 is still addressable by id
        rows.get_mut(ids[2])
            .expect("row exists")
            .set_cell("item", "edited");
        assert_eq!(rows.at(1).map(|r| r.cell("item")), Some("edited"));
    }
}
