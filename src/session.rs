//! Form session: one open document instance
//!
//! Owns the record, the per-table dynamic column lists, and the view mode.
//! All mutation flows through it synchronously inside UI event handlers;
//! there is no background work and no suspension point, so operations are
//! serialized by construction.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::FormError;
use crate::record::{FieldValue, FormRecord, RowId, RowRecord};
use crate::render::{render, RenderedDocument, ViewMode};
use crate::schema::DocumentSchema;
use crate::submit::{SubmissionReceipt, SubmissionSink};
use crate::table::{DynamicColumn, DynamicColumns};
use crate::validate::{validate, ValidationErrorMap};

/// Dotted-path address: `field`, or `table.index.column`
enum FieldPath<'a> {
    Scalar(&'a str),
    Cell {
        table: &'a str,
        index: usize,
        column: &'a str,
    },
}

/// Only the first two separators split; the column segment keeps any further
/// dots, since dynamic-column keys derive from free-form labels.
fn parse_path(path: &str) -> Option<FieldPath<'_>> {
    match path.split_once('.') {
        None => (!path.is_empty()).then_some(FieldPath::Scalar(path)),
        Some((table, rest)) => {
            if table.is_empty() {
                return None;
            }
            let (index, column) = rest.split_once('.')?;
            let index = index.parse().ok()?;
            if column.is_empty() {
                return None;
            }
            Some(FieldPath::Cell {
                table,
                index,
                column,
            })
        }
    }
}

/// One open document instance
pub struct FormSession {
    schema: DocumentSchema,
    record: FormRecord,
    dynamic: HashMap<String, DynamicColumns>,
    mode: ViewMode,
}

impl FormSession {
    /// Open a fresh instance of a document type
    pub fn new(schema: DocumentSchema) -> Self {
        let record = FormRecord::new(&schema);
        let dynamic = schema
            .tables()
            .map(|t| (t.key.clone(), DynamicColumns::new()))
            .collect();
        debug!(doc_type = %schema.doc_type, "opened document instance");
        Self {
            schema,
            record,
            dynamic,
            mode: ViewMode::Edit,
        }
    }

    pub fn schema(&self) -> &DocumentSchema {
        &self.schema
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Mutable record access for collaborator widgets (reserved keys)
    pub fn record_mut(&mut self) -> &mut FormRecord {
        &mut self.record
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Toggle between Edit and Print. Both modes read the same record, so
    /// switching loses nothing in either direction.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            debug!(doc_type = %self.schema.doc_type, ?mode, "view mode changed");
            self.mode = mode;
        }
    }

    /// Set a value at a field path: a scalar key, or `table.index.column`
    /// where the column may be fixed or dynamic.
    pub fn set_value(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        match parse_path(path).ok_or_else(|| FormError::UnknownPath(path.to_string()))? {
            FieldPath::Scalar(key) => {
                if self.schema.field(key).is_none() {
                    return Err(FormError::UnknownPath(path.to_string()));
                }
                self.record.set_scalar(key, FieldValue::Text(value.to_string()))
            }
            FieldPath::Cell {
                table,
                index,
                column,
            } => {
                let spec = self
                    .schema
                    .table(table)
                    .ok_or_else(|| FormError::NotATable(table.to_string()))?;
                let is_fixed = spec.column(column).is_some();
                let is_dynamic = !is_fixed
                    && self
                        .dynamic
                        .get(table)
                        .is_some_and(|cols| cols.contains(column));
                if !is_fixed && !is_dynamic {
                    return Err(FormError::UnknownPath(path.to_string()));
                }

                let rows = self.record.rows_mut(table)?;
                let row = rows.at_mut(index).ok_or(FormError::RowIndexOutOfBounds {
                    table: table.to_string(),
                    index,
                })?;
                if is_fixed {
                    row.set_cell(column, value);
                } else {
                    row.set_dynamic_cell(column, value);
                }
                Ok(())
            }
        }
    }

    /// Current value at a field path, as display text
    pub fn value(&self, path: &str) -> Option<String> {
        match parse_path(path)? {
            FieldPath::Scalar(key) => self.record.value(key).map(FieldValue::as_text),
            FieldPath::Cell {
                table,
                index,
                column,
            } => {
                let rows = self.record.rows(table).ok()?;
                let row = rows.at(index)?;
                let spec = self.schema.table(table)?;
                if spec.column(column).is_some() {
                    Some(row.cell(column).to_string())
                } else if self
                    .dynamic
                    .get(table)
                    .is_some_and(|cols| cols.contains(column))
                {
                    Some(row.dynamic_cell(column).to_string())
                } else {
                    None
                }
            }
        }
    }

    /// Append a row seeded from the table's fixed default shape (the same
    /// default every time, never a copy of the previous row).
    pub fn add_row(&mut self, table_key: &str) -> Result<RowId, FormError> {
        let spec = self
            .schema
            .table(table_key)
            .ok_or_else(|| FormError::NotATable(table_key.to_string()))?;
        let row = RowRecord::from_template(&spec.columns, &spec.row_template);
        let id = self.record.rows_mut(table_key)?.push(row);
        debug!(doc_type = %self.schema.doc_type, table = table_key, %id, "row added");
        Ok(id)
    }

    /// Remove a row by stable id
    pub fn remove_row(&mut self, table_key: &str, id: RowId) -> Result<(), FormError> {
        self.record
            .rows_mut(table_key)?
            .remove(id)
            .ok_or(FormError::RowNotFound {
                table: table_key.to_string(),
                id,
            })?;
        debug!(doc_type = %self.schema.doc_type, table = table_key, %id, "row removed");
        Ok(())
    }

    /// Remove a row by display position
    pub fn remove_row_at(&mut self, table_key: &str, index: usize) -> Result<(), FormError> {
        self.record
            .rows_mut(table_key)?
            .remove_at(index)
            .ok_or(FormError::RowIndexOutOfBounds {
                table: table_key.to_string(),
                index,
            })?;
        Ok(())
    }

    /// Dynamic columns currently defined for a table
    pub fn dynamic_columns(&self, table_key: &str) -> &[DynamicColumn] {
        self.dynamic
            .get(table_key)
            .map(DynamicColumns::as_slice)
            .unwrap_or(&[])
    }

    /// Add a dynamic column from a user-entered label. Callers collect the
    /// label through their own non-blocking flow; this is the whole contract.
    /// Returns the derived column key.
    pub fn add_column(&mut self, table_key: &str, raw_label: &str) -> Result<String, FormError> {
        let cols = self
            .dynamic
            .get_mut(table_key)
            .ok_or_else(|| FormError::NotATable(table_key.to_string()))?;
        match cols.add(raw_label) {
            Ok(column) => {
                debug!(
                    doc_type = %self.schema.doc_type,
                    table = table_key,
                    key = %column.key,
                    "dynamic column added"
                );
                Ok(column.key)
            }
            Err(err) => {
                warn!(
                    doc_type = %self.schema.doc_type,
                    table = table_key,
                    label = raw_label,
                    %err,
                    "dynamic column rejected"
                );
                Err(err)
            }
        }
    }

    /// Remove a dynamic column definition. Row values under the key are
    /// retained unless the document type opts into purge-on-remove.
    pub fn remove_column(&mut self, table_key: &str, key: &str) -> Result<(), FormError> {
        let cols = self
            .dynamic
            .get_mut(table_key)
            .ok_or_else(|| FormError::NotATable(table_key.to_string()))?;
        if cols.remove(key).is_none() {
            return Err(FormError::UnknownPath(format!("{table_key}.{key}")));
        }
        if self.schema.purge_dynamic_values_on_column_remove {
            self.record.rows_mut(table_key)?.purge_dynamic(key);
        }
        debug!(doc_type = %self.schema.doc_type, table = table_key, key, "dynamic column removed");
        Ok(())
    }

    /// Recompute the full error map for the current record
    pub fn validate(&self) -> ValidationErrorMap {
        validate(&self.schema, &self.record)
    }

    /// Render in the session's current view mode
    pub fn render(&self) -> RenderedDocument {
        self.render_as(self.mode)
    }

    /// Render in an explicit view mode without changing session state
    pub fn render_as(&self, mode: ViewMode) -> RenderedDocument {
        render(&self.schema, &self.record, &self.dynamic, mode)
    }

    /// Submit through a collaborator sink. Blocked while validation errors
    /// remain unless the document type allows submission with errors. The
    /// record stays intact and editable whatever the sink does.
    pub fn submit(
        &mut self,
        sink: &mut dyn SubmissionSink,
    ) -> Result<SubmissionReceipt, FormError> {
        let errors = self.validate();
        if !errors.is_empty() && !self.schema.allow_submit_with_errors {
            warn!(
                doc_type = %self.schema.doc_type,
                error_count = errors.len(),
                "submission blocked by validation errors"
            );
            return Err(FormError::SubmissionBlocked { errors });
        }

        let payload = self.record.resolve(&self.schema);
        let receipt = sink.submit(&payload)?;
        info!(
            doc_type = %self.schema.doc_type,
            reference = %receipt.reference,
            "submission accepted"
        );
        Ok(receipt)
    }
}
