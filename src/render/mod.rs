//! Rendering: map a record to labeled controls or print-ready text
//!
//! Rendering is a pure projection of the form record; toggling between Edit
//! and Print never touches the record, so the two modes round-trip without
//! data loss. In Print mode an empty value renders as a fixed underscore run
//! so exported documents keep a visible "blank to fill in" affordance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, FormRecord, RowId};
use crate::schema::{DocumentSchema, FieldDescriptor, FieldKind, SectionBody, TableSpec};
use crate::table::DynamicColumns;

/// Placeholder glyph run for empty values in print mode
pub const PRINT_PLACEHOLDER: &str = "__________";

/// View mode of an open document instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Editable controls
    Edit,
    /// Read-only text for output/export
    Print,
}

/// The visual element a field renders to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    /// Editable input carrying the current value
    Input { kind: FieldKind, value: String },

    /// Read-only text
    Static { text: String },
}

/// One labeled field element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub control: Control,
}

/// One table row: fixed cells then dynamic cells, header order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub id: RowId,
    pub cells: Vec<RenderedField>,
}

/// A rendered repeatable section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTable {
    pub key: String,
    /// Column labels: fixed columns then dynamic columns in definition order
    pub header: Vec<String>,
    pub rows: Vec<RenderedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedBody {
    Fields { fields: Vec<RenderedField> },
    Table { table: RenderedTable },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub title: String,
    pub body: RenderedBody,
}

/// Full rendering of one document instance in one view mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub doc_type: String,
    pub mode: ViewMode,
    pub sections: Vec<RenderedSection>,
}

/// Render a record against its schema
pub fn render(
    schema: &DocumentSchema,
    record: &FormRecord,
    dynamic: &HashMap<String, DynamicColumns>,
    mode: ViewMode,
) -> RenderedDocument {
    let sections = schema
        .sections
        .iter()
        .map(|section| RenderedSection {
            title: section.title.clone(),
            body: match &section.body {
                SectionBody::Fields { fields } => RenderedBody::Fields {
                    fields: fields
                        .iter()
                        .map(|field| {
                            let raw = record
                                .value(&field.key)
                                .map(FieldValue::as_text)
                                .unwrap_or_default();
                            render_field(field, &raw, mode)
                        })
                        .collect(),
                },
                SectionBody::Table { table } => RenderedBody::Table {
                    table: render_table(table, record, dynamic.get(&table.key), mode),
                },
            },
        })
        .collect();

    RenderedDocument {
        doc_type: schema.doc_type.clone(),
        mode,
        sections,
    }
}

fn render_field(field: &FieldDescriptor, raw: &str, mode: ViewMode) -> RenderedField {
    RenderedField {
        key: field.key.clone(),
        label: field.label.clone(),
        required: field.required,
        control: render_control(&field.kind, raw, mode),
    }
}

fn render_control(kind: &FieldKind, raw: &str, mode: ViewMode) -> Control {
    match mode {
        ViewMode::Edit => Control::Input {
            kind: kind.clone(),
            value: raw.to_string(),
        },
        ViewMode::Print => Control::Static {
            text: if raw.trim().is_empty() {
                PRINT_PLACEHOLDER.to_string()
            } else {
                raw.to_string()
            },
        },
    }
}

fn render_table(
    table: &TableSpec,
    record: &FormRecord,
    dynamic: Option<&DynamicColumns>,
    mode: ViewMode,
) -> RenderedTable {
    let dynamic_columns = dynamic.map(DynamicColumns::as_slice).unwrap_or(&[]);

    let mut header: Vec<String> = table.columns.iter().map(|c| c.label.clone()).collect();
    header.extend(dynamic_columns.iter().map(|c| c.label.clone()));

    let rows = match record.rows(&table.key) {
        Ok(rows) => rows
            .iter()
            .map(|row| {
                let mut cells: Vec<RenderedField> = table
                    .columns
                    .iter()
                    .map(|col| render_field(col, row.cell(&col.key), mode))
                    .collect();
                for col in dynamic_columns {
                    cells.push(RenderedField {
                        key: col.key.clone(),
                        label: col.label.clone(),
                        required: false,
                        control: render_control(&FieldKind::Text, row.dynamic_cell(&col.key), mode),
                    });
                }
                RenderedRow { id: row.id, cells }
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    RenderedTable {
        key: table.key.clone(),
        header,
        rows,
    }
}
