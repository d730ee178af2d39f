//! Field values held by a form record

use serde::{Deserialize, Serialize};

use super::row::RowSet;

/// Current value of one field
///
/// Scalar input is stored as entered; numeric coercion happens only at
/// validation and resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Unfilled field
    Empty,

    /// Text as typed
    Text(String),

    /// Programmatically-set number
    Number(f64),

    /// Rows of a repeatable table section
    Rows(RowSet),
}

impl FieldValue {
    /// Is the value empty or whitespace-only?
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Rows(rows) => rows.is_empty(),
        }
    }

    /// Scalar value as display text; tables have no scalar text.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Rows(_) => String::new(),
        }
    }

    /// JSON form used in the resolved submission payload
    pub fn to_json_scalar(&self) -> serde_json::Value {
        match self {
            FieldValue::Empty => serde_json::Value::Null,
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::json!(n),
            FieldValue::Rows(_) => serde_json::Value::Null,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}
