//! Field descriptors and input kinds

use serde::{Deserialize, Serialize};

/// One choice in a select field's fixed option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input kind of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text
    Text,

    /// Multi-line free text
    TextArea,

    /// Numeric input; value must parse as a number
    Number,

    /// Date (YYYY-MM-DD)
    Date,

    /// Clock time (HH:MM)
    Time,

    /// Combined date and time (YYYY-MM-DDTHH:MM)
    DateTime,

    /// Email address; value must have a `local@domain` shape
    Email,

    /// Dropdown over a fixed option list. `allow_other` admits free text
    /// for the handful of document types that add an "Other" sentinel.
    Select {
        options: Vec<SelectOption>,
        #[serde(default)]
        allow_other: bool,
    },
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::DateTime => "datetime",
            FieldKind::Email => "email",
            FieldKind::Select { .. } => "select",
        }
    }
}

/// Definition of a single field within a document type
///
/// Immutable once the document type is defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier, unique within the document
    pub key: String,

    /// Human-readable label
    pub label: String,

    /// Input kind
    pub kind: FieldKind,

    /// Is this field required?
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn time(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Time)
    }

    pub fn datetime(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::DateTime)
    }

    pub fn email(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Email)
    }

    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Select {
                options,
                allow_other: false,
            },
        )
    }

    /// Select that also accepts free text via an "Other" sentinel
    pub fn select_with_other(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Select {
                options,
                allow_other: true,
            },
        )
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
