//! Error types for form engine operations
//!
//! Validation findings are data (a [`ValidationErrorMap`]), never errors.
//! `FormError` covers rejected operations only: bad addresses, duplicate
//! dynamic columns, blocked or failed submissions.

use thiserror::Error;

use crate::submit::SubmissionError;
use crate::validate::ValidationErrorMap;

/// Main error type for the form engine
#[derive(Error, Debug)]
pub enum FormError {
    #[error("unknown document type '{0}'")]
    UnknownDocumentType(String),

    #[error("unknown field path '{0}'")]
    UnknownPath(String),

    #[error("duplicate field key '{0}' in document schema")]
    DuplicateFieldKey(String),

    #[error("field '{0}' is not a table section")]
    NotATable(String),

    #[error("field '{0}' is a table section; use row operations")]
    IsATable(String),

    #[error("no row at index {index} in table '{table}'")]
    RowIndexOutOfBounds { table: String, index: usize },

    #[error("no row '{id}' in table '{table}'")]
    RowNotFound { table: String, id: crate::record::RowId },

    #[error("duplicate dynamic column key '{key}'")]
    DuplicateColumn { key: String },

    #[error("dynamic column label must contain at least one non-whitespace character")]
    EmptyColumnLabel,

    #[error("'{0}' is not a reserved collaborator key")]
    NotAReservedKey(String),

    #[error("submission blocked by {} validation error(s)", .errors.len())]
    SubmissionBlocked { errors: ValidationErrorMap },

    #[error("submission sink error: {0}")]
    Sink(#[from] SubmissionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
