//! formbook - shared engine behind enterprise paper-form replicas
//!
//! Every document type in this collection follows the same shallow pattern:
//! a field schema, a flat validation ruleset derived from it, and a fixed
//! layout rendered either as editable controls or as print-ready text. This
//! crate factors that recurring mechanism out so a document type is just a
//! schema definition.
//!
//! ## Quick Start
//!
//! ```rust
//! use formbook::registry::DocumentRegistry;
//!
//! let registry = DocumentRegistry::new();
//! let mut session = registry.open("invoice.intake").expect("builtin document type");
//!
//! session.set_value("supplierName", "Acme Supplies Ltd").unwrap();
//! let errors = session.validate();
//! assert_eq!(errors.get("invoiceNumber").map(String::as_str), Some("Required"));
//! ```

// Core error handling
pub mod error;

// Field schemas per document type
pub mod schema;

// Mutable form state for an open document instance
pub mod record;

// Schema-derived validation
pub mod validate;

// Runtime-added table columns
pub mod table;

// Edit/print rendering
pub mod render;

// Session: record + dynamic columns + view mode + submission gating
pub mod session;

// Submission boundary (collaborator contract and the logging stub)
pub mod submit;

// Built-in document types and their registry
pub mod documents;
pub mod registry;

// Column totals and elapsed-time helpers
pub mod calc;

pub use error::FormError;
pub use record::{FieldValue, FormRecord, RowId, RowRecord, RowSet};
pub use render::{RenderedDocument, ViewMode};
pub use schema::{DocumentSchema, FieldDescriptor, FieldKind, SelectOption};
pub use session::FormSession;
pub use validate::ValidationErrorMap;
