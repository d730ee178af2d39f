//! Document registry: built-in document types and session opening

use std::collections::HashMap;

use crate::documents;
use crate::error::FormError;
use crate::schema::DocumentSchema;
use crate::session::FormSession;

/// Registry of known document types
pub struct DocumentRegistry {
    schemas: HashMap<String, DocumentSchema>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: HashMap::new(),
        };
        registry.register_builtins();
        registry
    }

    /// Register a document type; replaces any previous schema for the type
    pub fn register(&mut self, schema: DocumentSchema) {
        self.schemas.insert(schema.doc_type.clone(), schema);
    }

    pub fn get(&self, doc_type: &str) -> Option<&DocumentSchema> {
        self.schemas.get(doc_type)
    }

    pub fn list(&self) -> Vec<&DocumentSchema> {
        self.schemas.values().collect()
    }

    /// Open a fresh instance of a document type
    pub fn open(&self, doc_type: &str) -> Result<FormSession, FormError> {
        let schema = self
            .schemas
            .get(doc_type)
            .ok_or_else(|| FormError::UnknownDocumentType(doc_type.to_string()))?;
        Ok(FormSession::new(schema.clone()))
    }

    fn register_builtins(&mut self) {
        self.register(documents::meeting_room_booking());
        self.register(documents::invoice_intake());
        self.register(documents::kyc_client_pack());
        self.register(documents::site_inspection_checklist());
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
