//! Startup-built registry of record schemas.

use crate::error::SchemaError;
use crate::record::RecordInstance;
use crate::schema::RecordSchema;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A name-keyed table of record schemas.
///
/// Populated once at startup (one [`register`](Self::register) call per record
/// type) and read-only afterward; safe to share across callers.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<RecordSchema>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its record kind name.
    ///
    /// # Errors
    /// Returns [`SchemaError::DuplicateSchema`] if the kind is already
    /// registered.
    pub fn register(&mut self, schema: RecordSchema) -> Result<Arc<RecordSchema>, SchemaError> {
        let name = schema.name().to_string();
        if self.schemas.contains_key(&name) {
            return Err(SchemaError::DuplicateSchema { record: name });
        }
        let shared = Arc::new(schema);
        debug!(record = %name, width = shared.total_width(), "record schema registered");
        self.schemas.insert(name, Arc::clone(&shared));
        Ok(shared)
    }

    /// Looks up a schema by record kind name.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<Arc<RecordSchema>> {
        self.schemas.get(kind).cloned()
    }

    /// Creates a fresh instance of the named record kind.
    #[must_use]
    pub fn instantiate(&self, kind: &str) -> Option<RecordInstance> {
        self.get(kind).map(RecordInstance::new)
    }

    /// Returns the number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schema is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
