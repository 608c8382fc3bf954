//! Schema registry
//!
//! Holds schemas keyed by their lowercase identifier, in registration order.
//! Writers are serialized by a lock and publish a fresh immutable state;
//! readers clone the current `Arc` and work on that snapshot without holding
//! the lock.

use std::collections::HashMap;
use std::sync::Arc;

use docschema_validation::{validate_with_config, Document, Schema, ValidationConfig, ValidationResult};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::SchemaCatalog;
use crate::error::{RegistryError, Result};

#[derive(Debug, Clone, Default)]
struct RegistryState {
    order: Vec<Arc<Schema>>,
    index: HashMap<String, usize>,
}

/// Registry of named schemas
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    state: RwLock<Arc<RegistryState>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its identifier
    ///
    /// Fails with [`RegistryError::DuplicateSchema`] if another schema already
    /// uses the same identifier (e.g. `User` and `USER`).
    pub fn register(&self, schema: impl Into<Arc<Schema>>) -> Result<Arc<Schema>> {
        let schema = schema.into();
        let identifier = schema.identifier().to_string();

        let mut guard = self.state.write();
        if guard.index.contains_key(&identifier) {
            warn!(schema = %schema.name(), %identifier, "rejected duplicate schema registration");
            return Err(RegistryError::DuplicateSchema { identifier });
        }

        let mut next = RegistryState::clone(&guard);
        next.index.insert(identifier.clone(), next.order.len());
        next.order.push(schema.clone());
        *guard = Arc::new(next);

        debug!(
            schema = %schema.name(),
            %identifier,
            fields = schema.fields().len(),
            "registered schema"
        );
        Ok(schema)
    }

    /// Look up a schema by identifier
    pub fn get(&self, identifier: &str) -> Result<Arc<Schema>> {
        self.list_all().get(identifier)
    }

    /// Whether a schema with this identifier is registered
    pub fn contains(&self, identifier: &str) -> bool {
        self.state.read().index.contains_key(identifier)
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.state.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all schemas in registration order
    ///
    /// The snapshot is unaffected by later registrations and can be iterated
    /// any number of times.
    pub fn list_all(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            state: Arc::clone(&self.state.read()),
        }
    }

    /// Introspection view of every registered schema
    pub fn catalog(&self) -> SchemaCatalog {
        SchemaCatalog::from_schemas(self.list_all().iter())
    }

    /// Look up `identifier` and validate `document` against it
    ///
    /// The outer `Result` carries lookup failures; the inner one is the
    /// validation outcome.
    pub fn validate(
        &self,
        identifier: &str,
        document: &Document,
        config: &ValidationConfig,
    ) -> Result<ValidationResult<Document>> {
        let schema = self.get(identifier)?;
        let result = validate_with_config(&schema, document, config);
        match &result {
            Ok(_) => debug!(schema = %identifier, "document valid"),
            Err(errors) => debug!(schema = %identifier, errors = errors.len(), "document invalid"),
        }
        Ok(result)
    }
}

/// Immutable view of the registry at one point in time
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    state: Arc<RegistryState>,
}

impl RegistrySnapshot {
    /// Schemas in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Schema>> + '_ {
        self.state.order.iter()
    }

    pub fn get(&self, identifier: &str) -> Result<Arc<Schema>> {
        self.state
            .index
            .get(identifier)
            .map(|&i| Arc::clone(&self.state.order[i]))
            .ok_or_else(|| RegistryError::UnknownSchema {
                identifier: identifier.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.state.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.order.is_empty()
    }

    /// Identifiers in registration order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|s| s.identifier())
    }
}

impl<'a> IntoIterator for &'a RegistrySnapshot {
    type Item = &'a Arc<Schema>;
    type IntoIter = std::slice::Iter<'a, Arc<Schema>>;

    fn into_iter(self) -> Self::IntoIter {
        self.state.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docschema_validation::{FieldConstraint, FieldKind};

    fn schema(name: &str) -> Schema {
        Schema::builder(name)
            .field(FieldConstraint::new("title", FieldKind::String))
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = SchemaRegistry::new();
        registry.register(schema("Product")).unwrap();

        let found = registry.get("product").unwrap();
        assert_eq!(found.name(), "Product");
        assert!(registry.contains("product"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_colliding_identifiers_rejected() {
        let registry = SchemaRegistry::new();
        registry.register(schema("User")).unwrap();

        let err = registry.register(schema("USER")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateSchema {
                identifier: "user".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_schema() {
        let registry = SchemaRegistry::new();
        assert!(matches!(
            registry.get("ghost"),
            Err(RegistryError::UnknownSchema { identifier }) if identifier == "ghost"
        ));
    }

    #[test]
    fn test_snapshot_is_stable_and_restartable() {
        let registry = SchemaRegistry::new();
        registry.register(schema("B")).unwrap();
        registry.register(schema("A")).unwrap();

        let snapshot = registry.list_all();
        registry.register(schema("C")).unwrap();

        let first: Vec<_> = snapshot.identifiers().collect();
        let second: Vec<_> = (&snapshot).into_iter().map(|s| s.identifier()).collect();
        assert_eq!(first, vec!["b", "a"]);
        assert_eq!(first, second);
        assert_eq!(registry.list_all().len(), 3);
    }
}
