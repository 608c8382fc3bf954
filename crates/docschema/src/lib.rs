//! docschema
//!
//! Collection schemas for an external database viewer, plus the registry
//! that exposes them.
//!
//! - [`SchemaRegistry`]: schemas keyed by lowercase identifier, in
//!   registration order
//! - [`collections`]: the built-in `user`, `product`, `extralink` and
//!   `player` schemas
//! - [`catalog`]: the introspection shape served from `GET /schema`
//!
//! Validation itself lives in `docschema-validation` and is re-exported here.
//!
//! # Example
//!
//! ```rust
//! use docschema::{builtin_registry, Document, ValidationConfig};
//!
//! let registry = builtin_registry().unwrap();
//! let doc = Document::new().with("full_name", "A").with("age", 150i64);
//!
//! let result = registry.validate("player", &doc, &ValidationConfig::default()).unwrap();
//! assert!(result.is_err());
//! ```

pub mod catalog;
pub mod collections;
pub mod error;
pub mod registry;

pub use catalog::{FieldDescriptor, KindDescriptor, RangeDescriptor, SchemaCatalog, SchemaDescriptor};
pub use collections::{builtin_registry, register_builtin};
pub use error::{RegistryError, Result};
pub use registry::{RegistrySnapshot, SchemaRegistry};

pub use docschema_validation::{
    validate, validate_value, validate_with_config, Document, ErrorType, ExtraFields,
    FieldConstraint, FieldKind, NumericRange, Schema, SchemaError, ValidationConfig,
    ValidationError, ValidationErrors, ValidationResult, Value,
};
