//! docschema Validation
//!
//! Schema-driven document validation. A [`Schema`] is a named, ordered list
//! of [`FieldConstraint`]s; [`validate`] checks a [`Document`] against it and
//! returns either the normalized document (defaults substituted) or a
//! complete, field-attributed error report.
//!
//! # Features
//!
//! - **Default**: Core validation without serialization
//! - **serde**: `Serialize` for documents and errors, `serde_json` conversions
//!
//! # Example
//!
//! ```rust
//! use docschema_validation::{validate, Document, FieldConstraint, FieldKind, Schema, ValidationError, Value};
//!
//! let user = Schema::builder("User")
//!     .field(FieldConstraint::new("name", FieldKind::String))
//!     .field(FieldConstraint::new("is_active", FieldKind::Boolean).default_value(true))
//!     .build()
//!     .unwrap();
//!
//! let normalized = validate(&user, &Document::new().with("name", "Ada")).unwrap();
//! assert_eq!(normalized.get("is_active"), Some(&Value::Bool(true)));
//!
//! let errors = validate(&user, &Document::new()).unwrap_err();
//! assert!(matches!(&errors.errors[0], ValidationError::MissingField { path } if path == "name"));
//! ```

// Public modules
pub mod config;
pub mod constraints;
pub mod errors;
pub mod formats;
pub mod schema;
pub mod types;
pub mod validators;

#[cfg(feature = "serde")]
mod json;

// Re-export commonly used types
pub use config::{ExtraFields, ValidationConfig};
pub use constraints::{FieldConstraint, NumericRange};
pub use errors::{
    ErrorType, SchemaError, ValidationContext, ValidationError, ValidationErrors, ValidationResult,
};
pub use schema::{Schema, SchemaBuilder};
pub use types::{Document, FieldKind, Value};
pub use validators::{validate, validate_value, validate_with_config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
