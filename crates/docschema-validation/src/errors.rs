//! Validation error types
//!
//! Document-level problems are collected into [`ValidationErrors`] and never
//! abort validation early. Declaration-level problems surface as
//! [`SchemaError`] when a schema is built.

use std::fmt;

use thiserror::Error;

use crate::constraints::describe_range;
use crate::types::Value;

// ============================================================================
// Validation Result
// ============================================================================

/// Validation result type
///
/// `Ok` carries the normalized document, `Err` the complete error report.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// Validation Errors Collection
// ============================================================================

/// Ordered collection of validation errors
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationErrors {
    /// List of individual validation errors
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result - Ok if no errors, Err if there are errors
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Errors attributed to exactly `path`
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.path() == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ============================================================================
// Single Validation Error
// ============================================================================

/// A single field-attributed validation error.
///
/// `path` is dotted for nested objects and index-qualified for list
/// elements, e.g. `extra_links[0].label`.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum ValidationError {
    /// Required field absent
    #[error("{path}: field required")]
    MissingField { path: String },

    /// Required field present but null
    #[error("{path}: null is not allowed")]
    NullNotAllowed { path: String },

    /// Value shape does not match the declared kind
    #[error("{path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Numeric value outside the declared inclusive bounds
    #[error("{path}: {actual} is outside {}", describe_range(.min, .max))]
    OutOfRange {
        path: String,
        min: Option<f64>,
        max: Option<f64>,
        actual: Value,
    },

    /// String does not match a required format (e.g. url)
    #[error("{path}: invalid {format} format")]
    InvalidFormat { path: String, format: String },

    /// Undeclared field under the forbid policy
    #[error("{path}: extra fields not permitted")]
    ExtraField { path: String },
}

impl ValidationError {
    /// Path of the offending field
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::NullNotAllowed { path }
            | Self::TypeMismatch { path, .. }
            | Self::OutOfRange { path, .. }
            | Self::InvalidFormat { path, .. }
            | Self::ExtraField { path } => path,
        }
    }

    /// Error classification
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::MissingField { .. } => ErrorType::Missing,
            Self::NullNotAllowed { .. } => ErrorType::NullNotAllowed,
            Self::TypeMismatch { .. } => ErrorType::TypeError,
            Self::OutOfRange { .. } => ErrorType::RangeError,
            Self::InvalidFormat { .. } => ErrorType::FormatError,
            Self::ExtraField { .. } => ErrorType::ExtraForbidden,
        }
    }
}

// ============================================================================
// Error Type Classification
// ============================================================================

/// Classification of validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Required field missing
    Missing,

    /// Null given for a required field
    NullNotAllowed,

    /// Type mismatch error (e.g., expected string, got integer)
    TypeError,

    /// Numeric bounds violation
    RangeError,

    /// Invalid format (e.g., malformed URL)
    FormatError,

    /// Extra field not allowed
    ExtraForbidden,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::NullNotAllowed => write!(f, "null_not_allowed"),
            Self::TypeError => write!(f, "type_error"),
            Self::RangeError => write!(f, "out_of_range"),
            Self::FormatError => write!(f, "format_error"),
            Self::ExtraForbidden => write!(f, "extra_forbidden"),
        }
    }
}

// ============================================================================
// Schema Declaration Errors
// ============================================================================

/// A schema declaration that breaks the data-model invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema name must not be empty")]
    EmptyName,

    #[error("schema '{schema}': duplicate field '{field}'")]
    DuplicateField { schema: String, field: String },

    #[error("schema '{schema}': field '{field}' is required but declares a default")]
    RequiredWithDefault { schema: String, field: String },

    #[error("schema '{schema}': numeric range on non-numeric field '{field}' ({kind})")]
    RangeOnNonNumeric {
        schema: String,
        field: String,
        kind: String,
    },

    #[error("schema '{schema}': field '{field}' has min greater than max")]
    InvalidRange { schema: String, field: String },

    #[error("schema '{schema}': default for '{field}' does not match kind {kind}")]
    DefaultMismatch {
        schema: String,
        field: String,
        kind: String,
    },

    #[error("schema '{schema}': default for '{field}' is invalid: {reason}")]
    InvalidDefault {
        schema: String,
        field: String,
        reason: String,
    },
}

// ============================================================================
// Validation Context
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum PathSegment {
    Field(String),
    Index(usize),
}

/// Tracks the current location while walking nested documents
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    path: Vec<PathSegment>,
}

impl ValidationContext {
    /// Create a new validation context
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Enter a named field
    pub fn push_field(&mut self, field: &str) {
        self.path.push(PathSegment::Field(field.to_string()));
    }

    /// Enter a list element
    pub fn push_index(&mut self, index: usize) {
        self.path.push(PathSegment::Index(index));
    }

    /// Leave the innermost segment
    pub fn pop(&mut self) {
        self.path.pop();
    }

    /// Nesting depth
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Current path, e.g. `extra_links[0].url`
    pub fn current_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}
