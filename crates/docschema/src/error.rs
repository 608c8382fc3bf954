//! Error types for the schema registry

use docschema_validation::SchemaError;
use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Registry-level failures, fatal to the registration or lookup call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("schema '{identifier}' is already registered")]
    DuplicateSchema { identifier: String },

    #[error("unknown schema '{identifier}'")]
    UnknownSchema { identifier: String },

    #[error("invalid schema declaration: {0}")]
    InvalidSchema(#[from] SchemaError),
}
