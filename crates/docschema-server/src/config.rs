//! Command-line and environment configuration

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use docschema::{ExtraFields, ValidationConfig};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "docschema-server")]
#[command(about = "Schema introspection and document validation server")]
pub struct Args {
    /// Address to bind to
    #[arg(short, long, env = "DOCSCHEMA_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCSCHEMA_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Policy for fields not declared in the schema
    #[arg(long, env = "DOCSCHEMA_EXTRA_FIELDS", value_enum, default_value_t = ExtraPolicy::Allow)]
    pub extra_fields: ExtraPolicy,

    /// Require exact numeric types (no int/float coercion)
    #[arg(long, env = "DOCSCHEMA_STRICT")]
    pub strict: bool,
}

impl Args {
    /// Validation settings applied to every request
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig::new()
            .extra(self.extra_fields.into())
            .strict(self.strict)
    }
}

/// CLI spelling of [`ExtraFields`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraPolicy {
    /// Pass undeclared fields through unchanged
    Allow,
    /// Drop undeclared fields
    Ignore,
    /// Reject documents with undeclared fields
    Forbid,
}

impl From<ExtraPolicy> for ExtraFields {
    fn from(policy: ExtraPolicy) -> Self {
        match policy {
            ExtraPolicy::Allow => ExtraFields::Allow,
            ExtraPolicy::Ignore => ExtraFields::Ignore,
            ExtraPolicy::Forbid => ExtraFields::Forbid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["docschema-server"]).unwrap();
        assert_eq!(args.bind.port(), 8000);
        assert_eq!(args.log_level, Level::INFO);
        assert_eq!(args.validation_config(), ValidationConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "docschema-server",
            "--bind",
            "0.0.0.0:9000",
            "--extra-fields",
            "forbid",
            "--strict",
        ])
        .unwrap();

        let config = args.validation_config();
        assert_eq!(config.extra, ExtraFields::Forbid);
        assert!(config.strict);
        assert_eq!(args.bind.port(), 9000);
    }
}
