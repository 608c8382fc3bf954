//! Schema declarations
//!
//! A [`Schema`] is a named, ordered list of [`FieldConstraint`]s. Its
//! identifier (the collection name) is always the lowercase form of the
//! declared name.

use crate::constraints::FieldConstraint;
use crate::errors::SchemaError;
use crate::validators::normalize_default;
use std::collections::HashSet;

/// Named, ordered set of field constraints
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    identifier: String,
    fields: Vec<FieldConstraint>,
}

impl Schema {
    /// Build a schema, checking the declaration invariants
    ///
    /// Declared defaults are checked like supplied values and stored in
    /// normalized form (an integer default on a float field becomes a float).
    pub fn new(name: impl Into<String>, mut fields: Vec<FieldConstraint>) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }

        let identifier = name.to_lowercase();
        check_fields(&identifier, &mut fields)?;

        Ok(Self {
            name,
            identifier,
            fields,
        })
    }

    /// Start a builder for schema `name`
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declared name (e.g. `Player`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection identifier (e.g. `player`)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Fields in declared order
    pub fn fields(&self) -> &[FieldConstraint] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldConstraint> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn check_fields(schema: &str, fields: &mut [FieldConstraint]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in fields.iter_mut() {
        if !seen.insert(field.name.clone()) {
            return Err(SchemaError::DuplicateField {
                schema: schema.to_string(),
                field: field.name.clone(),
            });
        }

        if field.required && field.default.is_some() {
            return Err(SchemaError::RequiredWithDefault {
                schema: schema.to_string(),
                field: field.name.clone(),
            });
        }

        if let Some(range) = &field.numeric_range {
            if !field.kind.is_numeric() {
                return Err(SchemaError::RangeOnNonNumeric {
                    schema: schema.to_string(),
                    field: field.name.clone(),
                    kind: field.kind.to_string(),
                });
            }
            if !range.is_well_formed() {
                return Err(SchemaError::InvalidRange {
                    schema: schema.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        if let Some(default) = &field.default {
            if !field.kind.matches_shape(default) {
                return Err(SchemaError::DefaultMismatch {
                    schema: schema.to_string(),
                    field: field.name.clone(),
                    kind: field.kind.to_string(),
                });
            }

            let normalized = normalize_default(field, default).map_err(|errors| {
                SchemaError::InvalidDefault {
                    schema: schema.to_string(),
                    field: field.name.clone(),
                    reason: errors
                        .into_iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("; "),
                }
            })?;
            field.default = Some(normalized);
        }
    }

    Ok(())
}

/// Incremental schema construction
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldConstraint>,
}

impl SchemaBuilder {
    /// Append a field
    pub fn field(mut self, field: FieldConstraint) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate the declaration and produce the schema
    pub fn build(self) -> Result<Schema, SchemaError> {
        Schema::new(self.name, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::NumericRange;
    use crate::types::{Document, FieldKind, Value};

    #[test]
    fn test_identifier_is_lowercase_name() {
        let schema = Schema::builder("BlogPost")
            .field(FieldConstraint::new("title", FieldKind::String))
            .build()
            .unwrap();
        assert_eq!(schema.name(), "BlogPost");
        assert_eq!(schema.identifier(), "blogpost");
    }

    #[test]
    fn test_fields_keep_declared_order() {
        let schema = Schema::builder("User")
            .field(FieldConstraint::new("name", FieldKind::String))
            .field(FieldConstraint::new("email", FieldKind::String))
            .field(FieldConstraint::new("age", FieldKind::Integer).nullable())
            .build()
            .unwrap();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "age"]);
        assert!(schema.field("email").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Schema::builder("User")
            .field(FieldConstraint::new("name", FieldKind::String))
            .field(FieldConstraint::new("name", FieldKind::Integer))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = Schema::builder("Player")
            .field(FieldConstraint::new("age", FieldKind::Integer).range(NumericRange::new(100.0, 0.0)))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRange { .. }));
    }

    #[test]
    fn test_range_on_string_rejected() {
        let err = Schema::builder("Player")
            .field(FieldConstraint::new("bio", FieldKind::String).range(NumericRange::new(0.0, 1.0)))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::RangeOnNonNumeric { .. }));
    }

    #[test]
    fn test_default_must_match_kind() {
        let err = Schema::builder("User")
            .field(FieldConstraint::new("is_active", FieldKind::Boolean).default_value("yes"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DefaultMismatch { .. }));
    }

    #[test]
    fn test_integer_default_on_float_field_stored_as_float() {
        let schema = Schema::builder("Product")
            .field(FieldConstraint::new("price", FieldKind::Float).default_value(0i64))
            .build()
            .unwrap();
        assert_eq!(schema.field("price").unwrap().default, Some(Value::Float(0.0)));
    }

    #[test]
    fn test_default_outside_range_rejected() {
        let err = Schema::builder("Player")
            .field(
                FieldConstraint::new("age", FieldKind::Integer)
                    .default_value(150i64)
                    .range(NumericRange::new(0.0, 100.0)),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidDefault {
                schema: "player".to_string(),
                field: "age".to_string(),
                reason: "age: 150 is outside [0, 100]".to_string(),
            }
        );
    }

    #[test]
    fn test_object_default_missing_required_field_rejected() {
        let link = Schema::builder("ExtraLink")
            .field(FieldConstraint::new("label", FieldKind::String))
            .build()
            .unwrap();
        let err = Schema::builder("Player")
            .field(
                FieldConstraint::new("links", FieldKind::list(FieldKind::object(link)))
                    .default_value(Value::List(vec![Value::Object(Document::new())])),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefault { ref reason, .. } if reason == "links[0].label: field required"));
    }

    #[test]
    fn test_url_default_must_be_well_formed() {
        let err = Schema::builder("ExtraLink")
            .field(FieldConstraint::new("url", FieldKind::Url).default_value("not a url"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefault { .. }));
    }

    #[test]
    fn test_required_with_default_rejected() {
        let mut field = FieldConstraint::new("is_active", FieldKind::Boolean);
        field.default = Some(Value::Bool(true));
        let err = Schema::new("User", vec![field]).unwrap_err();
        assert!(matches!(err, SchemaError::RequiredWithDefault { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Schema::new("  ", vec![]), Err(SchemaError::EmptyName)));
    }
}
