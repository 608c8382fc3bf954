//! Schema introspection
//!
//! The serialized shape read by the external database viewer: a mapping from
//! schema identifier to its ordered field list.
//!
//! ```json
//! {
//!   "user": [
//!     {"name": "age", "kind": {"type": "integer"}, "required": false,
//!      "default": null, "numeric_range": {"min": 0.0, "max": 120.0},
//!      "description": "Age in years"}
//!   ]
//! }
//! ```
//!
//! `default` is omitted for fields that declare none, so an explicit `null`
//! always means "defaults to null".

use std::sync::Arc;

use docschema_validation::{FieldConstraint, FieldKind, NumericRange, Schema, Value};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Serializable description of a field kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KindDescriptor {
    String,
    Integer,
    Float,
    Boolean,
    Url,
    Object { schema: String },
    List { items: Box<KindDescriptor> },
}

impl From<&FieldKind> for KindDescriptor {
    fn from(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::String,
            FieldKind::Integer => Self::Integer,
            FieldKind::Float => Self::Float,
            FieldKind::Boolean => Self::Boolean,
            FieldKind::Url => Self::Url,
            FieldKind::Object(schema) => Self::Object {
                schema: schema.identifier().to_string(),
            },
            FieldKind::List(items) => Self::List {
                items: Box::new(Self::from(items.as_ref())),
            },
        }
    }
}

/// Serializable numeric bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeDescriptor {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<&NumericRange> for RangeDescriptor {
    fn from(range: &NumericRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

/// Serializable field constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: KindDescriptor,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub numeric_range: Option<RangeDescriptor>,
    pub description: Option<String>,
}

impl From<&FieldConstraint> for FieldDescriptor {
    fn from(field: &FieldConstraint) -> Self {
        Self {
            name: field.name.clone(),
            kind: KindDescriptor::from(&field.kind),
            required: field.required,
            default: field.default.clone(),
            numeric_range: field.numeric_range.as_ref().map(RangeDescriptor::from),
            description: field.description.clone(),
        }
    }
}

/// One schema as exposed by introspection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDescriptor {
    pub identifier: String,
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl From<&Schema> for SchemaDescriptor {
    fn from(schema: &Schema) -> Self {
        Self {
            identifier: schema.identifier().to_string(),
            name: schema.name().to_string(),
            fields: schema.fields().iter().map(FieldDescriptor::from).collect(),
        }
    }
}

/// All registered schemas, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaCatalog {
    schemas: Vec<SchemaDescriptor>,
}

impl SchemaCatalog {
    pub fn from_schemas<'a>(schemas: impl IntoIterator<Item = &'a Arc<Schema>>) -> Self {
        Self {
            schemas: schemas
                .into_iter()
                .map(|s| SchemaDescriptor::from(s.as_ref()))
                .collect(),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&SchemaDescriptor> {
        self.schemas.iter().find(|s| s.identifier == identifier)
    }

    pub fn schemas(&self) -> &[SchemaDescriptor] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Render as a JSON value
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// Serialized as identifier -> field list so map order follows registration.
impl Serialize for SchemaCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schemas.len()))?;
        for schema in &self.schemas {
            map.serialize_entry(&schema.identifier, &schema.fields)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docschema_validation::{FieldConstraint, NumericRange};
    use serde_json::json;

    #[test]
    fn test_kind_descriptor_nesting() {
        let link = Schema::builder("ExtraLink")
            .field(FieldConstraint::new("label", FieldKind::String))
            .build()
            .unwrap();
        let kind = FieldKind::list(FieldKind::object(link));

        let json = serde_json::to_value(KindDescriptor::from(&kind)).unwrap();
        assert_eq!(
            json,
            json!({"type": "list", "items": {"type": "object", "schema": "extralink"}})
        );
    }

    #[test]
    fn test_field_descriptor_shape() {
        let field = FieldConstraint::new("age", FieldKind::Integer)
            .nullable()
            .range(NumericRange::new(0.0, 120.0))
            .description("Age in years");

        let json = serde_json::to_value(FieldDescriptor::from(&field)).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "age",
                "kind": {"type": "integer"},
                "required": false,
                "default": null,
                "numeric_range": {"min": 0.0, "max": 120.0},
                "description": "Age in years"
            })
        );
    }

    #[test]
    fn test_default_omitted_when_undeclared() {
        let field = FieldConstraint::new("name", FieldKind::String);
        let json = serde_json::to_value(FieldDescriptor::from(&field)).unwrap();
        assert!(json.get("default").is_none());
        assert_eq!(json["numeric_range"], json!(null));
    }

    #[test]
    fn test_catalog_keeps_registration_order() {
        let schemas: Vec<Arc<Schema>> = ["Zebra", "Apple"]
            .iter()
            .map(|n| {
                Arc::new(
                    Schema::builder(*n)
                        .field(FieldConstraint::new("x", FieldKind::Boolean))
                        .build()
                        .unwrap(),
                )
            })
            .collect();

        let catalog = SchemaCatalog::from_schemas(&schemas);
        let text = serde_json::to_string(&catalog).unwrap();
        assert!(text.find("\"zebra\"").unwrap() < text.find("\"apple\"").unwrap());
        assert_eq!(catalog.get("apple").unwrap().name, "Apple");
    }
}
