//! Core validation engine
//!
//! Walks a document field by field in the schema's declared order,
//! accumulating errors instead of stopping at the first one, and builds the
//! normalized document (defaults substituted, numbers coerced to their
//! declared kind) along the way.

use crate::config::{ExtraFields, ValidationConfig};
use crate::constraints::{FieldConstraint, NumericRange};
use crate::errors::{ValidationContext, ValidationError, ValidationErrors, ValidationResult};
use crate::formats;
use crate::schema::Schema;
use crate::types::{Document, FieldKind, Value};

// ============================================================================
// Public API
// ============================================================================

/// Validate a document against a schema with the default configuration
///
/// # Example
///
/// ```
/// use docschema_validation::{validate, Document, FieldConstraint, FieldKind, NumericRange, Schema};
///
/// let player = Schema::builder("Player")
///     .field(FieldConstraint::new("full_name", FieldKind::String))
///     .field(FieldConstraint::new("age", FieldKind::Integer).nullable().range(NumericRange::new(0.0, 100.0)))
///     .build()
///     .unwrap();
///
/// let ok = validate(&player, &Document::new().with("full_name", "A")).unwrap();
/// assert!(ok.get("age").unwrap().is_null());
///
/// let too_old = Document::new().with("full_name", "A").with("age", 150i64);
/// assert!(validate(&player, &too_old).is_err());
/// ```
pub fn validate(schema: &Schema, document: &Document) -> ValidationResult<Document> {
    validate_with_config(schema, document, &ValidationConfig::default())
}

/// Validate a document against a schema
///
/// Returns the normalized document, or every violation found in one pass.
pub fn validate_with_config(
    schema: &Schema,
    document: &Document,
    config: &ValidationConfig,
) -> ValidationResult<Document> {
    let mut ctx = ValidationContext::new();
    let mut errors = ValidationErrors::new();

    let normalized = validate_document(document, schema, config, &mut ctx, &mut errors);

    errors.into_result().map(|()| normalized)
}

/// Validate an arbitrary value that is expected to be a document
///
/// A non-object root is reported as a type mismatch at the empty path.
pub fn validate_value(
    value: &Value,
    schema: &Schema,
    config: &ValidationConfig,
) -> ValidationResult<Document> {
    match value {
        Value::Object(document) => validate_with_config(schema, document, config),
        other => {
            let mut errors = ValidationErrors::new();
            errors.add(ValidationError::TypeMismatch {
                path: String::new(),
                expected: format!("object<{}>", schema.identifier()),
                actual: other.type_name().to_string(),
            });
            Err(errors)
        }
    }
}

/// Check a declared default against its own field and return it normalized
///
/// The default goes through the same kind, range and nested-schema rules as
/// a supplied value (lenient mode), so what gets substituted is canonical.
pub(crate) fn normalize_default(field: &FieldConstraint, default: &Value) -> ValidationResult<Value> {
    if default.is_null() {
        return Ok(Value::Null);
    }

    let config = ValidationConfig::default();
    let mut ctx = ValidationContext::new();
    let mut errors = ValidationErrors::new();

    ctx.push_field(&field.name);
    let normalized = validate_kind(
        default,
        &field.kind,
        field.numeric_range.as_ref(),
        &config,
        &mut ctx,
        &mut errors,
    );
    ctx.pop();

    errors.into_result().map(|()| normalized)
}

// ============================================================================
// Document Validation
// ============================================================================

/// Validate every declared field, then apply the extra-field policy.
///
/// Output order is declared fields first, then passed-through extras in
/// their input order, so normalizing twice yields the same document.
pub fn validate_document(
    document: &Document,
    schema: &Schema,
    config: &ValidationConfig,
    ctx: &mut ValidationContext,
    errors: &mut ValidationErrors,
) -> Document {
    let mut normalized = Document::new();

    for field in schema.fields() {
        ctx.push_field(&field.name);
        if let Some(value) = validate_field(document.get(&field.name), field, config, ctx, errors) {
            normalized.insert(field.name.clone(), value);
        }
        ctx.pop();
    }

    for (key, value) in document.iter() {
        if schema.field(key).is_some() {
            continue;
        }
        match config.extra {
            ExtraFields::Allow => {
                normalized.insert(key, value.clone());
            }
            ExtraFields::Ignore => {}
            ExtraFields::Forbid => {
                ctx.push_field(key);
                errors.add(ValidationError::ExtraField {
                    path: ctx.current_path(),
                });
                ctx.pop();
            }
        }
    }

    normalized
}

fn validate_field(
    value: Option<&Value>,
    field: &FieldConstraint,
    config: &ValidationConfig,
    ctx: &mut ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    match value {
        None if field.required => {
            errors.add(ValidationError::MissingField {
                path: ctx.current_path(),
            });
            None
        }
        None => field.default.clone(),
        Some(Value::Null) if field.required => {
            errors.add(ValidationError::NullNotAllowed {
                path: ctx.current_path(),
            });
            None
        }
        Some(Value::Null) => Some(Value::Null),
        Some(value) => Some(validate_kind(
            value,
            &field.kind,
            field.numeric_range.as_ref(),
            config,
            ctx,
            errors,
        )),
    }
}

// ============================================================================
// Kind Dispatch
// ============================================================================

fn validate_kind(
    value: &Value,
    kind: &FieldKind,
    range: Option<&NumericRange>,
    config: &ValidationConfig,
    ctx: &mut ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    match kind {
        FieldKind::String => validate_string(value, kind, ctx, errors),
        FieldKind::Integer => validate_integer(value, kind, range, config, ctx, errors),
        FieldKind::Float => validate_float(value, kind, range, config, ctx, errors),
        FieldKind::Boolean => validate_bool(value, kind, ctx, errors),
        FieldKind::Url => validate_url(value, kind, ctx, errors),
        FieldKind::Object(schema) => validate_object(value, kind, schema, config, ctx, errors),
        FieldKind::List(items) => validate_list(value, kind, items, config, ctx, errors),
    }
}

fn type_mismatch(value: &Value, expected: &FieldKind, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    errors.add(ValidationError::TypeMismatch {
        path: ctx.current_path(),
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    });
}

// ============================================================================
// Scalar Types
// ============================================================================

fn validate_string(
    value: &Value,
    kind: &FieldKind,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    if !matches!(value, Value::String(_)) {
        type_mismatch(value, kind, ctx, errors);
    }
    value.clone()
}

fn validate_bool(
    value: &Value,
    kind: &FieldKind,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    if !matches!(value, Value::Bool(_)) {
        type_mismatch(value, kind, ctx, errors);
    }
    value.clone()
}

fn validate_url(
    value: &Value,
    kind: &FieldKind,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    match value {
        Value::String(s) => {
            if !formats::validate_url(s) {
                errors.add(ValidationError::InvalidFormat {
                    path: ctx.current_path(),
                    format: "url".to_string(),
                });
            }
        }
        _ => type_mismatch(value, kind, ctx, errors),
    }
    value.clone()
}

// ============================================================================
// Numeric Types
// ============================================================================

fn validate_integer(
    value: &Value,
    kind: &FieldKind,
    range: Option<&NumericRange>,
    config: &ValidationConfig,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    let normalized = match value {
        Value::Int(_) => value.clone(),
        // Lenient mode accepts 3.0 as 3
        Value::Float(f) if !config.strict && is_integral(*f) => Value::Int(*f as i64),
        _ => {
            type_mismatch(value, kind, ctx, errors);
            return value.clone();
        }
    };

    check_range(&normalized, range, ctx, errors);
    normalized
}

fn validate_float(
    value: &Value,
    kind: &FieldKind,
    range: Option<&NumericRange>,
    config: &ValidationConfig,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    let normalized = match value {
        Value::Float(_) => value.clone(),
        Value::Int(i) if !config.strict => Value::Float(*i as f64),
        _ => {
            type_mismatch(value, kind, ctx, errors);
            return value.clone();
        }
    };

    check_range(&normalized, range, ctx, errors);
    normalized
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn check_range(
    value: &Value,
    range: Option<&NumericRange>,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) {
    let (Some(range), Some(number)) = (range, value.as_f64()) else {
        return;
    };

    if !range.contains(number) {
        errors.add(ValidationError::OutOfRange {
            path: ctx.current_path(),
            min: range.min,
            max: range.max,
            actual: value.clone(),
        });
    }
}

// ============================================================================
// Composite Types
// ============================================================================

fn validate_object(
    value: &Value,
    kind: &FieldKind,
    schema: &Schema,
    config: &ValidationConfig,
    ctx: &mut ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    match value {
        Value::Object(document) => {
            Value::Object(validate_document(document, schema, config, ctx, errors))
        }
        _ => {
            type_mismatch(value, kind, ctx, errors);
            value.clone()
        }
    }
}

fn validate_list(
    value: &Value,
    kind: &FieldKind,
    item_kind: &FieldKind,
    config: &ValidationConfig,
    ctx: &mut ValidationContext,
    errors: &mut ValidationErrors,
) -> Value {
    let Value::List(items) = value else {
        type_mismatch(value, kind, ctx, errors);
        return value.clone();
    };

    let mut normalized = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        ctx.push_index(i);
        if item.is_null() {
            type_mismatch(item, item_kind, ctx, errors);
            normalized.push(Value::Null);
        } else {
            normalized.push(validate_kind(item, item_kind, None, config, ctx, errors));
        }
        ctx.pop();
    }

    Value::List(normalized)
}
