//! Field constraints
//!
//! A [`FieldConstraint`] is the per-field validation rule a schema declares:
//! kind, requiredness, default value, numeric bounds and a free-text
//! description.

use crate::types::{FieldKind, Value};

// ============================================================================
// Numeric Range
// ============================================================================

/// Inclusive numeric bounds for integer and float fields.
///
/// Either bound may be left open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    /// Minimum value (inclusive)
    pub min: Option<f64>,
    /// Maximum value (inclusive)
    pub max: Option<f64>,
}

impl NumericRange {
    /// Closed range `[min, max]`
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Range `[min, +inf)`
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Range `(-inf, max]`
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Check whether `value` lies within the bounds
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Bounds are numbers and `min <= max` when both are set
    pub fn is_well_formed(&self) -> bool {
        let finite = |b: Option<f64>| b.map_or(true, |v| !v.is_nan());
        if !finite(self.min) || !finite(self.max) {
            return false;
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// Render bounds for error messages, e.g. `[0, 100]` or `[0, inf)`
pub fn describe_range(min: &Option<f64>, max: &Option<f64>) -> String {
    let lower = match min {
        Some(v) => format!("[{}", v),
        None => "(-inf".to_string(),
    };
    let upper = match max {
        Some(v) => format!("{}]", v),
        None => "inf)".to_string(),
    };
    format!("{}, {}", lower, upper)
}

// ============================================================================
// Field Constraint
// ============================================================================

/// Validation rule for one schema field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    /// Field name, unique within its schema
    pub name: String,
    /// Declared kind
    pub kind: FieldKind,
    /// Whether the field must be present and non-null
    pub required: bool,
    /// Value substituted when the field is absent
    pub default: Option<Value>,
    /// Inclusive bounds (integer and float kinds only)
    pub numeric_range: Option<NumericRange>,
    /// Documentation only
    pub description: Option<String>,
}

impl FieldConstraint {
    /// Create a new required field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            default: None,
            numeric_range: None,
            description: None,
        }
    }

    /// Set field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set default value (implies optional)
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    /// Optional field whose default is null
    pub fn nullable(self) -> Self {
        self.default_value(Value::Null)
    }

    /// Set numeric bounds
    pub fn range(mut self, range: NumericRange) -> Self {
        self.numeric_range = Some(range);
        self
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}
