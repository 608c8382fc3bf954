//! Configuration options for validation behavior

// ============================================================================
// Extra Field Handling
// ============================================================================

/// How to handle fields present in a document but not declared in its schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFields {
    /// Keep extra fields unchanged in the normalized document (default)
    #[default]
    Allow,
    /// Accept the document but drop extra fields from the output
    Ignore,
    /// Report each extra field as a validation error
    Forbid,
}

// ============================================================================
// Validation Config
// ============================================================================

/// Configuration options for validation behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// How to handle extra fields
    pub extra: ExtraFields,

    /// Require exact numeric types.
    ///
    /// When off, integers are accepted for float fields and integral floats
    /// for integer fields; both are normalized to the declared kind.
    pub strict: bool,
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extra field handling
    pub fn extra(mut self, extra: ExtraFields) -> Self {
        self.extra = extra;
        self
    }

    /// Forbid extra fields
    pub fn forbid_extra(mut self) -> Self {
        self.extra = ExtraFields::Forbid;
        self
    }

    /// Drop extra fields from the output
    pub fn ignore_extra(mut self) -> Self {
        self.extra = ExtraFields::Ignore;
        self
    }

    /// Pass extra fields through
    pub fn allow_extra(mut self) -> Self {
        self.extra = ExtraFields::Allow;
        self
    }

    /// Enable or disable strict numeric typing
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
