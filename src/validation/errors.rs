use serde::Serialize;
use std::fmt;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    RequiredFieldMissing,
    FieldTooLong { max_length: usize },
}

impl ViolationKind {
    /// Stable message code, suitable as a lookup key for a message catalog.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "error.null",
            Self::FieldTooLong { .. } => "error.exceededMaxLengthOfField",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "is required"),
            Self::FieldTooLong { max_length } => {
                write!(f, "exceeds the maximum length of {max_length} characters")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// Where validators report what they find.
pub trait ErrorSink {
    fn reject_value(&mut self, field: &str, kind: ViolationKind);

    fn has_errors(&self) -> bool;

    fn has_field_errors(&self, field: &str) -> bool;
}

/// Append-only list of violations for one validated object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Errors {
    object_name: String,
    violations: Vec<FieldViolation>,
}

impl Errors {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            violations: Vec::new(),
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    pub fn has_field_error(&self, field: &str, kind: ViolationKind) -> bool {
        self.field_errors(field).any(|v| v.kind == kind)
    }
}

impl ErrorSink for Errors {
    fn reject_value(&mut self, field: &str, kind: ViolationKind) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            kind,
        });
    }

    fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors(field).next().is_some()
    }
}
