//! Field-level checks shared by every record validator

use super::errors::{ErrorSink, ViolationKind};

/// Constraints on one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub max_length: usize,
}

impl FieldRule {
    pub const fn required(field: &'static str, max_length: usize) -> Self {
        Self {
            field,
            required: true,
            max_length,
        }
    }

    pub const fn optional(field: &'static str, max_length: usize) -> Self {
        Self {
            field,
            required: false,
            max_length,
        }
    }

    /// Run both checks on `value`. They are independent, so a required value
    /// made only of whitespace can be both missing and too long.
    pub fn check(&self, value: Option<&str>, errors: &mut dyn ErrorSink) {
        if self.required && is_blank(value) {
            errors.reject_value(self.field, ViolationKind::RequiredFieldMissing);
        }

        if let Some(value) = value
            && value.chars().count() > self.max_length
        {
            errors.reject_value(
                self.field,
                ViolationKind::FieldTooLong {
                    max_length: self.max_length,
                },
            );
        }
    }
}

/// `None`, empty and whitespace-only values are blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Check every rule against its value, in order, reporting all violations.
pub fn check_fields(fields: &[(FieldRule, Option<&str>)], errors: &mut dyn ErrorSink) {
    for (rule, value) in fields {
        rule.check(*value, errors);
    }
}

/// A retired record has to say why.
pub fn check_retire_reason(retired: bool, retire_reason: Option<&str>, errors: &mut dyn ErrorSink) {
    if retired && is_blank(retire_reason) {
        errors.reject_value("retireReason", ViolationKind::RequiredFieldMissing);
    }
}
