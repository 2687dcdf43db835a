use super::RecordValidator;
use super::errors::ErrorSink;
use super::rules::{FieldRule, check_fields, check_retire_reason};
use crate::models::{Location, LocationTag};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationTagValidator;

impl LocationTagValidator {
    const NAME: FieldRule = FieldRule::required("name", 50);
    const DESCRIPTION: FieldRule = FieldRule::optional("description", 255);
    const RETIRE_REASON: FieldRule = FieldRule::optional("retireReason", 255);

    pub fn new() -> Self {
        Self
    }
}

impl RecordValidator<LocationTag> for LocationTagValidator {
    fn validate(&self, tag: &LocationTag, errors: &mut dyn ErrorSink) {
        check_fields(
            &[
                (Self::NAME, Some(tag.name.as_str())),
                (Self::DESCRIPTION, tag.description.as_deref()),
                (Self::RETIRE_REASON, tag.retire_reason.as_deref()),
            ],
            errors,
        );
        check_retire_reason(tag.retired, tag.retire_reason.as_deref(), errors);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationValidator;

impl LocationValidator {
    const NAME: FieldRule = FieldRule::required("name", 255);
    const DESCRIPTION: FieldRule = FieldRule::optional("description", 255);
    const RETIRE_REASON: FieldRule = FieldRule::optional("retireReason", 255);

    pub fn new() -> Self {
        Self
    }
}

impl RecordValidator<Location> for LocationValidator {
    fn validate(&self, location: &Location, errors: &mut dyn ErrorSink) {
        check_fields(
            &[
                (Self::NAME, Some(location.name.as_str())),
                (Self::DESCRIPTION, location.description.as_deref()),
                (Self::RETIRE_REASON, location.retire_reason.as_deref()),
            ],
            errors,
        );
        check_retire_reason(location.retired, location.retire_reason.as_deref(), errors);
    }
}
