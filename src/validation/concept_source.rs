use super::RecordValidator;
use super::errors::ErrorSink;
use super::rules::{FieldRule, check_fields};
use crate::models::ConceptSource;

const NAME: FieldRule = FieldRule::required("name", 50);
const DESCRIPTION: FieldRule = FieldRule::required("description", 1024);
const HL7_CODE: FieldRule = FieldRule::optional("hl7Code", 50);
const UNIQUE_ID: FieldRule = FieldRule::optional("uniqueId", 250);
const RETIRE_REASON: FieldRule = FieldRule::optional("retireReason", 255);

/// Name and description are required; HL7 code, unique id and retire reason
/// are optional. Every field has a length cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptSourceValidator;

impl ConceptSourceValidator {
    pub fn new() -> Self {
        Self
    }
}

impl RecordValidator<ConceptSource> for ConceptSourceValidator {
    fn validate(&self, source: &ConceptSource, errors: &mut dyn ErrorSink) {
        check_fields(
            &[
                (NAME, source.name.as_deref()),
                (DESCRIPTION, source.description.as_deref()),
                (HL7_CODE, source.hl7_code.as_deref()),
                (UNIQUE_ID, source.unique_id.as_deref()),
                (RETIRE_REASON, source.retire_reason.as_deref()),
            ],
            errors,
        );
    }
}
