//! Field validation for registry records
//!
//! Validators never fail: they report every violation they find into an
//! [`ErrorSink`] owned by the caller, who decides whether to accept the record.

mod concept_source;
mod errors;
mod location;
mod rules;
mod validator;


pub use concept_source::ConceptSourceValidator;
pub use errors::{ErrorSink, Errors, FieldViolation, ViolationKind};
pub use location::{LocationTagValidator, LocationValidator};
pub use rules::{FieldRule, check_fields, is_blank};
pub use validator::{DatasetValidator, ValidationReport};

/// Checks one kind of record.
pub trait RecordValidator<T: ?Sized> {
    fn validate(&self, record: &T, errors: &mut dyn ErrorSink);
}
