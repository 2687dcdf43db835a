use serde::Serialize;
use tracing::{debug, info};

use super::RecordValidator;
use super::concept_source::ConceptSourceValidator;
use super::errors::{ErrorSink, Errors};
use super::location::{LocationTagValidator, LocationValidator};
use crate::dataset::Dataset;
use crate::store::LocationStore;

/// Outcome of validating every record in a dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub invalid: Vec<Errors>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.invalid.iter().map(Errors::error_count).sum()
    }

    pub fn errors_for(&self, object_name: &str) -> Option<&Errors> {
        self.invalid.iter().find(|e| e.object_name() == object_name)
    }

    fn record<T, V>(&mut self, validator: &V, record: &T, object_name: String)
    where
        V: RecordValidator<T>,
    {
        let mut errors = Errors::new(object_name);
        validator.validate(record, &mut errors);
        self.checked += 1;

        if errors.has_errors() {
            debug!(
                "{} has {} violation(s)",
                errors.object_name(),
                errors.error_count()
            );
            self.invalid.push(errors);
        }
    }
}

/// Runs the record validators over every record a dataset holds.
#[derive(Debug, Default)]
pub struct DatasetValidator {
    tag_validator: LocationTagValidator,
    location_validator: LocationValidator,
    concept_source_validator: ConceptSourceValidator,
}

impl DatasetValidator {
    pub fn new() -> Self {
        Self {
            tag_validator: LocationTagValidator::new(),
            location_validator: LocationValidator::new(),
            concept_source_validator: ConceptSourceValidator::new(),
        }
    }

    pub fn validate(&self, dataset: &Dataset) -> ValidationReport {
        let mut report = ValidationReport::default();

        debug!("Validating location tags...");
        for tag in dataset.store.location_tags() {
            report.record(&self.tag_validator, tag, format!("locationTag[{}]", tag.id));
        }

        debug!("Validating locations...");
        for location in dataset.store.locations() {
            report.record(
                &self.location_validator,
                location,
                format!("location[{}]", location.id),
            );
        }

        debug!("Validating concept sources...");
        for (index, source) in dataset.concept_sources.iter().enumerate() {
            report.record(
                &self.concept_source_validator,
                source,
                format!("conceptSource[{index}]"),
            );
        }

        info!(
            "Checked {} record(s), {} invalid",
            report.checked,
            report.invalid.len()
        );
        report
    }
}
