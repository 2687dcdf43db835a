use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{LocationId, TagId};

#[derive(Error, Debug, Diagnostic)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path:?}")]
    #[diagnostic(code(carebase::dataset::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("Dataset {origin} does not match the dataset schema:\n  - {}", .problems.join("\n  - "))]
    #[diagnostic(code(carebase::dataset::schema))]
    Schema {
        origin: String,
        problems: Vec<String>,
    },

    #[error("Embedded dataset schema is unusable: {0}")]
    #[diagnostic(code(carebase::dataset::broken_schema))]
    BrokenSchema(String),

    #[error("Failed to read records from dataset {origin}")]
    #[diagnostic(code(carebase::dataset::records))]
    Records {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Location tag id {0} is defined more than once")]
    #[diagnostic(code(carebase::dataset::duplicate_tag))]
    DuplicateTagId(TagId),

    #[error("Location id {0} is defined more than once")]
    #[diagnostic(code(carebase::dataset::duplicate_location))]
    DuplicateLocationId(LocationId),

    #[error("Location {location} refers to unknown location tag {tag}")]
    #[diagnostic(
        code(carebase::dataset::unknown_tag),
        help("Declare the tag under `location_tags` or remove it from the location")
    )]
    UnknownTagReference { location: LocationId, tag: TagId },
}

/// YAML that could not be parsed at all, pointing at the offending spot.
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid YAML in dataset")]
#[diagnostic(code(carebase::dataset::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("{}", self.reason)]
    span: Option<SourceSpan>,

    reason: String,
}

impl YamlSyntaxError {
    pub fn from_yaml_error(error: &serde_yaml::Error, content: &str, origin: &Path) -> Self {
        let span = error
            .location()
            .map(|location| crate::error_utils::point_span(content, location.index()));

        Self {
            src: crate::error_utils::create_named_source(origin, content.to_string()),
            span,
            reason: error.to_string(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
