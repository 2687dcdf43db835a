//! Loads a YAML dataset of tags, locations and concept sources into a store

mod error;
mod schema;


pub use error::{DatasetError, YamlSyntaxError};

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{ConceptSource, Location, LocationTag};
use crate::store::{LocationStore, MemoryStore};

/// Everything a dataset file declares, with tag references resolved.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub store: MemoryStore,
    pub concept_sources: Vec<ConceptSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default)]
    location_tags: Vec<LocationTag>,

    #[serde(default)]
    locations: Vec<Location>,

    #[serde(default)]
    concept_sources: Vec<ConceptSource>,
}

pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Dataset, DatasetError> {
        debug!("Reading dataset {:?}", self.path);
        let content = std::fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;

        Self::load_str(&content, &self.path)
    }

    /// Parse, schema-check and resolve dataset YAML read from `origin`.
    pub fn load_str(content: &str, origin: &Path) -> Result<Dataset, DatasetError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| YamlSyntaxError::from_yaml_error(&e, content, origin))?;
        // An empty or comment-only file parses as null
        let value = match value {
            Value::Null => Value::Object(Default::default()),
            value => value,
        };

        let problems = schema::schema_problems(&value)?;
        if !problems.is_empty() {
            return Err(DatasetError::Schema {
                origin: origin.display().to_string(),
                problems,
            });
        }

        let file: DatasetFile =
            serde_json::from_value(value).map_err(|source| DatasetError::Records {
                origin: origin.display().to_string(),
                source,
            })?;

        let dataset = Self::resolve(file)?;
        info!(
            "Loaded {} location tag(s), {} location(s), {} concept source(s)",
            dataset.store.location_tags().len(),
            dataset.store.location_count(),
            dataset.concept_sources.len()
        );
        Ok(dataset)
    }

    fn resolve(file: DatasetFile) -> Result<Dataset, DatasetError> {
        let mut tag_ids = HashSet::with_capacity(file.location_tags.len());
        for tag in &file.location_tags {
            if !tag_ids.insert(tag.id) {
                return Err(DatasetError::DuplicateTagId(tag.id));
            }
        }

        let mut location_ids = HashSet::with_capacity(file.locations.len());
        for location in &file.locations {
            if !location_ids.insert(location.id) {
                return Err(DatasetError::DuplicateLocationId(location.id));
            }

            if let Some(&tag) = location.tags.iter().find(|id| !tag_ids.contains(*id)) {
                return Err(DatasetError::UnknownTagReference {
                    location: location.id,
                    tag,
                });
            }
        }

        Ok(Dataset {
            store: MemoryStore::new(file.location_tags, file.locations),
            concept_sources: file.concept_sources,
        })
    }
}
