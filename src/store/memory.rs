use std::collections::HashMap;

use super::{LocationStore, StoreError};
use crate::models::{Location, LocationTag, TagId};

/// A store held entirely in memory, indexed by tag id and tag name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tags: Vec<LocationTag>,
    locations: Vec<Location>,
    by_id: HashMap<TagId, usize>,
    by_name: HashMap<String, usize>,
}

impl MemoryStore {
    /// Build a store from already-checked tags and locations.
    ///
    /// When two tags share a name, name lookups resolve to the first one.
    pub fn new(tags: Vec<LocationTag>, locations: Vec<Location>) -> Self {
        let mut by_id = HashMap::with_capacity(tags.len());
        let mut by_name = HashMap::with_capacity(tags.len());

        for (index, tag) in tags.iter().enumerate() {
            by_id.entry(tag.id).or_insert(index);
            by_name.entry(tag.name.clone()).or_insert(index);
        }

        Self {
            tags,
            locations,
            by_id,
            by_name,
        }
    }

    pub fn all_location_tags(&self, include_retired: bool) -> Vec<&LocationTag> {
        self.tags
            .iter()
            .filter(|tag| include_retired || !tag.retired)
            .collect()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

impl LocationStore for MemoryStore {
    fn location_tag(&self, id: TagId) -> Result<&LocationTag, StoreError> {
        self.by_id
            .get(&id)
            .map(|&index| &self.tags[index])
            .ok_or(StoreError::TagNotFound(id))
    }

    fn location_tag_by_name(&self, name: &str) -> Result<&LocationTag, StoreError> {
        self.by_name
            .get(name)
            .map(|&index| &self.tags[index])
            .ok_or_else(|| StoreError::TagNameNotFound(name.to_string()))
    }

    fn location_tags(&self) -> &[LocationTag] {
        &self.tags
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }
}
