use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::tag::{TagId, Taggable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub retired: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,

    #[serde(default)]
    pub tags: BTreeSet<TagId>,
}

impl Location {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: LocationId(id),
            name: name.into(),
            description: None,
            retired: false,
            retire_reason: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = u32>) -> Self {
        self.tags.extend(tags.into_iter().map(TagId));
        self
    }
}

impl Taggable for Location {
    fn tag_ids(&self) -> &BTreeSet<TagId> {
        &self.tags
    }
}
