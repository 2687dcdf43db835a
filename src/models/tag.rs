use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Numeric identity of a location tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub u32);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named label attachable to a location.
///
/// Two tags are the same tag only when their ids match; the name plays no
/// part in equality, so two tags both called "Clinic" stay distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTag {
    pub id: TagId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub retired: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,
}

impl LocationTag {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: TagId(id),
            name: name.into(),
            description: None,
            retired: false,
            retire_reason: None,
        }
    }

    pub fn retire(mut self, reason: impl Into<String>) -> Self {
        self.retired = true;
        self.retire_reason = Some(reason.into());
        self
    }
}

impl PartialEq for LocationTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LocationTag {}

impl Hash for LocationTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Anything that owns a set of tags.
pub trait Taggable {
    fn tag_ids(&self) -> &BTreeSet<TagId>;

    fn has_tag(&self, id: TagId) -> bool {
        self.tag_ids().contains(&id)
    }
}
