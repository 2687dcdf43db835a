//! Read access to tags and the locations carrying them

mod memory;


pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{Location, LocationTag, TagId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No location tag with id {0}")]
    TagNotFound(TagId),

    #[error("No location tag named '{0}'")]
    TagNameNotFound(String),
}

/// The store a tag query runs against.
///
/// Implementations only need to hand out shared references, so a store can
/// be queried from several threads at once.
pub trait LocationStore {
    fn location_tag(&self, id: TagId) -> Result<&LocationTag, StoreError>;

    fn location_tag_by_name(&self, name: &str) -> Result<&LocationTag, StoreError>;

    fn location_tags(&self) -> &[LocationTag];

    fn locations(&self) -> &[Location];
}
