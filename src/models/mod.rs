pub mod concept_source;
pub mod location;
pub mod tag;

// Re-export commonly used types
pub use concept_source::ConceptSource;
pub use location::{Location, LocationId};
pub use tag::{LocationTag, TagId, Taggable};

#[cfg(test)]
mod tests;
