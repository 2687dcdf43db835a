//! Tag queries over a location store

mod matching;
mod tag_query;

#[cfg(test)]
mod tests;

pub use matching::{entities_having_all_tags, entities_having_any_tag, requested_tag_ids};
pub use tag_query::TagQuery;
