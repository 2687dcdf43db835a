use std::collections::BTreeSet;

use crate::models::{LocationTag, TagId, Taggable};

/// Collect the distinct ids of the requested tags, skipping `None` entries.
pub fn requested_tag_ids<'t, I>(requested: I) -> BTreeSet<TagId>
where
    I: IntoIterator<Item = Option<&'t LocationTag>>,
{
    requested.into_iter().flatten().map(|tag| tag.id).collect()
}

/// Entities whose tags are a superset of `required`.
///
/// An empty requirement is satisfied by every entity.
pub fn entities_having_all_tags<'e, E, I>(entities: I, required: &BTreeSet<TagId>) -> Vec<&'e E>
where
    E: Taggable + 'e,
    I: IntoIterator<Item = &'e E>,
{
    entities
        .into_iter()
        .filter(|entity| required.is_subset(entity.tag_ids()))
        .collect()
}

/// Entities carrying at least one tag of `wanted`.
///
/// An empty `wanted` set matches nothing.
pub fn entities_having_any_tag<'e, E, I>(entities: I, wanted: &BTreeSet<TagId>) -> Vec<&'e E>
where
    E: Taggable + 'e,
    I: IntoIterator<Item = &'e E>,
{
    entities
        .into_iter()
        .filter(|entity| !wanted.is_disjoint(entity.tag_ids()))
        .collect()
}
