use std::collections::BTreeSet;
use tracing::debug;

use super::matching::{entities_having_all_tags, entities_having_any_tag, requested_tag_ids};
use crate::models::{Location, LocationTag};
use crate::store::LocationStore;

/// Location lookups by tag, borrowing the store they read from.
pub struct TagQuery<'s, S: LocationStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: LocationStore + ?Sized> TagQuery<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Locations carrying every requested tag; `None` entries are ignored.
    ///
    /// Locations may carry tags beyond the requested ones. When nothing is
    /// left to require, every location in the store qualifies.
    pub fn locations_having_all_tags<'t, I>(&self, requested: I) -> Vec<&'s Location>
    where
        I: IntoIterator<Item = Option<&'t LocationTag>>,
    {
        let required = requested_tag_ids(requested);
        let matches = entities_having_all_tags(self.store.locations(), &required);
        debug!(
            "{} location(s) carry all of {:?}",
            matches.len(),
            required.iter().map(|id| id.0).collect::<Vec<_>>()
        );
        matches
    }

    /// Locations carrying at least one requested tag; `None` entries are ignored.
    pub fn locations_having_any_tag<'t, I>(&self, requested: I) -> Vec<&'s Location>
    where
        I: IntoIterator<Item = Option<&'t LocationTag>>,
    {
        let wanted = requested_tag_ids(requested);
        let matches = entities_having_any_tag(self.store.locations(), &wanted);
        debug!(
            "{} location(s) carry any of {:?}",
            matches.len(),
            wanted.iter().map(|id| id.0).collect::<Vec<_>>()
        );
        matches
    }

    pub fn locations_by_tag(&self, tag: &LocationTag) -> Vec<&'s Location> {
        let required = BTreeSet::from([tag.id]);
        entities_having_all_tags(self.store.locations(), &required)
    }
}
