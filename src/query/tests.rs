use super::*;
use crate::models::{Location, LocationId, LocationTag, TagId};
use crate::store::{LocationStore, MemoryStore};

/// Tags 1..=4 spread so that {1,2} is held once, {3,4} twice and {4} four
/// times; tag 5 is held by nobody.
fn fixture_store() -> MemoryStore {
    MemoryStore::new(
        vec![
            LocationTag::new(1, "General Hospital"),
            LocationTag::new(2, "Login Location"),
            LocationTag::new(3, "Visit Location"),
            LocationTag::new(4, "Admission Location"),
            LocationTag::new(5, "Nobody got this tag"),
        ],
        vec![
            Location::new(1, "Unknown Location").with_tags([1, 2]),
            Location::new(2, "Xanadu").with_tags([3, 4]),
            Location::new(3, "Never Never Land").with_tags([3, 4]),
            Location::new(4, "Test Parent").with_tags([4]),
            Location::new(5, "Test Child").with_tags([1, 4]),
            Location::new(6, "Storage Room"),
        ],
    )
}

fn tags<'a>(store: &'a MemoryStore, ids: &[u32]) -> Vec<Option<&'a LocationTag>> {
    ids.iter()
        .map(|&id| Some(store.location_tag(TagId(id)).unwrap()))
        .collect()
}

fn ids(locations: &[&Location]) -> Vec<LocationId> {
    let mut ids: Vec<_> = locations.iter().map(|l| l.id).collect();
    ids.sort();
    ids
}

#[test]
fn test_locations_having_all_tags() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    assert_eq!(query.locations_having_all_tags(tags(&store, &[1, 2])).len(), 1);
    assert_eq!(query.locations_having_all_tags(tags(&store, &[3, 4])).len(), 2);
    assert_eq!(
        query
            .locations_having_all_tags(tags(&store, &[1, 2, 3, 4]))
            .len(),
        0
    );
    assert_eq!(query.locations_having_all_tags(tags(&store, &[4])).len(), 4);
}

#[test]
fn test_empty_result_when_no_location_has_the_tag() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let nobody = store.location_tag_by_name("Nobody got this tag").unwrap();
    assert!(query.locations_having_all_tags([Some(nobody)]).is_empty());
}

#[test]
fn test_null_entries_are_ignored() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let mut requested = tags(&store, &[1, 2]);
    requested.push(None);

    let matches = query.locations_having_all_tags(requested);
    assert_eq!(ids(&matches), vec![LocationId(1)]);
}

#[test]
fn test_result_ignores_order_and_duplicates() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let forward = query.locations_having_all_tags(tags(&store, &[3, 4]));
    let reversed = query.locations_having_all_tags(tags(&store, &[4, 3]));
    let repeated = query.locations_having_all_tags(tags(&store, &[4, 3, 4, 3]));

    assert_eq!(ids(&forward), vec![LocationId(2), LocationId(3)]);
    assert_eq!(ids(&forward), ids(&reversed));
    assert_eq!(ids(&forward), ids(&repeated));
}

#[test]
fn test_empty_request_matches_every_location() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    assert_eq!(query.locations_having_all_tags([]).len(), 6);
    assert_eq!(query.locations_having_all_tags([None, None]).len(), 6);
}

#[test]
fn test_tag_identity_not_name_decides_match() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    // Same name as tag 1, different identity: nobody carries it.
    let impostor = LocationTag::new(42, "General Hospital");
    assert!(query.locations_having_all_tags([Some(&impostor)]).is_empty());
}

#[test]
fn test_result_is_subset_with_superset_tags() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let requested = tags(&store, &[1]);
    let required = requested_tag_ids(requested.iter().copied());
    for location in query.locations_having_all_tags(requested) {
        assert!(store.locations().contains(location));
        assert!(required.is_subset(&location.tags));
    }
}

#[test]
fn test_locations_having_any_tag() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let matches = query.locations_having_any_tag(tags(&store, &[2, 3]));
    assert_eq!(
        ids(&matches),
        vec![LocationId(1), LocationId(2), LocationId(3)]
    );
    assert!(query.locations_having_any_tag([None]).is_empty());
}

#[test]
fn test_locations_by_tag() {
    let store = fixture_store();
    let query = TagQuery::new(&store);

    let general_hospital = store.location_tag(TagId(1)).unwrap();
    assert_eq!(
        ids(&query.locations_by_tag(general_hospital)),
        vec![LocationId(1), LocationId(5)]
    );
}
