/// Tag-intersection scenarios against the shipped fixture dataset
use carebase::dataset::{Dataset, DatasetLoader};
use carebase::models::{LocationTag, TagId};
use carebase::query::TagQuery;
use carebase::store::{LocationStore, StoreError};
use carebase::validation::DatasetValidator;

fn dataset() -> Dataset {
    DatasetLoader::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/location-dataset.yml"
    ))
    .load()
    .unwrap()
}

fn tag(dataset: &Dataset, id: u32) -> Option<&LocationTag> {
    Some(dataset.store.location_tag(TagId(id)).unwrap())
}

#[test]
fn test_get_locations_having_all_tags() {
    let dataset = dataset();
    let query = TagQuery::new(&dataset.store);

    let list1 = vec![tag(&dataset, 1), tag(&dataset, 2)];
    let list2 = vec![tag(&dataset, 3), tag(&dataset, 4)];
    let list3 = vec![
        tag(&dataset, 1),
        tag(&dataset, 2),
        tag(&dataset, 3),
        tag(&dataset, 4),
    ];
    let list4 = vec![tag(&dataset, 4)];

    assert_eq!(query.locations_having_all_tags(list1).len(), 1);
    assert_eq!(query.locations_having_all_tags(list2).len(), 2);
    assert_eq!(query.locations_having_all_tags(list3).len(), 0);
    assert_eq!(query.locations_having_all_tags(list4).len(), 4);
}

#[test]
fn test_return_empty_list_when_no_location_has_the_given_tags() {
    let dataset = dataset();
    let query = TagQuery::new(&dataset.store);

    let nobody = dataset
        .store
        .location_tag_by_name("Nobody got this tag")
        .unwrap();
    assert_eq!(query.locations_having_all_tags([Some(nobody)]).len(), 0);
}

#[test]
fn test_ignore_null_values_in_location_tag_list() {
    let dataset = dataset();
    let query = TagQuery::new(&dataset.store);

    let list1 = vec![tag(&dataset, 1), tag(&dataset, 2), None];
    assert_eq!(query.locations_having_all_tags(list1).len(), 1);
}

#[test]
fn test_unknown_tag_lookup_is_a_store_error() {
    let dataset = dataset();

    assert_eq!(
        dataset.store.location_tag(TagId(404)).unwrap_err(),
        StoreError::TagNotFound(TagId(404))
    );
    assert!(matches!(
        dataset.store.location_tag_by_name("Missing"),
        Err(StoreError::TagNameNotFound(_))
    ));
}

#[test]
fn test_query_is_shareable_across_threads() {
    let dataset = dataset();
    let store = &dataset.store;

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = [1u32, 3, 4]
            .into_iter()
            .map(|id| {
                scope.spawn(move || {
                    let tag = store.location_tag(TagId(id)).unwrap();
                    TagQuery::new(store).locations_by_tag(tag).len()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![2, 2, 4]);
}

#[test]
fn test_fixture_dataset_is_valid() {
    let report = DatasetValidator::new().validate(&dataset());
    assert!(report.is_valid(), "unexpected violations: {:?}", report.invalid);
    assert_eq!(report.checked, 15);
}
