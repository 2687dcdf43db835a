use super::*;
use std::collections::HashSet;

#[test]
fn test_tags_compare_by_id_not_name() {
    let a = LocationTag::new(1, "Clinic");
    let b = LocationTag::new(2, "Clinic");
    let a_renamed = LocationTag::new(1, "Renamed clinic");

    assert_ne!(a, b);
    assert_eq!(a, a_renamed);

    let set: HashSet<LocationTag> = [a, b, a_renamed].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_location_tags_are_deduplicated() {
    let location = Location::new(7, "Ward").with_tags([1, 2, 2, 1]);

    assert_eq!(location.tag_ids().len(), 2);
    assert!(location.has_tag(TagId(1)));
    assert!(location.has_tag(TagId(2)));
    assert!(!location.has_tag(TagId(3)));
}

#[test]
fn test_retired_tag_keeps_reason() {
    let tag = LocationTag::new(3, "Old wing").retire("Demolished");

    assert!(tag.retired);
    assert_eq!(tag.retire_reason.as_deref(), Some("Demolished"));
}

#[test]
fn test_load_concept_source_from_yaml() {
    let yaml = r#"
name: SNOMED CT
description: Systematized Nomenclature of Medicine
hl7_code: SCT
"#;
    let source: ConceptSource = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(source.name.as_deref(), Some("SNOMED CT"));
    assert_eq!(source.hl7_code.as_deref(), Some("SCT"));
    assert!(source.unique_id.is_none());
    assert!(!source.retired);
}

#[test]
fn test_load_location_from_yaml() {
    let yaml = r#"
id: 4
name: Test Parent
tags: [4, 1]
"#;
    let location: Location = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(location.id, LocationId(4));
    assert_eq!(
        location.tags.iter().copied().collect::<Vec<_>>(),
        vec![TagId(1), TagId(4)]
    );
}
