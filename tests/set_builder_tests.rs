//! Integration tests for the set builders.
//!
//! Every builder is run over the three sequence shapes; results must not
//! depend on the shape.

use hashset_range::prelude::*;
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Shape {
    Array,
    List,
    Lazy,
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    key: String,
    value: usize,
}

const LIST_SIZE: usize = 1000;

/// Deterministic keys with every third one repeated.
fn records_with_duplicates() -> Vec<Record> {
    let mut records = Vec::with_capacity(LIST_SIZE * 2);
    for index in 0..LIST_SIZE {
        let record = Record {
            key: format!("key-{:04}", (index * 7919) % LIST_SIZE),
            value: index,
        };
        if index % 3 == 0 {
            records.push(record.clone());
        }
        records.push(record);
    }
    records
}

fn keys(records: &[Record]) -> Vec<String> {
    records.iter().map(|record| record.key.clone()).collect()
}

fn build_keyed(shape: Shape, records: &[Record], safe: bool) -> ComparerSet<String> {
    let selector = |record: &Record| record.key.clone();
    let list = records.to_vec();
    let result = match (shape, safe) {
        (Shape::Array, false) => to_set_by(Some(Contiguous(records)), Some(selector)),
        (Shape::List, false) => to_set_by(Some(Growable(&list)), Some(selector)),
        (Shape::Lazy, false) => to_set_by(Some(opaque(records.iter().filter(|_| true))), Some(selector)),
        (Shape::Array, true) => to_set_safe_by(Some(Contiguous(records)), Some(selector)),
        (Shape::List, true) => to_set_safe_by(Some(Growable(&list)), Some(selector)),
        (Shape::Lazy, true) => to_set_safe_by(Some(opaque(records.iter().filter(|_| true))), Some(selector)),
    };
    result.unwrap()
}

fn build_plain(shape: Shape, source: &[String], safe: bool) -> ComparerSet<String> {
    let list = source.to_vec();
    let result = match (shape, safe) {
        (Shape::Array, false) => to_set(Some(Contiguous(source))),
        (Shape::List, false) => to_set(Some(Growable(&list))),
        (Shape::Lazy, false) => to_set(Some(opaque(list.into_iter().filter(|_| true)))),
        (Shape::Array, true) => to_set_safe(Some(Contiguous(source))),
        (Shape::List, true) => to_set_safe(Some(Growable(&list))),
        (Shape::Lazy, true) => to_set_safe(Some(opaque(list.into_iter().filter(|_| true)))),
    };
    result.unwrap()
}

// =============================================================================
// Shape Parity
// =============================================================================

#[rstest]
#[case(Shape::Array)]
#[case(Shape::List)]
#[case(Shape::Lazy)]
fn test_keyed_builder_contains_every_key(#[case] shape: Shape) {
    let records = records_with_duplicates();
    let set = build_keyed(shape, &records, false);

    assert_eq!(set.len(), LIST_SIZE);
    for record in &records {
        assert!(set.contains(&record.key));
    }
}

#[rstest]
#[case(Shape::Array)]
#[case(Shape::List)]
#[case(Shape::Lazy)]
fn test_safe_and_natural_builders_agree(#[case] shape: Shape) {
    let records = records_with_duplicates();

    let natural = build_keyed(shape, &records, false);
    let safe = build_keyed(shape, &records, true);
    assert_eq!(natural.len(), safe.len());
    assert_eq!(natural, safe);

    let plain_natural = build_plain(shape, &keys(&records), false);
    let plain_safe = build_plain(shape, &keys(&records), true);
    assert_eq!(plain_natural, plain_safe);
    assert_eq!(plain_natural, natural);
}

#[rstest]
fn test_every_shape_builds_the_same_set() {
    let records = records_with_duplicates();
    let array = build_keyed(Shape::Array, &records, false);
    let list = build_keyed(Shape::List, &records, false);
    let lazy = build_keyed(Shape::Lazy, &records, false);
    assert_eq!(array, list);
    assert_eq!(list, lazy);
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn test_array_with_duplicate_builds_three_keys() {
    let source = ["a", "b", "a", "c"].map(String::from);
    let set: ComparerSet<String> = to_set(Some(&source)).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set, ComparerSet::from(["a", "b", "c"].map(String::from)));
}

#[rstest]
fn test_case_insensitive_keys_collide_through_selector() {
    let source = [
        Record {
            key: "X".to_string(),
            value: 1,
        },
        Record {
            key: "x".to_string(),
            value: 2,
        },
    ];
    let selector = |record: &Record| record.key.clone();

    let natural = to_set_by_with(Some(&source), Some(selector), CaseInsensitiveComparer::new()).unwrap();
    let safe = to_set_safe_by_with(Some(&source), Some(selector), CaseInsensitiveComparer::new()).unwrap();

    assert_eq!(natural.len(), 1);
    assert_eq!(safe.len(), 1);
}

#[rstest]
fn test_builder_leaves_source_untouched() {
    let records = records_with_duplicates();
    let before = records.clone();
    let set = build_keyed(Shape::List, &records, false);
    assert_eq!(records, before);
    assert_eq!(records.iter().map(|record| record.value).max(), Some(LIST_SIZE - 1));
    assert!(set.len() < records.len());
}

#[rstest]
fn test_builders_accept_other_collections() {
    let deque: std::collections::VecDeque<i32> = (0..10).collect();
    let tree: std::collections::BTreeSet<i32> = (5..15).collect();

    let from_deque: ComparerSet<i32> = to_set(Some(&deque)).unwrap();
    let from_tree: ComparerSet<i32> = to_set(Some(&tree)).unwrap();
    let from_set: ComparerSet<i32> = to_set(Some(&from_deque)).unwrap();

    assert_eq!(from_deque.len(), 10);
    assert_eq!(from_tree.len(), 10);
    assert_eq!(from_set, from_deque);
}

// =============================================================================
// Empty and Absent Sources
// =============================================================================

#[rstest]
#[case(Shape::Array)]
#[case(Shape::List)]
#[case(Shape::Lazy)]
fn test_empty_source_builds_empty_set(#[case] shape: Shape) {
    assert!(build_keyed(shape, &[], false).is_empty());
    assert!(build_keyed(shape, &[], true).is_empty());
    assert!(build_plain(shape, &[], false).is_empty());
}

#[rstest]
fn test_empty_source_keeps_comparer() {
    let source: Vec<String> = Vec::new();
    let mut set: ComparerSet<String, CaseInsensitiveComparer> =
        to_set_with(Some(&source), CaseInsensitiveComparer::new()).unwrap();

    set.insert("Key".to_string());
    assert!(set.contains(&"KEY".to_string()));
}

#[rstest]
fn test_absent_source_fails_for_every_builder() {
    let selector = Some(|record: &Record| record.key.clone());
    let none = None::<&[Record]>;

    let results = [
        to_set_by(none, selector).map(|_| ()),
        to_set_safe_by(none, selector).map(|_| ()),
        to_set_by_with(none, selector, CaseInsensitiveComparer::new()).map(|_| ()),
        to_set_safe_by_with(none, selector, CaseInsensitiveComparer::new()).map(|_| ()),
        to_set::<&[String], String>(None).map(|_| ()),
        to_set_safe::<&[String], String>(None).map(|_| ()),
    ];

    for result in results {
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }
}

#[rstest]
fn test_absent_selector_fails() {
    let source = records_with_duplicates();
    let error = to_set_safe_by_with(
        Some(&source),
        None::<fn(&Record) -> String>,
        CaseInsensitiveComparer::new(),
    )
    .unwrap_err();

    assert_eq!(
        error,
        SetRangeError::InvalidArgument(InvalidArgumentError {
            operation: "to_set_safe_by",
            parameter: "selector",
        })
    );
}
