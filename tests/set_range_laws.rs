//! Property-based tests for the bulk set operations.
//!
//! These tests check that the builders, mutators and predicates agree with
//! each other and with a plain `std::collections::HashSet` model, whatever
//! the shape of the source sequence.

use std::collections::HashSet;

use hashset_range::prelude::*;
use proptest::prelude::*;

fn lazy(values: &[i32]) -> Opaque<impl Iterator<Item = i32> + '_> {
    opaque(values.iter().copied().filter(|_| true))
}

// =============================================================================
// Shape Independence Law
// Description: A builder produces the same set from every source shape
// =============================================================================

proptest! {
    #[test]
    fn prop_shape_independence_law(values in prop::collection::vec(-50i32..50, 0..100)) {
        let array: ComparerSet<i32> = to_set(Some(Contiguous(&values[..]))).unwrap();
        let list: ComparerSet<i32> = to_set(Some(Growable(&values))).unwrap();
        let lazy_set: ComparerSet<i32> = to_set(Some(lazy(&values))).unwrap();

        prop_assert_eq!(&array, &list);
        prop_assert_eq!(&list, &lazy_set);
    }
}

// =============================================================================
// Safe Builder Law
// Description: The safe builder agrees with the natural builder
// =============================================================================

proptest! {
    #[test]
    fn prop_safe_builder_law(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let selector = |value: &i32| value.rem_euclid(17);

        let natural = to_set_by(Some(&values), Some(selector)).unwrap();
        let safe = to_set_safe_by(Some(&values), Some(selector)).unwrap();
        let lazy_safe = to_set_safe_by(Some(opaque(values.iter())), Some(selector)).unwrap();

        prop_assert_eq!(natural.len(), safe.len());
        prop_assert_eq!(&natural, &safe);
        prop_assert_eq!(&safe, &lazy_safe);
    }
}

// =============================================================================
// Model Law
// Description: A built set holds exactly the distinct source keys
// =============================================================================

proptest! {
    #[test]
    fn prop_model_law(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let built: ComparerSet<i32> = to_set(Some(&values)).unwrap();
        let model: HashSet<i32> = values.iter().copied().collect();

        prop_assert_eq!(built.len(), model.len());
        for value in &model {
            prop_assert!(built.contains(value));
        }
    }
}

// =============================================================================
// Add Count Law
// Description: add_range returns the growth of the set
// =============================================================================

proptest! {
    #[test]
    fn prop_add_count_law(
        initial in prop::collection::vec(-30i32..30, 0..40),
        added in prop::collection::vec(-30i32..30, 0..40)
    ) {
        let mut set: ComparerSet<i32> = initial.iter().copied().collect();
        let before = set.len();

        let count = add_range(&mut set, Some(&added)).unwrap();

        prop_assert_eq!(count, set.len() - before);
        for value in &added {
            prop_assert!(set.contains(value));
        }
    }
}

// =============================================================================
// Add Idempotence Law
// Description: Adding the same source twice changes nothing the second time
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotence_law(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let mut set: ComparerSet<i32> = ComparerSet::new();
        add_range(&mut set, Some(lazy(&values))).unwrap();
        let snapshot = set.clone();

        prop_assert_eq!(add_range(&mut set, Some(lazy(&values))), Ok(0));
        prop_assert_eq!(set, snapshot);
    }
}

// =============================================================================
// Inverse Law
// Description: Removing a set's own source empties it, counting every key
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_inverse_law(values in prop::collection::vec(-20i32..20, 0..60)) {
        let mut set: ComparerSet<i32> = to_set(Some(&values)).unwrap();
        let distinct = set.len();

        let removed = remove_range(&mut set, Some(&values)).unwrap();

        prop_assert_eq!(removed, distinct);
        prop_assert!(set.is_empty());
    }
}

// =============================================================================
// Remove Count Law
// Description: remove_range returns the shrinkage of the set
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_count_law(
        initial in prop::collection::vec(-30i32..30, 0..40),
        removed in prop::collection::vec(-30i32..30, 0..40)
    ) {
        let mut set: HashSet<i32> = initial.iter().copied().collect();
        let before = set.len();

        let count = remove_range(&mut set, Some(Growable(&removed))).unwrap();

        prop_assert_eq!(count, before - set.len());
        for value in &removed {
            prop_assert!(!set.contains(value));
        }
    }
}

// =============================================================================
// Predicate Laws
// Description: contains_any and contains_all agree with the model
// =============================================================================

proptest! {
    #[test]
    fn prop_contains_any_law(
        initial in prop::collection::vec(-30i32..30, 0..40),
        probe in prop::collection::vec(-30i32..30, 0..40)
    ) {
        let set: ComparerSet<i32> = initial.iter().copied().collect();
        let expected = probe.iter().any(|value| set.contains(value));

        prop_assert_eq!(contains_any(&set, Some(&probe)), Ok(expected));
        prop_assert_eq!(contains_any(&set, Some(lazy(&probe))), Ok(expected));
        prop_assert_eq!(contains_range(&set, Some(&probe)), Ok(expected));
    }

    #[test]
    fn prop_contains_all_law(
        initial in prop::collection::vec(-30i32..30, 0..40),
        probe in prop::collection::vec(-30i32..30, 0..40)
    ) {
        let set: ComparerSet<i32> = initial.iter().copied().collect();
        let expected = !probe.is_empty() && probe.iter().all(|value| set.contains(value));

        prop_assert_eq!(contains_all(&set, Some(&probe)), Ok(expected));
        prop_assert_eq!(contains_all(&set, Some(lazy(&probe))), Ok(expected));
    }

    #[test]
    fn prop_built_set_contains_all_of_its_source(
        values in prop::collection::vec(any::<i32>(), 1..60)
    ) {
        let set: ComparerSet<i32> = to_set(Some(&values)).unwrap();

        prop_assert_eq!(contains_all(&set, Some(&values)), Ok(true));
        prop_assert_eq!(contains_any(&set, Some(&values)), Ok(true));
    }
}

// =============================================================================
// Comparer Law
// Description: Keys equal under the comparer collapse to one entry
// =============================================================================

proptest! {
    #[test]
    fn prop_case_insensitive_comparer_law(words in prop::collection::vec("[a-zA-Z]{1,4}", 0..40)) {
        let set: ComparerSet<String, CaseInsensitiveComparer> =
            to_set_with(Some(&words), CaseInsensitiveComparer::new()).unwrap();
        let model: HashSet<String> = words.iter().map(|word| word.to_lowercase()).collect();

        prop_assert_eq!(set.len(), model.len());
        for word in &words {
            prop_assert!(set.contains(&word.to_uppercase()));
        }
    }
}
