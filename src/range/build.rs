//! Set builders.
//!
//! Two families build a [`ComparerSet`] from a sequence:
//!
//! - `to_set*`: inserts every key and lets the set absorb duplicates
//! - `to_set_safe*`: looks every key up first and inserts only absent keys,
//!   without relying on the set's own duplicate handling
//!
//! Both produce sets with the same membership for any source. The safe
//! family is kept as an independent path so the two can be checked against
//! each other.
//!
//! Each family comes with and without a key selector (`_by`) and with the
//! default or an explicit comparer (`_with`).
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{CaseInsensitiveComparer, ComparerSet, to_set, to_set_by_with};
//!
//! let words = ["a", "b", "a", "c"].map(String::from);
//! let set: ComparerSet<String> = to_set(Some(&words)).unwrap();
//! assert_eq!(set.len(), 3);
//!
//! let pairs = [("X", 1), ("x", 2)];
//! let keyed = to_set_by_with(
//!     Some(&pairs),
//!     Some(|pair: &(&str, i32)| pair.0.to_string()),
//!     CaseInsensitiveComparer::new(),
//! )
//! .unwrap();
//! assert_eq!(keyed.len(), 1);
//! ```

use std::hash::Hash;

use super::dispatch;
use crate::comparer::{DefaultComparer, KeyComparer};
use crate::error::{SetRangeError, require};
use crate::sequence::{IntoKey, IntoSequence, ItemOf, Sequence};
use crate::set::ComparerSet;

/// Creates the target set, sized by the capacity hint of `sequence`.
///
/// Returns `Err` with an unallocated set when the sequence is known to be empty.
fn presized<Q: Sequence, K, C>(
    operation: &'static str,
    sequence: &Q,
    comparer: C,
) -> Result<ComparerSet<K, C>, ComparerSet<K, C>> {
    match dispatch(operation, sequence) {
        Some(0) => Err(ComparerSet::with_comparer(comparer)),
        _ => Ok(ComparerSet::with_capacity_and_comparer(
            sequence.capacity_hint(),
            comparer,
        )),
    }
}

pub(crate) fn collect_natural<Q, K, C, F>(
    operation: &'static str,
    sequence: Q,
    comparer: C,
    mut select: F,
) -> ComparerSet<K, C>
where
    Q: Sequence,
    C: KeyComparer<K>,
    F: FnMut(Q::Item) -> K,
{
    let mut set = match presized(operation, &sequence, comparer) {
        Ok(set) => set,
        Err(empty) => return empty,
    };
    sequence.for_each_item(|item| {
        set.insert(select(item));
    });
    set
}

pub(crate) fn collect_safe<Q, K, C, F>(
    operation: &'static str,
    sequence: Q,
    comparer: C,
    mut select: F,
) -> ComparerSet<K, C>
where
    Q: Sequence,
    C: KeyComparer<K>,
    F: FnMut(Q::Item) -> K,
{
    let mut set = match presized(operation, &sequence, comparer) {
        Ok(set) => set,
        Err(empty) => return empty,
    };
    sequence.for_each_item(|item| {
        let key = select(item);
        if !set.contains(&key) {
            set.insert_absent(key);
        }
    });
    set
}

// =============================================================================
// Natural Builders
// =============================================================================

/// Builds a set of the source's elements under [`DefaultComparer`].
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn to_set<S, K>(source: Option<S>) -> Result<ComparerSet<K>, SetRangeError>
where
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
    K: Hash + Eq,
{
    to_set_with(source, DefaultComparer::new())
}

/// Builds a set of the source's elements under `comparer`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn to_set_with<S, K, C>(source: Option<S>, comparer: C) -> Result<ComparerSet<K, C>, SetRangeError>
where
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
    C: KeyComparer<K>,
{
    const OPERATION: &str = "to_set";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(collect_natural(OPERATION, sequence, comparer, IntoKey::into_key))
}

/// Builds a set of the keys `selector` extracts from the source, under [`DefaultComparer`].
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn to_set_by<S, K, F>(source: Option<S>, selector: Option<F>) -> Result<ComparerSet<K>, SetRangeError>
where
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
    K: Hash + Eq,
{
    to_set_by_with(source, selector, DefaultComparer::new())
}

/// Builds a set of the keys `selector` extracts from the source, under `comparer`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn to_set_by_with<S, K, C, F>(
    source: Option<S>,
    selector: Option<F>,
    comparer: C,
) -> Result<ComparerSet<K, C>, SetRangeError>
where
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
    C: KeyComparer<K>,
{
    const OPERATION: &str = "to_set_by";
    let source = require(source, OPERATION, "source")?;
    let selector = require(selector, OPERATION, "selector")?;
    Ok(collect_natural(
        OPERATION,
        source.into_sequence(),
        comparer,
        selector,
    ))
}

// =============================================================================
// Safe Builders
// =============================================================================

/// Builds a set of the source's elements, inserting only keys not yet present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn to_set_safe<S, K>(source: Option<S>) -> Result<ComparerSet<K>, SetRangeError>
where
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
    K: Hash + Eq,
{
    to_set_safe_with(source, DefaultComparer::new())
}

/// Builds a set of the source's elements under `comparer`, inserting only
/// keys not yet present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn to_set_safe_with<S, K, C>(
    source: Option<S>,
    comparer: C,
) -> Result<ComparerSet<K, C>, SetRangeError>
where
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
    C: KeyComparer<K>,
{
    const OPERATION: &str = "to_set_safe";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(collect_safe(OPERATION, sequence, comparer, IntoKey::into_key))
}

/// Builds a set of the keys `selector` extracts, inserting only keys not yet
/// present, under [`DefaultComparer`].
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn to_set_safe_by<S, K, F>(
    source: Option<S>,
    selector: Option<F>,
) -> Result<ComparerSet<K>, SetRangeError>
where
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
    K: Hash + Eq,
{
    to_set_safe_by_with(source, selector, DefaultComparer::new())
}

/// Builds a set of the keys `selector` extracts, inserting only keys not yet
/// present, under `comparer`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn to_set_safe_by_with<S, K, C, F>(
    source: Option<S>,
    selector: Option<F>,
    comparer: C,
) -> Result<ComparerSet<K, C>, SetRangeError>
where
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
    C: KeyComparer<K>,
{
    const OPERATION: &str = "to_set_safe_by";
    let source = require(source, OPERATION, "source")?;
    let selector = require(selector, OPERATION, "selector")?;
    Ok(collect_safe(
        OPERATION,
        source.into_sequence(),
        comparer,
        selector,
    ))
}

// =============================================================================
// Tests
// =============================================================================
