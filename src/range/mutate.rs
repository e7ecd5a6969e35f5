//! Bulk insertion and removal.
//!
//! [`add_range`] and [`remove_range`] apply every key of a sequence to a
//! [`UniqueSet`] and return how many of those calls changed the set.
//! Duplicate insertions and removals of missing keys are not counted.
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{ComparerSet, add_range, remove_range};
//!
//! let mut set: ComparerSet<String> = ["a", "b", "c"].map(String::from).into();
//! let added = add_range(&mut set, Some(&["c", "d"].map(String::from))).unwrap();
//! assert_eq!(added, 1);
//! assert_eq!(set.len(), 4);
//!
//! let removed = remove_range(&mut set, Some(&["a", "z"].map(String::from))).unwrap();
//! assert_eq!(removed, 1);
//! ```

use super::dispatch;
use crate::error::{SetRangeError, require};
use crate::sequence::{IntoKey, IntoSequence, ItemOf, Sequence};
use crate::set::UniqueSet;

/// Applies `change` to every element and counts the calls that returned `true`.
fn count_changes<Q, F>(operation: &'static str, sequence: Q, mut change: F) -> usize
where
    Q: Sequence,
    F: FnMut(Q::Item) -> bool,
{
    let mut changed = 0;
    sequence.for_each_item(|item| {
        if change(item) {
            changed += 1;
        }
    });
    log::trace!("{operation}: {changed} keys changed");
    changed
}

pub(crate) fn add_keys<T, Q, K, F>(operation: &'static str, set: &mut T, sequence: Q, mut select: F) -> usize
where
    T: UniqueSet<K> + ?Sized,
    Q: Sequence,
    F: FnMut(Q::Item) -> K,
{
    if dispatch(operation, &sequence) == Some(0) {
        return 0;
    }
    let hint = sequence.capacity_hint();
    set.reserve_keys(if set.is_empty() { hint } else { hint.div_ceil(2) });
    count_changes(operation, sequence, |item| set.insert_key(select(item)))
}

pub(crate) fn remove_keys<T, Q, K, F>(operation: &'static str, set: &mut T, sequence: Q, mut remove: F) -> usize
where
    T: UniqueSet<K> + ?Sized,
    Q: Sequence,
    F: FnMut(&mut T, Q::Item) -> bool,
{
    if dispatch(operation, &sequence) == Some(0) {
        return 0;
    }
    count_changes(operation, sequence, |item| remove(set, item))
}

// =============================================================================
// AddRange
// =============================================================================

/// Inserts every element of `source` into `set`.
///
/// Returns the number of elements that were not already present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn add_range<T, S, K>(set: &mut T, source: Option<S>) -> Result<usize, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
{
    const OPERATION: &str = "add_range";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(add_keys(OPERATION, set, sequence, IntoKey::into_key))
}

/// Inserts the key `selector` extracts from every element of `source`.
///
/// Returns the number of keys that were not already present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn add_range_by<T, S, K, F>(
    set: &mut T,
    source: Option<S>,
    selector: Option<F>,
) -> Result<usize, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
{
    const OPERATION: &str = "add_range_by";
    let source = require(source, OPERATION, "source")?;
    let selector = require(selector, OPERATION, "selector")?;
    Ok(add_keys(OPERATION, set, source.into_sequence(), selector))
}

// =============================================================================
// RemoveRange
// =============================================================================

/// Removes every element of `source` from `set`.
///
/// Returns the number of elements that were present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn remove_range<T, S, K>(set: &mut T, source: Option<S>) -> Result<usize, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
{
    const OPERATION: &str = "remove_range";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(remove_keys(OPERATION, set, sequence, |set, item| {
        set.remove_key(item.as_key())
    }))
}

/// Removes the key `selector` extracts from every element of `source`.
///
/// Returns the number of keys that were present.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn remove_range_by<T, S, K, F>(
    set: &mut T,
    source: Option<S>,
    selector: Option<F>,
) -> Result<usize, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
{
    const OPERATION: &str = "remove_range_by";
    let source = require(source, OPERATION, "source")?;
    let mut selector = require(selector, OPERATION, "selector")?;
    Ok(remove_keys(OPERATION, set, source.into_sequence(), |set, item| {
        set.remove_key(&selector(item))
    }))
}

// =============================================================================
// Tests
// =============================================================================
