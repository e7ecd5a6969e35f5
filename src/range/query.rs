//! Bulk membership predicates.
//!
//! # Any-match versus all-match
//!
//! [`contains_any`] answers "is at least one of these keys in the set?" and
//! stops at the first hit. [`contains_range`] is the same predicate under the
//! name of the historical "contains range" family: despite the name, it does
//! **not** check that every key is present. Callers that need full coverage
//! use [`contains_all`], which stops at the first miss.
//!
//! Both predicates return `false` for a source known to be empty and for an
//! empty target set. An empty target short-circuits before the source is
//! looked at, so an unbounded iterator is never pulled in that case.
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{ComparerSet, contains_all, contains_any};
//!
//! let set: ComparerSet<i32> = [1, 2, 3].into();
//! assert_eq!(contains_any(&set, Some(&[9, 3])), Ok(true));
//! assert_eq!(contains_all(&set, Some(&[9, 3])), Ok(false));
//! assert_eq!(contains_all(&set, Some(&[1, 3])), Ok(true));
//! ```

use std::ops::ControlFlow;

use super::dispatch;
use crate::error::{SetRangeError, require};
use crate::sequence::{IntoKey, IntoSequence, ItemOf, Sequence};
use crate::set::UniqueSet;

pub(crate) fn any_present<T, Q, K, F>(operation: &'static str, set: &T, sequence: Q, mut probe: F) -> bool
where
    T: UniqueSet<K> + ?Sized,
    Q: Sequence,
    F: FnMut(&T, Q::Item) -> bool,
{
    if set.is_empty() {
        log::trace!("{operation}: target set is empty");
        return false;
    }
    if dispatch(operation, &sequence) == Some(0) {
        return false;
    }
    sequence
        .try_for_each_item(|item| {
            if probe(set, item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
}

pub(crate) fn all_present<T, Q, K, F>(operation: &'static str, set: &T, sequence: Q, mut probe: F) -> bool
where
    T: UniqueSet<K> + ?Sized,
    Q: Sequence,
    F: FnMut(&T, Q::Item) -> bool,
{
    if set.is_empty() {
        log::trace!("{operation}: target set is empty");
        return false;
    }
    if dispatch(operation, &sequence) == Some(0) {
        return false;
    }
    let mut seen_any = false;
    let flow = sequence.try_for_each_item(|item| {
        seen_any = true;
        if probe(set, item) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
    seen_any && flow.is_continue()
}

// =============================================================================
// Any-match
// =============================================================================

/// Returns `true` if at least one element of `source` is in `set`.
///
/// Stops at the first element found. Returns `false` for an empty `set`
/// without looking at `source`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn contains_any<T, S, K>(set: &T, source: Option<S>) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
{
    const OPERATION: &str = "contains_any";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(any_present(OPERATION, set, sequence, |set, item| {
        set.contains_key(item.as_key())
    }))
}

/// Returns `true` if the key `selector` extracts from at least one element
/// of `source` is in `set`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn contains_any_by<T, S, K, F>(
    set: &T,
    source: Option<S>,
    selector: Option<F>,
) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
{
    const OPERATION: &str = "contains_any_by";
    let source = require(source, OPERATION, "source")?;
    let mut selector = require(selector, OPERATION, "selector")?;
    Ok(any_present(OPERATION, set, source.into_sequence(), |set, item| {
        set.contains_key(&selector(item))
    }))
}

/// Any-match predicate under its "contains range" name.
///
/// Identical to [`contains_any`]: returns `true` when **at least one**
/// element of `source` is in `set`, not when all of them are. Use
/// [`contains_all`] for full coverage.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
#[inline]
pub fn contains_range<T, S, K>(set: &T, source: Option<S>) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
{
    contains_any(set, source)
}

/// Keyed any-match predicate under its "contains range" name.
///
/// Identical to [`contains_any_by`].
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
#[inline]
pub fn contains_range_by<T, S, K, F>(
    set: &T,
    source: Option<S>,
    selector: Option<F>,
) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
{
    contains_any_by(set, source, selector)
}

// =============================================================================
// All-match
// =============================================================================

/// Returns `true` if every element of `source` is in `set`.
///
/// Stops at the first missing element. Returns `false` when `source`
/// produces no elements or `set` is empty.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` is `None`.
pub fn contains_all<T, S, K>(set: &T, source: Option<S>) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    ItemOf<S>: IntoKey<K>,
{
    const OPERATION: &str = "contains_all";
    let sequence = require(source, OPERATION, "source")?.into_sequence();
    Ok(all_present(OPERATION, set, sequence, |set, item| {
        set.contains_key(item.as_key())
    }))
}

/// Returns `true` if the key `selector` extracts from every element of
/// `source` is in `set`.
///
/// # Errors
///
/// Returns [`SetRangeError::InvalidArgument`] if `source` or `selector` is `None`.
pub fn contains_all_by<T, S, K, F>(
    set: &T,
    source: Option<S>,
    selector: Option<F>,
) -> Result<bool, SetRangeError>
where
    T: UniqueSet<K> + ?Sized,
    S: IntoSequence,
    F: FnMut(ItemOf<S>) -> K,
{
    const OPERATION: &str = "contains_all_by";
    let source = require(source, OPERATION, "source")?;
    let mut selector = require(selector, OPERATION, "selector")?;
    Ok(all_present(OPERATION, set, source.into_sequence(), |set, item| {
        set.contains_key(&selector(item))
    }))
}

// =============================================================================
// Tests
// =============================================================================
