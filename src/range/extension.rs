//! Method-call forms of the bulk operations.
//!
//! [`SetRangeExt`] adds the mutators and predicates to every [`UniqueSet`];
//! [`ToSetExt`] adds the builders to every [`IntoSequence`] value. Their
//! arguments are plain values rather than `Option`s, so these methods cannot
//! fail.
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::prelude::*;
//! use std::collections::HashSet;
//!
//! let mut set: HashSet<i32> = HashSet::new();
//! assert_eq!(set.add_range(&[1, 2, 2, 3]), 3);
//! assert!(set.contains_any(&[7, 3]));
//! assert!(!set.contains_all(&[7, 3]));
//!
//! let built: ComparerSet<i32> = (&vec![1, 1, 2]).to_set();
//! assert_eq!(built.len(), 2);
//! ```

use std::hash::Hash;

use super::{build, mutate, query};
use crate::comparer::{DefaultComparer, KeyComparer};
use crate::sequence::{IntoKey, IntoSequence, ItemOf};
use crate::set::{ComparerSet, UniqueSet};

/// Bulk mutators and predicates as methods on a set.
pub trait SetRangeExt<K>: UniqueSet<K> {
    /// Inserts every element of `source`; returns how many were new.
    fn add_range<S>(&mut self, source: S) -> usize
    where
        S: IntoSequence,
        ItemOf<S>: IntoKey<K>,
    {
        mutate::add_keys("add_range", self, source.into_sequence(), IntoKey::into_key)
    }

    /// Inserts the key `selector` extracts from every element; returns how many were new.
    fn add_range_by<S, F>(&mut self, source: S, selector: F) -> usize
    where
        S: IntoSequence,
        F: FnMut(ItemOf<S>) -> K,
    {
        mutate::add_keys("add_range_by", self, source.into_sequence(), selector)
    }

    /// Removes every element of `source`; returns how many were present.
    fn remove_range<S>(&mut self, source: S) -> usize
    where
        S: IntoSequence,
        ItemOf<S>: IntoKey<K>,
    {
        mutate::remove_keys("remove_range", self, source.into_sequence(), |set, item| {
            set.remove_key(item.as_key())
        })
    }

    /// Removes the key `selector` extracts from every element; returns how many were present.
    fn remove_range_by<S, F>(&mut self, source: S, mut selector: F) -> usize
    where
        S: IntoSequence,
        F: FnMut(ItemOf<S>) -> K,
    {
        mutate::remove_keys("remove_range_by", self, source.into_sequence(), |set, item| {
            set.remove_key(&selector(item))
        })
    }

    /// Returns `true` if at least one element of `source` is present.
    fn contains_any<S>(&self, source: S) -> bool
    where
        S: IntoSequence,
        ItemOf<S>: IntoKey<K>,
    {
        query::any_present("contains_any", self, source.into_sequence(), |set, item| {
            set.contains_key(item.as_key())
        })
    }

    /// Returns `true` if the key `selector` extracts from at least one element is present.
    fn contains_any_by<S, F>(&self, source: S, mut selector: F) -> bool
    where
        S: IntoSequence,
        F: FnMut(ItemOf<S>) -> K,
    {
        query::any_present("contains_any_by", self, source.into_sequence(), |set, item| {
            set.contains_key(&selector(item))
        })
    }

    /// Returns `true` if every element of a non-empty `source` is present.
    fn contains_all<S>(&self, source: S) -> bool
    where
        S: IntoSequence,
        ItemOf<S>: IntoKey<K>,
    {
        query::all_present("contains_all", self, source.into_sequence(), |set, item| {
            set.contains_key(item.as_key())
        })
    }

    /// Returns `true` if the key `selector` extracts from every element of a
    /// non-empty `source` is present.
    fn contains_all_by<S, F>(&self, source: S, mut selector: F) -> bool
    where
        S: IntoSequence,
        F: FnMut(ItemOf<S>) -> K,
    {
        query::all_present("contains_all_by", self, source.into_sequence(), |set, item| {
            set.contains_key(&selector(item))
        })
    }
}

impl<K, T: UniqueSet<K> + ?Sized> SetRangeExt<K> for T {}

/// Set builders as methods on a sequence.
pub trait ToSetExt: IntoSequence + Sized {
    /// Builds a set of the elements under [`DefaultComparer`].
    fn to_set<K>(self) -> ComparerSet<K>
    where
        ItemOf<Self>: IntoKey<K>,
        K: Hash + Eq,
    {
        self.to_set_with(DefaultComparer::new())
    }

    /// Builds a set of the elements under `comparer`.
    fn to_set_with<K, C>(self, comparer: C) -> ComparerSet<K, C>
    where
        ItemOf<Self>: IntoKey<K>,
        C: KeyComparer<K>,
    {
        build::collect_natural("to_set", self.into_sequence(), comparer, IntoKey::into_key)
    }

    /// Builds a set of the keys `selector` extracts under [`DefaultComparer`].
    fn to_set_by<K, F>(self, selector: F) -> ComparerSet<K>
    where
        F: FnMut(ItemOf<Self>) -> K,
        K: Hash + Eq,
    {
        build::collect_natural("to_set_by", self.into_sequence(), DefaultComparer::new(), selector)
    }

    /// Builds a set of the keys `selector` extracts, inserting only keys not
    /// yet present, under [`DefaultComparer`].
    fn to_set_safe_by<K, F>(self, selector: F) -> ComparerSet<K>
    where
        F: FnMut(ItemOf<Self>) -> K,
        K: Hash + Eq,
    {
        build::collect_safe("to_set_safe_by", self.into_sequence(), DefaultComparer::new(), selector)
    }
}

impl<S: IntoSequence> ToSetExt for S {}
