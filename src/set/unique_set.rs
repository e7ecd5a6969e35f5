//! The set primitive used by bulk mutators and predicates.
//!
//! [`UniqueSet`] is implemented for [`ComparerSet`], the standard library's
//! `HashSet` and `BTreeSet`, and `hashbrown::HashSet`, so the bulk
//! operations of this crate work on any of them.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::ComparerSet;
use crate::comparer::KeyComparer;

/// A mutable container of unique keys.
///
/// `insert_key` and `remove_key` report whether the container changed.
///
/// # Examples
///
/// ```rust
/// use hashset_range::UniqueSet;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// assert!(set.insert_key(1));
/// assert!(!set.insert_key(1));
/// assert!(set.contains_key(&1));
/// assert!(set.remove_key(&1));
/// ```
pub trait UniqueSet<K> {
    /// Adds `key`, returning `true` if no equal key was present.
    fn insert_key(&mut self, key: K) -> bool;

    /// Removes the key equal to `key`, returning `true` if one was present.
    fn remove_key(&mut self, key: &K) -> bool;

    /// Returns `true` if a key equal to `key` is present.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns the number of keys.
    fn len(&self) -> usize;

    /// Returns `true` if there are no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hints that `additional` more keys are about to be inserted.
    fn reserve_keys(&mut self, additional: usize) {
        let _ = additional;
    }
}

impl<K, C: KeyComparer<K>> UniqueSet<K> for ComparerSet<K, C> {
    #[inline]
    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    #[inline]
    fn remove_key(&mut self, key: &K) -> bool {
        self.remove(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        ComparerSet::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ComparerSet::is_empty(self)
    }

    #[inline]
    fn reserve_keys(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<K: Hash + Eq, S: BuildHasher> UniqueSet<K> for HashSet<K, S> {
    #[inline]
    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    #[inline]
    fn remove_key(&mut self, key: &K) -> bool {
        self.remove(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn reserve_keys(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<K: Hash + Eq, S: BuildHasher> UniqueSet<K> for hashbrown::HashSet<K, S> {
    #[inline]
    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    #[inline]
    fn remove_key(&mut self, key: &K) -> bool {
        self.remove(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        hashbrown::HashSet::len(self)
    }

    #[inline]
    fn reserve_keys(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<K: Ord> UniqueSet<K> for BTreeSet<K> {
    #[inline]
    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    #[inline]
    fn remove_key(&mut self, key: &K) -> bool {
        self.remove(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
