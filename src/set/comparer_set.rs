//! Hash set with a pluggable comparison policy.
//!
//! [`ComparerSet`] stores unique keys in a [`hashbrown::HashTable`] and
//! delegates every hash and equality decision to a [`KeyComparer`]. The
//! comparer is chosen when the set is created and cannot be replaced
//! afterwards, so every operation on a set uses the same policy.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity       |
//! |------------|------------------|
//! | `insert`   | O(1) amortized   |
//! | `remove`   | O(1) expected    |
//! | `contains` | O(1) expected    |
//! | `len`      | O(1)             |
//! | `iter`     | O(capacity)      |

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use hashbrown::HashTable;
use hashbrown::hash_table::{self, Entry};

use crate::comparer::{DefaultComparer, KeyComparer};

// =============================================================================
// ComparerSet Definition
// =============================================================================

/// An unordered set of unique keys under a fixed comparison policy.
///
/// Two keys are the same element when the set's comparer says so. Iteration
/// order is unspecified.
///
/// # Examples
///
/// ```rust
/// use hashset_range::ComparerSet;
///
/// let mut set = ComparerSet::new();
/// assert!(set.insert(1));
/// assert!(!set.insert(1));
/// assert!(set.contains(&1));
/// assert!(set.remove(&1));
/// assert!(set.is_empty());
/// ```
#[derive(Clone)]
pub struct ComparerSet<K, C = DefaultComparer> {
    table: HashTable<K>,
    comparer: C,
}

impl<K> ComparerSet<K> {
    /// Creates an empty set using [`DefaultComparer`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparer(DefaultComparer::new())
    }

    /// Creates an empty set with room for `capacity` keys using [`DefaultComparer`].
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, DefaultComparer::new())
    }
}

impl<K, C> ComparerSet<K, C> {
    /// Creates an empty set using `comparer`. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_range::{CaseInsensitiveComparer, ComparerSet};
    ///
    /// let set: ComparerSet<String, _> = ComparerSet::with_comparer(CaseInsensitiveComparer::new());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[inline]
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            table: HashTable::new(),
            comparer,
        }
    }

    /// Creates an empty set with room for `capacity` keys using `comparer`.
    #[inline]
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            comparer,
        }
    }

    /// Returns the comparison policy of this set.
    #[inline]
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns the number of keys in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of keys the set can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns an iterator over the keys in unspecified order.
    #[inline]
    pub fn iter(&self) -> ComparerSetIterator<'_, K> {
        ComparerSetIterator {
            inner: self.table.iter(),
        }
    }

    /// Removes every key, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Keeps only the keys for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.table.retain(|key| predicate(key));
    }
}

impl<K, C: KeyComparer<K>> ComparerSet<K, C> {
    /// Adds `key` to the set.
    ///
    /// Returns `true` if the key was absent. An equal key already in the set
    /// is kept and `key` is dropped.
    pub fn insert(&mut self, key: K) -> bool {
        let hash = self.comparer.hash_key(&key);
        let comparer = &self.comparer;
        match self.table.entry(
            hash,
            |existing| comparer.keys_equal(existing, &key),
            |existing| comparer.hash_key(existing),
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(key);
                true
            }
        }
    }

    /// Adds `key` without looking for an equal key first.
    ///
    /// The caller must have established that no equal key is present.
    pub(crate) fn insert_absent(&mut self, key: K) {
        let hash = self.comparer.hash_key(&key);
        let comparer = &self.comparer;
        self.table
            .insert_unique(hash, key, |existing| comparer.hash_key(existing));
    }

    /// Removes the key equal to `key`. Returns `true` if one was present.
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        if self.table.is_empty() {
            return None;
        }
        let hash = self.comparer.hash_key(key);
        let comparer = &self.comparer;
        self.table
            .find_entry(hash, |existing| comparer.keys_equal(existing, key))
            .ok()
            .map(|occupied| occupied.remove().0)
    }

    /// Returns `true` if a key equal to `key` is in the set.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key equal to `key`.
    ///
    /// With a non-default comparer the stored key may differ from `key`:
    ///
    /// ```rust
    /// use hashset_range::{CaseInsensitiveComparer, ComparerSet};
    ///
    /// let mut set = ComparerSet::with_comparer(CaseInsensitiveComparer::new());
    /// set.insert("Key".to_string());
    /// assert_eq!(set.get(&"KEY".to_string()).map(String::as_str), Some("Key"));
    /// ```
    pub fn get(&self, key: &K) -> Option<&K> {
        if self.table.is_empty() {
            return None;
        }
        let hash = self.comparer.hash_key(key);
        self.table
            .find(hash, |existing| self.comparer.keys_equal(existing, key))
    }

    /// Reserves room for at least `additional` more keys.
    pub fn reserve(&mut self, additional: usize) {
        let comparer = &self.comparer;
        self.table
            .reserve(additional, |existing| comparer.hash_key(existing));
    }

    /// Shrinks the allocation as much as possible.
    pub fn shrink_to_fit(&mut self) {
        let comparer = &self.comparer;
        self.table
            .shrink_to_fit(|existing| comparer.hash_key(existing));
    }

    /// Returns `true` if every key of `self` is in `other`, under `other`'s comparer.
    pub fn is_subset<D: KeyComparer<K>>(&self, other: &ComparerSet<K, D>) -> bool {
        self.len() <= other.len() && self.iter().all(|key| other.contains(key))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over a [`ComparerSet`].
pub struct ComparerSetIterator<'a, K> {
    inner: hash_table::Iter<'a, K>,
}

impl<K> Clone for ComparerSetIterator<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K> Iterator for ComparerSetIterator<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for ComparerSetIterator<'_, K> {}

impl<K> FusedIterator for ComparerSetIterator<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for ComparerSetIterator<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over a [`ComparerSet`].
pub struct ComparerSetIntoIterator<K> {
    inner: hash_table::IntoIter<K>,
}

impl<K> Iterator for ComparerSetIntoIterator<K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for ComparerSetIntoIterator<K> {}

impl<K> FusedIterator for ComparerSetIntoIterator<K> {}

impl<K, C> IntoIterator for ComparerSet<K, C> {
    type Item = K;
    type IntoIter = ComparerSetIntoIterator<K>;

    fn into_iter(self) -> Self::IntoIter {
        ComparerSetIntoIterator {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, C> IntoIterator for &'a ComparerSet<K, C> {
    type Item = &'a K;
    type IntoIter = ComparerSetIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, C: Default> Default for ComparerSet<K, C> {
    fn default() -> Self {
        Self::with_comparer(C::default())
    }
}

impl<K: fmt::Debug, C> fmt::Debug for ComparerSet<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Sets are equal when they hold the same number of keys and every key of
/// `other` is found in `self` under `self`'s comparer.
impl<K, C: KeyComparer<K>> PartialEq for ComparerSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.iter().all(|key| self.contains(key))
    }
}

impl<K, C: KeyComparer<K>> Eq for ComparerSet<K, C> {}

impl<K, C: KeyComparer<K> + Default> FromIterator<K> for ComparerSet<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iterable: I) -> Self {
        let mut set = Self::default();
        set.extend(iterable);
        set
    }
}

impl<K, C: KeyComparer<K>> Extend<K> for ComparerSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iterable: I) {
        let iterator = iterable.into_iter();
        let (lower, _) = iterator.size_hint();
        let additional = if self.is_empty() {
            lower
        } else {
            lower.div_ceil(2)
        };
        self.reserve(additional);
        for key in iterator {
            self.insert(key);
        }
    }
}

impl<'a, K: Clone + 'a, C: KeyComparer<K>> Extend<&'a K> for ComparerSet<K, C> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iterable: I) {
        self.extend(iterable.into_iter().cloned());
    }
}

impl<K: Hash + Eq, const N: usize> From<[K; N]> for ComparerSet<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

static_assertions::assert_impl_all!(ComparerSet<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(ComparerSetIterator<'static, String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, C> serde::Serialize for ComparerSet<K, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ComparerSetVisitor<K, C> {
    marker: std::marker::PhantomData<(K, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::de::Visitor<'de> for ComparerSetVisitor<K, C>
where
    K: serde::Deserialize<'de>,
    C: KeyComparer<K> + Default,
{
    type Value = ComparerSet<K, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(OPAQUE_CAPACITY_LIMIT);
        let mut set = ComparerSet::with_capacity_and_comparer(capacity, C::default());
        while let Some(key) = seq.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::Deserialize<'de> for ComparerSet<K, C>
where
    K: serde::Deserialize<'de>,
    C: KeyComparer<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ComparerSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::comparer::CaseInsensitiveComparer;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let set: ComparerSet<i32> = ComparerSet::new();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_serialize_single_element() {
        let set: ComparerSet<i32> = [42].into();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[42]");
    }

    #[rstest]
    fn test_deserialize_deduplicates_with_comparer() {
        let json = r#"["Key", "KEY", "other"]"#;
        let set: ComparerSet<String, CaseInsensitiveComparer> = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"key".to_string()));
    }

    #[rstest]
    fn test_roundtrip_preserves_membership() {
        let set: ComparerSet<i32> = [1, 2, 3].into();
        let json = serde_json::to_string(&set).unwrap();
        let parsed: ComparerSet<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
