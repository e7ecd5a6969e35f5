//! Comparison policies for [`ComparerSet`](crate::ComparerSet).
//!
//! A comparison policy decides when two keys are the same element. It is a
//! pair of functions, a hash and an equality, that must agree with each
//! other: whenever [`KeyComparer::keys_equal`] returns `true` for two keys,
//! [`KeyComparer::hash_key`] must return the same value for both.
//!
//! - [`DefaultComparer`]: the key type's own `Hash` and `Eq`
//! - [`CaseInsensitiveComparer`]: string keys compared without regard to case
//! - [`ProjectionComparer`]: keys compared through a projection function
//!
//! # Hasher Selection
//!
//! [`DefaultHashBuilder`] is `std::hash::RandomState` unless one of the
//! `fxhash` or `ahash` features is enabled. When both are enabled, `fxhash`
//! takes precedence.
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{CaseInsensitiveComparer, KeyComparer};
//!
//! let comparer = CaseInsensitiveComparer::new();
//! assert!(comparer.keys_equal("Hello", "hELLO"));
//! assert_eq!(comparer.hash_key("Hello"), comparer.hash_key("hELLO"));
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// The hash builder used by the comparers when none is supplied.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by the comparers when none is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by the comparers when none is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// An equality and hash policy over keys of type `K`.
///
/// # Laws
///
/// For all keys `a` and `b`:
///
/// - `keys_equal(a, a)` is `true`
/// - `keys_equal(a, b) == keys_equal(b, a)`
/// - `keys_equal(a, b)` implies `hash_key(a) == hash_key(b)`
///
/// A set relies on these laws; a comparer that breaks them produces a set
/// with unspecified (but memory-safe) membership behavior.
pub trait KeyComparer<K: ?Sized> {
    /// Returns the hash of `key` under this policy.
    fn hash_key(&self, key: &K) -> u64;

    /// Returns `true` if `left` and `right` are the same element under this policy.
    fn keys_equal(&self, left: &K, right: &K) -> bool;
}

impl<K: ?Sized, C: KeyComparer<K> + ?Sized> KeyComparer<K> for &C {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        (**self).hash_key(key)
    }

    #[inline]
    fn keys_equal(&self, left: &K, right: &K) -> bool {
        (**self).keys_equal(left, right)
    }
}

// =============================================================================
// DefaultComparer
// =============================================================================

/// Compares keys with their natural `Hash` and `Eq` implementations.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{DefaultComparer, KeyComparer};
///
/// let comparer = DefaultComparer::new();
/// assert!(comparer.keys_equal(&1, &1));
/// assert!(!comparer.keys_equal(&1, &2));
/// ```
#[derive(Clone, Default)]
pub struct DefaultComparer<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> fmt::Debug for DefaultComparer<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DefaultComparer").finish_non_exhaustive()
    }
}

impl DefaultComparer {
    /// Creates a comparer using [`DefaultHashBuilder`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<S> DefaultComparer<S> {
    /// Creates a comparer hashing with the given hash builder.
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    /// Returns the hash builder of this comparer.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

impl<K: Hash + Eq + ?Sized, S: BuildHasher> KeyComparer<K> for DefaultComparer<S> {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    #[inline]
    fn keys_equal(&self, left: &K, right: &K) -> bool {
        left == right
    }
}

// =============================================================================
// CaseInsensitiveComparer
// =============================================================================

/// Compares string keys after folding every character to lowercase.
///
/// Folding is done per `char` with [`char::to_lowercase`], so multi-character
/// lowercase expansions are taken into account on both sides.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{CaseInsensitiveComparer, KeyComparer};
///
/// let comparer = CaseInsensitiveComparer::new();
/// assert!(comparer.keys_equal(&"ABC".to_string(), &"abc".to_string()));
/// assert!(!comparer.keys_equal(&"ABC".to_string(), &"abd".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct CaseInsensitiveComparer<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> fmt::Debug for CaseInsensitiveComparer<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("CaseInsensitiveComparer").finish_non_exhaustive()
    }
}

impl CaseInsensitiveComparer {
    /// Creates a comparer using [`DefaultHashBuilder`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<S> CaseInsensitiveComparer<S> {
    /// Creates a comparer hashing with the given hash builder.
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

impl<K: AsRef<str> + ?Sized, S: BuildHasher> KeyComparer<K> for CaseInsensitiveComparer<S> {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = self.hash_builder.build_hasher();
        for character in folded(key.as_ref()) {
            hasher.write_u32(u32::from(character));
        }
        hasher.finish()
    }

    fn keys_equal(&self, left: &K, right: &K) -> bool {
        let (left, right) = (left.as_ref(), right.as_ref());
        left == right || folded(left).eq(folded(right))
    }
}

// =============================================================================
// ProjectionComparer
// =============================================================================

/// Compares keys by the value of a projection.
///
/// Two keys are equal when their projections are equal, and a key hashes
/// as its projection does.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{KeyComparer, ProjectionComparer};
///
/// let comparer = ProjectionComparer::new(|value: &i32| value.rem_euclid(10));
/// assert!(comparer.keys_equal(&3, &13));
/// assert!(!comparer.keys_equal(&3, &14));
/// ```
#[derive(Clone, Default)]
pub struct ProjectionComparer<F, S = DefaultHashBuilder> {
    projection: F,
    hash_builder: S,
}

impl<F> ProjectionComparer<F> {
    /// Creates a comparer projecting keys through `projection`.
    #[inline]
    pub fn new(projection: F) -> Self {
        Self {
            projection,
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<F, S> ProjectionComparer<F, S> {
    /// Creates a comparer with an explicit hash builder.
    #[inline]
    pub const fn with_hasher(projection: F, hash_builder: S) -> Self {
        Self {
            projection,
            hash_builder,
        }
    }
}

impl<F, S> fmt::Debug for ProjectionComparer<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ProjectionComparer").finish_non_exhaustive()
    }
}

impl<K, P, F, S> KeyComparer<K> for ProjectionComparer<F, S>
where
    K: ?Sized,
    P: Hash + Eq,
    F: Fn(&K) -> P,
    S: BuildHasher,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one((self.projection)(key))
    }

    #[inline]
    fn keys_equal(&self, left: &K, right: &K) -> bool {
        (self.projection)(left) == (self.projection)(right)
    }
}

// =============================================================================
// Tests
// =============================================================================
