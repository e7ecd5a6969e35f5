//! Input sequences and their iteration strategies.
//!
//! Every bulk operation in this crate consumes a [`Sequence`]. A sequence
//! comes in one of three shapes, fixed at compile time by its type:
//!
//! | Shape                         | Wrapper          | Iteration                | Length        |
//! |-------------------------------|------------------|--------------------------|---------------|
//! | [`SequenceShape::Contiguous`] | [`Contiguous`]   | by index over a slice    | always known  |
//! | [`SequenceShape::Growable`]   | [`Growable`]     | by index over a `Vec`    | always known  |
//! | [`SequenceShape::Opaque`]     | [`Opaque`]       | pull-based `next()` loop | when exact    |
//!
//! The shape only changes the cost of iteration. Every operation yields the
//! same result whichever shape carries the elements.
//!
//! Plain borrowed collections convert through [`IntoSequence`]: slices and
//! arrays become [`Contiguous`], `&Vec<T>` becomes [`Growable`], and other
//! collections (`VecDeque`, `HashSet`, `BTreeSet`, [`ComparerSet`]) become
//! [`Opaque`] with a known length. Arbitrary iterators are wrapped with
//! [`opaque`].
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{IntoSequence, Sequence, SequenceShape, opaque};
//!
//! let values = vec![1, 2, 3];
//! type VecSequence<'a> = <&'a Vec<i32> as IntoSequence>::Sequence;
//! assert_eq!(<VecSequence<'_> as Sequence>::SHAPE, SequenceShape::Growable);
//! assert_eq!((&values).into_sequence().known_len(), Some(3));
//!
//! let filtered = opaque(values.iter().filter(|value| **value > 1));
//! assert_eq!(filtered.known_len(), None);
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::convert::Infallible;
use std::ops::ControlFlow;

use crate::set::{ComparerSet, ComparerSetIterator};

/// Upper bound on the capacity reserved from an [`Opaque`] length.
pub(crate) const OPAQUE_CAPACITY_LIMIT: usize = 4096;

/// The iteration strategy of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceShape {
    /// Array-like: random access over a slice with a known length.
    Contiguous,
    /// List-like: random access over a `Vec` with a known length.
    Growable,
    /// Forward-only iteration with a possibly unknown length.
    Opaque,
}

/// A source of elements with a fixed iteration strategy.
///
/// Implementations must not consume any element in [`Sequence::known_len`].
pub trait Sequence: Sized {
    /// The element type produced by this sequence.
    type Item;

    /// The iteration strategy of this sequence type.
    const SHAPE: SequenceShape;

    /// Returns the number of elements if it is known without iterating.
    fn known_len(&self) -> Option<usize>;

    /// Returns how many slots a target set may reserve before iterating.
    ///
    /// Defaults to the known length. [`Opaque`] caps it, since its length
    /// comes from a size hint rather than from elements held in memory.
    fn capacity_hint(&self) -> usize {
        self.known_len().unwrap_or(0)
    }

    /// Feeds every element to `visit` until it returns [`ControlFlow::Break`].
    fn try_for_each_item<B, F>(self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>;

    /// Feeds every element to `visit`.
    fn for_each_item<F>(self, mut visit: F)
    where
        F: FnMut(Self::Item),
    {
        let flow = self.try_for_each_item(|item| {
            visit(item);
            ControlFlow::<Infallible>::Continue(())
        });
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }
}

/// Conversion into a [`Sequence`].
pub trait IntoSequence {
    /// The sequence this value converts into.
    type Sequence: Sequence;

    /// Converts this value into its sequence.
    fn into_sequence(self) -> Self::Sequence;
}

/// The element type produced by an [`IntoSequence`] value.
pub type ItemOf<S> = <<S as IntoSequence>::Sequence as Sequence>::Item;

// =============================================================================
// Contiguous
// =============================================================================

/// An array-like sequence iterated by index.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{Contiguous, Sequence};
///
/// let sequence = Contiguous(&[1, 2, 3][..]);
/// assert_eq!(sequence.known_len(), Some(3));
/// ```
#[derive(Debug)]
pub struct Contiguous<'a, T>(pub &'a [T]);

impl<T> Clone for Contiguous<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Contiguous<'_, T> {}

impl<'a, T> Sequence for Contiguous<'a, T> {
    type Item = &'a T;

    const SHAPE: SequenceShape = SequenceShape::Contiguous;

    #[inline]
    fn known_len(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn try_for_each_item<B, F>(self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>,
    {
        let elements = self.0;
        let mut index = 0;
        while index < elements.len() {
            visit(&elements[index])?;
            index += 1;
        }
        ControlFlow::Continue(())
    }
}

impl<T> IntoSequence for Contiguous<'_, T> {
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Sequence = Contiguous<'a, T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Contiguous(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a [T; N] {
    type Sequence = Contiguous<'a, T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Contiguous(self.as_slice())
    }
}

// =============================================================================
// Growable
// =============================================================================

/// A list-like sequence iterated by index over a `Vec`.
#[derive(Debug)]
pub struct Growable<'a, T>(pub &'a Vec<T>);

impl<T> Clone for Growable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Growable<'_, T> {}

impl<'a, T> Sequence for Growable<'a, T> {
    type Item = &'a T;

    const SHAPE: SequenceShape = SequenceShape::Growable;

    #[inline]
    fn known_len(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn try_for_each_item<B, F>(self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>,
    {
        let list = self.0;
        let mut index = 0;
        while index < list.len() {
            visit(&list[index])?;
            index += 1;
        }
        ControlFlow::Continue(())
    }
}

impl<T> IntoSequence for Growable<'_, T> {
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Sequence = Growable<'a, T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Growable(self)
    }
}

// =============================================================================
// Opaque
// =============================================================================

/// A forward-only sequence over any iterator.
///
/// The length is known only when the iterator reports an exact size hint.
/// The iterator is consumed by the operation it is passed to.
#[derive(Debug, Clone)]
pub struct Opaque<I>(pub I);

/// Wraps any iterable as an [`Opaque`] sequence.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{Sequence, opaque};
///
/// assert_eq!(opaque(0..4).known_len(), Some(4));
/// assert_eq!(opaque((0..4).filter(|value| value % 2 == 0)).known_len(), None);
/// ```
#[inline]
pub fn opaque<I: IntoIterator>(iterable: I) -> Opaque<I::IntoIter> {
    Opaque(iterable.into_iter())
}

impl<I: Iterator> Sequence for Opaque<I> {
    type Item = I::Item;

    const SHAPE: SequenceShape = SequenceShape::Opaque;

    #[inline]
    fn known_len(&self) -> Option<usize> {
        match self.0.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }

    /// The known length, capped at 4096.
    #[inline]
    fn capacity_hint(&self) -> usize {
        self.known_len().map_or(0, |len| len.min(OPAQUE_CAPACITY_LIMIT))
    }

    fn try_for_each_item<B, F>(self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>,
    {
        for item in self.0 {
            visit(item)?;
        }
        ControlFlow::Continue(())
    }
}

impl<I: Iterator> IntoSequence for Opaque<I> {
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}

impl<'a, T> IntoSequence for &'a VecDeque<T> {
    type Sequence = Opaque<std::collections::vec_deque::Iter<'a, T>>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Opaque(self.iter())
    }
}

impl<'a, T, S> IntoSequence for &'a HashSet<T, S> {
    type Sequence = Opaque<std::collections::hash_set::Iter<'a, T>>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Opaque(self.iter())
    }
}

impl<'a, T> IntoSequence for &'a BTreeSet<T> {
    type Sequence = Opaque<std::collections::btree_set::Iter<'a, T>>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Opaque(self.iter())
    }
}

impl<'a, K, C> IntoSequence for &'a ComparerSet<K, C> {
    type Sequence = Opaque<ComparerSetIterator<'a, K>>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        Opaque(self.iter())
    }
}

// =============================================================================
// IntoKey
// =============================================================================

/// How an element of a sequence stands in for a key of type `K`.
///
/// Used by the operations that take no key selector. Owned keys are moved
/// into the set; borrowed keys are cloned on insertion and only borrowed
/// for lookups and removals.
pub trait IntoKey<K> {
    /// Converts this element into an owned key.
    fn into_key(self) -> K;

    /// Views this element as a key.
    fn as_key(&self) -> &K;
}

impl<K> IntoKey<K> for K {
    #[inline]
    fn into_key(self) -> K {
        self
    }

    #[inline]
    fn as_key(&self) -> &K {
        self
    }
}

impl<K: Clone> IntoKey<K> for &K {
    #[inline]
    fn into_key(self) -> K {
        self.clone()
    }

    #[inline]
    fn as_key(&self) -> &K {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
