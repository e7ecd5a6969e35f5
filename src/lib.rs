//! # hashset-range
//!
//! Bulk construction, insertion, removal and membership queries for hash
//! sets, with optional key selectors and pluggable comparison policies.
//!
//! ## Overview
//!
//! - **Builders**: [`to_set`], [`to_set_by`], [`to_set_safe_by`] and their
//!   `_with` forms taking a [`KeyComparer`]
//! - **Mutators**: [`add_range`] and [`remove_range`] return how many keys
//!   changed the set
//! - **Predicates**: [`contains_any`] (any-match, also exported as
//!   [`contains_range`]) and [`contains_all`] (full coverage)
//! - **Sets**: [`ComparerSet`] holds its comparer for its whole lifetime;
//!   the mutators and predicates work on any [`UniqueSet`]
//! - **Sequences**: sources are [`Contiguous`], [`Growable`] or [`Opaque`],
//!   chosen at compile time through [`IntoSequence`]
//!
//! Every free function takes its source (and key selector) as an `Option`
//! and reports an absent one as [`SetRangeError::InvalidArgument`] before
//! doing any work.
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash with `rustc-hash` by default
//! - `ahash`: hash with `ahash` by default
//! - `serde`: `Serialize`/`Deserialize` for [`ComparerSet`]
//!
//! ## Example
//!
//! ```rust
//! use hashset_range::prelude::*;
//!
//! let source = ["a", "b", "a", "c"].map(String::from);
//! let mut set: ComparerSet<String> = to_set(Some(&source)).unwrap();
//! assert_eq!(set.len(), 3);
//!
//! let added = add_range(&mut set, Some(&["c", "d"].map(String::from))).unwrap();
//! assert_eq!(added, 1);
//!
//! assert_eq!(contains_any(&set, Some(&["z", "d"].map(String::from))), Ok(true));
//! assert_eq!(contains_any(&set, Some(&["z", "y"].map(String::from))), Ok(false));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the builders, mutators, predicates, extension traits and
/// the types they take.
///
/// # Usage
///
/// ```rust
/// use hashset_range::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparer::*;
    pub use crate::error::*;
    pub use crate::range::build::*;
    pub use crate::range::extension::*;
    pub use crate::range::mutate::*;
    pub use crate::range::query::*;
    pub use crate::sequence::*;
    pub use crate::set::*;
}

pub mod comparer;
pub mod error;
pub mod range;
pub mod sequence;
pub mod set;

pub use comparer::{
    CaseInsensitiveComparer, DefaultComparer, DefaultHashBuilder, KeyComparer, ProjectionComparer,
};
pub use error::{ErrorKind, InvalidArgumentError, SetRangeError};
pub use range::build::{
    to_set, to_set_by, to_set_by_with, to_set_safe, to_set_safe_by, to_set_safe_by_with,
    to_set_safe_with, to_set_with,
};
pub use range::extension::{SetRangeExt, ToSetExt};
pub use range::mutate::{add_range, add_range_by, remove_range, remove_range_by};
pub use range::query::{
    contains_all, contains_all_by, contains_any, contains_any_by, contains_range,
    contains_range_by,
};
pub use sequence::{
    Contiguous, Growable, IntoKey, IntoSequence, ItemOf, Opaque, Sequence, SequenceShape, opaque,
};
pub use set::{ComparerSet, ComparerSetIntoIterator, ComparerSetIterator, UniqueSet};
