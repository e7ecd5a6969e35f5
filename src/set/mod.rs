//! Set containers and the set primitive used by bulk operations.
//!
//! - [`ComparerSet`]: an unordered set whose comparison policy is fixed at
//!   construction
//! - [`UniqueSet`]: the insert/remove/contains primitive that bulk
//!   mutators and predicates are written against
//!
//! # Examples
//!
//! ```rust
//! use hashset_range::{CaseInsensitiveComparer, ComparerSet};
//!
//! let mut set = ComparerSet::with_comparer(CaseInsensitiveComparer::new());
//! assert!(set.insert("Alpha".to_string()));
//! assert!(!set.insert("ALPHA".to_string()));
//! assert_eq!(set.len(), 1);
//! ```

mod comparer_set;
mod unique_set;

pub use comparer_set::ComparerSet;
pub use comparer_set::ComparerSetIntoIterator;
pub use comparer_set::ComparerSetIterator;
pub use unique_set::UniqueSet;
