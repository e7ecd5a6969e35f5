//! Bulk set operations over [`Sequence`]s.
//!
//! - [`build`]: construct a [`ComparerSet`](crate::ComparerSet) from a sequence
//! - [`mutate`]: add or remove every key of a sequence
//! - [`query`]: any-match and all-match membership predicates
//! - [`extension`]: method-call forms of the above
//!
//! Every free function takes its source as `Option<S>` and its key selector,
//! where it has one, as `Option<F>`. An absent argument fails with
//! [`SetRangeError::InvalidArgument`](crate::SetRangeError::InvalidArgument)
//! before the target set or the source is touched. A source whose length is
//! known to be zero short-circuits: builders return an empty set, mutators
//! return `0` and predicates return `false`.
//!
//! Panics raised by a key selector or a comparer propagate to the caller.
//! Keys committed to the target before the panic stay in place.

pub mod build;
pub mod extension;
pub mod mutate;
pub mod query;

use crate::sequence::Sequence;

/// Records the chosen iteration strategy and returns the known length.
fn dispatch<S: Sequence>(operation: &'static str, sequence: &S) -> Option<usize> {
    let known_len = sequence.known_len();
    log::trace!(
        "{operation}: iterating {:?} sequence (known length: {known_len:?})",
        S::SHAPE
    );
    known_len
}
