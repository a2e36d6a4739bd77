//! Single-pass pair-sum search over integer sequences.
//!
//! `pair-sum-core` finds two distinct positions in a sequence whose values add
//! up to a target, scanning once with a transient value-to-index table. The
//! first pair met in scan order is returned; when no such pair exists the
//! result is `None`, an ordinary outcome rather than an error.
//!
//! ```
//! use pair_sum_core::find_pair_indices;
//!
//! let pair = find_pair_indices(&[2, 7, 11, 15], 9).map(|p| p.as_tuple());
//! assert_eq!(pair, Some((0, 1)));
//! assert_eq!(find_pair_indices(&[1, 2, 3], 100), None);
//! ```

pub mod search;
pub mod sequence;
pub mod types;

pub use search::{DuplicatePolicy, FinderConfig, LookupKind, PairSumFinder};
pub use sequence::{PairValue, Sequence, SequenceError};
pub use types::{PairError, PairIndices, PairMatch, SearchMetadata, SearchResult, SequenceVersion};

/// Find a pair with the default finder (hash lookup, most recent index kept).
pub fn find_pair_indices<T: PairValue>(values: &[T], target: T) -> Option<PairIndices> {
    PairSumFinder::default().find(values, target)
}
