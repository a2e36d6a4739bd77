use serde::{Deserialize, Serialize};

use crate::search::{DuplicatePolicy, LookupKind};
use crate::sequence::PairValue;
use crate::types::identifiers::SequenceVersion;

/// Two distinct positions in a sequence whose values sum to the target.
///
/// `first` is the earlier position (the one held in the lookup table),
/// `second` the element being scanned when the match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairIndices {
    pub first: usize,
    pub second: usize,
}

impl PairIndices {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Check that this pair is a valid answer for `values` and `target`.
    pub fn verify<T: PairValue>(&self, values: &[T], target: T) -> Result<(), PairError> {
        if self.first == self.second {
            return Err(PairError::SameIndex(self.first));
        }

        let len = values.len();
        let first_value = values
            .get(self.first)
            .ok_or(PairError::IndexOutOfBounds { index: self.first, len })?;
        let second_value = values
            .get(self.second)
            .ok_or(PairError::IndexOutOfBounds { index: self.second, len })?;

        // Overflow means the true sum lies outside T, so it cannot equal target.
        match first_value.checked_pair_sum(*second_value) {
            Some(sum) if sum == target => Ok(()),
            _ => Err(PairError::SumMismatch {
                first: self.first,
                second: self.second,
            }),
        }
    }
}

impl From<PairIndices> for (usize, usize) {
    fn from(pair: PairIndices) -> Self {
        pair.as_tuple()
    }
}

/// A matched pair together with the values it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch<T> {
    pub first: usize,
    pub second: usize,
    pub first_value: T,
    pub second_value: T,
}

impl<T: PairValue> PairMatch<T> {
    pub fn indices(&self) -> PairIndices {
        PairIndices::new(self.first, self.second)
    }
}

/// Describes how a search ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata<T> {
    pub target: T,
    pub sequence_len: usize,

    /// Elements examined before the scan stopped.
    pub elements_scanned: usize,
    /// Distinct values held by the lookup table when the scan stopped.
    pub lookup_entries: usize,

    pub lookup: LookupKind,
    pub duplicates: DuplicatePolicy,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_version: Option<SequenceVersion>,
}

/// Outcome of a search. `pair` is `None` when no two elements sum to the target,
/// which is an ordinary result and not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub pair: Option<PairMatch<T>>,
    pub search: SearchMetadata<T>,
}

impl<T: PairValue> SearchResult<T> {
    pub fn indices(&self) -> Option<PairIndices> {
        self.pair.as_ref().map(PairMatch::indices)
    }

    pub fn is_found(&self) -> bool {
        self.pair.is_some()
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Pair uses index {0} twice")]
    SameIndex(usize),

    #[error("Values at {first} and {second} do not sum to the target")]
    SumMismatch { first: usize, second: usize },
}
