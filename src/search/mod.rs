pub mod config;
pub mod lookup;
pub mod scan;

use std::collections::{BTreeMap, HashMap};

use crate::sequence::{PairValue, Sequence};
use crate::types::{PairIndices, PairMatch, SearchMetadata, SearchResult};
pub use config::{DuplicatePolicy, FinderConfig, LookupKind};
pub use lookup::LookupTable;
pub use scan::{scan, ScanOutcome};

/// Finds two positions whose values sum to a target.
///
/// Stateless between calls: each search builds its own lookup table and drops it
/// before returning, so one finder can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSumFinder {
    config: FinderConfig,
}

impl PairSumFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Indices of the first pair summing to `target`, or `None`.
    pub fn find<T: PairValue>(&self, values: &[T], target: T) -> Option<PairIndices> {
        self.run(values, target).pair
    }

    pub fn find_in<T: PairValue>(&self, sequence: &Sequence<T>, target: T) -> Option<PairIndices> {
        self.find(sequence.values(), target)
    }

    /// Like [`find`](Self::find), also reporting the matched values and how the scan went.
    pub fn search<T: PairValue>(&self, values: &[T], target: T) -> SearchResult<T> {
        let outcome = self.run(values, target);

        let pair = outcome.pair.map(|indices| PairMatch {
            first: indices.first,
            second: indices.second,
            first_value: values[indices.first],
            second_value: values[indices.second],
        });

        SearchResult {
            pair,
            search: SearchMetadata {
                target,
                sequence_len: values.len(),
                elements_scanned: outcome.elements_scanned,
                lookup_entries: outcome.lookup_entries,
                lookup: self.config.lookup,
                duplicates: self.config.duplicates,
                sequence_version: None,
            },
        }
    }

    pub fn search_in<T: PairValue>(&self, sequence: &Sequence<T>, target: T) -> SearchResult<T> {
        let mut result = self.search(sequence.values(), target);
        result.search.sequence_version = Some(sequence.version().clone());
        result
    }

    fn run<T: PairValue>(&self, values: &[T], target: T) -> ScanOutcome {
        tracing::debug!(
            len = values.len(),
            %target,
            lookup = ?self.config.lookup,
            duplicates = ?self.config.duplicates,
            "scanning for pair"
        );

        let outcome = match self.config.lookup {
            LookupKind::Hash => {
                scan::<T, HashMap<T, usize>>(values, target, self.config.duplicates)
            }
            LookupKind::Ordered => {
                scan::<T, BTreeMap<T, usize>>(values, target, self.config.duplicates)
            }
        };

        debug_assert!(outcome
            .pair
            .map_or(true, |pair| pair.verify(values, target).is_ok()));

        match outcome.pair {
            Some(pair) => tracing::trace!(
                first = pair.first,
                second = pair.second,
                scanned = outcome.elements_scanned,
                "pair found"
            ),
            None => tracing::trace!(scanned = outcome.elements_scanned, "no pair found"),
        }

        outcome
    }
}
