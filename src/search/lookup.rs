use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::config::DuplicatePolicy;

/// Value-to-index table filled during a single scan and dropped afterwards.
pub trait LookupTable<T> {
    fn with_capacity(capacity: usize) -> Self;

    fn lookup(&self, value: &T) -> Option<usize>;

    fn record(&mut self, value: T, index: usize, policy: DuplicatePolicy);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash> LookupTable<T> for HashMap<T, usize> {
    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }

    fn lookup(&self, value: &T) -> Option<usize> {
        self.get(value).copied()
    }

    fn record(&mut self, value: T, index: usize, policy: DuplicatePolicy) {
        match policy {
            DuplicatePolicy::MostRecent => {
                self.insert(value, index);
            }
            DuplicatePolicy::Earliest => {
                self.entry(value).or_insert(index);
            }
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<T: Ord> LookupTable<T> for BTreeMap<T, usize> {
    // BTreeMap has no preallocation
    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn lookup(&self, value: &T) -> Option<usize> {
        self.get(value).copied()
    }

    fn record(&mut self, value: T, index: usize, policy: DuplicatePolicy) {
        match policy {
            DuplicatePolicy::MostRecent => {
                self.insert(value, index);
            }
            DuplicatePolicy::Earliest => {
                self.entry(value).or_insert(index);
            }
        }
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all<L: LookupTable<i32>>(policy: DuplicatePolicy) -> L {
        let mut table = L::with_capacity(4);
        for (index, value) in [4, 9, 4, 9, 4].into_iter().enumerate() {
            table.record(value, index, policy);
        }
        table
    }

    #[test]
    fn most_recent_overwrites() {
        let table: HashMap<i32, usize> = record_all(DuplicatePolicy::MostRecent);
        assert_eq!(table.lookup(&4), Some(4));
        assert_eq!(table.lookup(&9), Some(3));
        assert_eq!(LookupTable::len(&table), 2);

        let table: BTreeMap<i32, usize> = record_all(DuplicatePolicy::MostRecent);
        assert_eq!(table.lookup(&4), Some(4));
        assert_eq!(table.lookup(&9), Some(3));
    }

    #[test]
    fn earliest_keeps_first_index() {
        let table: HashMap<i32, usize> = record_all(DuplicatePolicy::Earliest);
        assert_eq!(table.lookup(&4), Some(0));
        assert_eq!(table.lookup(&9), Some(1));

        let table: BTreeMap<i32, usize> = record_all(DuplicatePolicy::Earliest);
        assert_eq!(table.lookup(&4), Some(0));
        assert_eq!(table.lookup(&9), Some(1));
    }

    #[test]
    fn missing_value_is_none() {
        let table = <HashMap<i32, usize> as LookupTable<i32>>::with_capacity(0);
        assert!(LookupTable::is_empty(&table));
        assert_eq!(table.lookup(&7), None);
    }
}
