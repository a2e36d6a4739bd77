use crate::search::config::DuplicatePolicy;
use crate::search::lookup::LookupTable;
use crate::sequence::PairValue;
use crate::types::PairIndices;

pub struct ScanOutcome {
    pub pair: Option<PairIndices>,
    pub elements_scanned: usize,
    pub lookup_entries: usize,
}

/// Single left-to-right pass; the first pair found wins.
///
/// The table only ever holds indices of elements before the current one, so a
/// hit always pairs two distinct positions.
pub fn scan<T, L>(values: &[T], target: T, policy: DuplicatePolicy) -> ScanOutcome
where
    T: PairValue,
    L: LookupTable<T>,
{
    let mut table = L::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        // No complement in range means nothing of type T can pair with this value.
        if let Some(complement) = value.checked_complement(target) {
            if let Some(earlier) = table.lookup(&complement) {
                debug_assert!(earlier < index);
                return ScanOutcome {
                    pair: Some(PairIndices::new(earlier, index)),
                    elements_scanned: index + 1,
                    lookup_entries: table.len(),
                };
            }
        }

        table.record(value, index, policy);
    }

    ScanOutcome {
        pair: None,
        elements_scanned: values.len(),
        lookup_entries: table.len(),
    }
}
