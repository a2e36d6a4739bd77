pub mod identifiers;
pub mod pair_result;

pub use identifiers::SequenceVersion;
pub use pair_result::{PairError, PairIndices, PairMatch, SearchMetadata, SearchResult};
