pub mod value;
pub mod sequence;

pub use crate::types::identifiers::SequenceVersion;
pub use value::PairValue;
pub use sequence::{Sequence, SequenceError};
