use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::sequence::PairValue;

/// Content hash of a sequence.
///
/// Canonical form is every value in decimal followed by `,`, so `[1, 2]`
/// hashes `"1,2,"` regardless of the integer width it was stored in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceVersion(String);

impl SequenceVersion {
    pub fn from_values<T: PairValue>(values: &[T]) -> Self {
        let mut hasher = Sha256::new();
        for value in values {
            hasher.update(value.to_string().as_bytes());
            hasher.update(b",");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SequenceVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
