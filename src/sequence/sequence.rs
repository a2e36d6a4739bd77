use serde::Serialize;
use thiserror::Error;

use super::value::PairValue;
use crate::types::identifiers::SequenceVersion;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Sequence must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Sequence must be a JSON array of integers: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered, fixed-length run of integers to search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence<T> {
    values: Vec<T>,
    version: SequenceVersion,
}

impl<T: PairValue> Sequence<T> {
    pub fn from_values(values: Vec<T>) -> Self {
        let version = SequenceVersion::from_values(&values);
        Self { values, version }
    }

    /// Ingest raw bytes holding a JSON array such as `[2, 7, 11, 15]`.
    ///
    /// Values that do not fit `T` are rejected as a parse error rather than truncated.
    pub fn ingest(raw: Vec<u8>) -> Result<Self, SequenceError> {
        let text = String::from_utf8(raw)?;
        let values: Vec<T> = serde_json::from_str(&text)?;

        Ok(Self::from_values(values))
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn version(&self) -> &SequenceVersion {
        &self.version
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T: PairValue> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}
