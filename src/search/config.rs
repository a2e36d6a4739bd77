use serde::{Deserialize, Serialize};

/// Backing container for the transient value-to-index table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    /// `HashMap`, average O(1) per element.
    #[default]
    Hash,
    /// `BTreeMap`, O(log n) per element.
    Ordered,
}

/// Which index the table keeps when a value repeats without having matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Overwrite with the latest index.
    #[default]
    MostRecent,
    /// Keep the first index seen.
    Earliest,
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    pub version: String,
    #[serde(default)]
    pub lookup: LookupKind,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl FinderConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            lookup: LookupKind::Hash,
            duplicates: DuplicatePolicy::MostRecent,
        }
    }

    pub fn with_lookup(mut self, lookup: LookupKind) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::v0()
    }
}
