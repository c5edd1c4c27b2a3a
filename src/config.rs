use serde::Deserialize;

/// Diff configuration structure
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffConfig {
    pub duplicate_keys: DuplicateKeyPolicy,
}

/// What to do when one snapshot holds two entries with the same identity key
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateKeyPolicy {
    /// The later entry shadows the earlier one when indexing
    #[default]
    LastWins,
    /// Fail the diff with [`crate::error::DiffError`]
    Reject,
}

impl DiffConfig {
    pub fn rejecting_duplicates() -> Self {
        Self {
            duplicate_keys: DuplicateKeyPolicy::Reject,
        }
    }
}
