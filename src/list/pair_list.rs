//! Pair list snapshot

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diff::{PairListDiff, diff_pair_lists};
use crate::error::ListError;
use crate::list::types::{Pair, Token};
use crate::version::{Version, VersionUpgrade, get_version_upgrade, next_version};

/// Tag definitions keyed by tag id
pub type Tags = IndexMap<String, TagDefinition>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    pub description: String,
}

/// A registry of tokens and pairs at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairList {
    pub name: String,
    pub timestamp: DateTime<FixedOffset>,
    pub version: Version,
    pub pairs: Vec<Pair>,
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl PairList {
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ListError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Diff this list (as base) against `updated`
    pub fn diff(&self, updated: &PairList) -> PairListDiff {
        diff_pair_lists(&self.pairs, &updated.pairs, &self.tokens, &updated.tokens)
    }

    /// Minimum bump `updated` needs relative to this list
    pub fn min_version_bump(&self, updated: &PairList) -> VersionUpgrade {
        self.diff(updated).min_version_bump()
    }

    /// Lowest version `updated` may carry given its changes from this list
    pub fn next_version(&self, updated: &PairList) -> Version {
        next_version(&self.version, self.min_version_bump(updated))
    }

    /// Returns true if the version of `updated` is bumped at least as far as
    /// its content changes require
    pub fn accepts_version_of(&self, updated: &PairList) -> bool {
        get_version_upgrade(&self.version, &updated.version) >= self.min_version_bump(updated)
    }
}
