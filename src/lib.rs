//! Structural diffs and semantic version bumps for token/pair registries
//!
//! # Modules
//!
//! - [`list`]: Token, pair and registry snapshot types
//! - [`diff`]: Diff engine comparing base and updated snapshots
//! - [`version`]: Version triple, comparator helpers and bump classification
//! - [`config`]: Diff configuration (duplicate key policy)
//! - [`error`]: Error types for fallible boundaries

pub mod config;
pub mod diff;
pub mod error;
pub mod list;
pub mod version;

pub use config::{DiffConfig, DuplicateKeyPolicy};
pub use diff::{Differ, PairField, PairListDiff, TokenField, diff_pair_lists};
pub use error::{DiffError, ListError, VersionError};
pub use list::{AdapterType, Extensions, Pair, PairList, TagDefinition, Tags, Token};
pub use version::{
    Version, VersionUpgrade, get_version_upgrade, is_version_update, min_version_bump,
    next_version, version_comparator,
};
