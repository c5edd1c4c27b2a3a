//! Semantic version bump levels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::semver::Version;

/// Severity of a change, in increasing order of breaking-ness
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersionUpgrade {
    /// Nothing changed
    #[default]
    None,
    /// Descriptive attributes of existing entries changed
    Patch,
    /// Entries were added
    Minor,
    /// Entries were removed
    Major,
}

impl VersionUpgrade {
    /// Returns the string representation of the upgrade
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionUpgrade::None => "NONE",
            VersionUpgrade::Patch => "PATCH",
            VersionUpgrade::Minor => "MINOR",
            VersionUpgrade::Major => "MAJOR",
        }
    }
}

impl fmt::Display for VersionUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the bump that was applied going from `base` to `update`.
///
/// A downgrade in any component yields `None`.
pub fn get_version_upgrade(base: &Version, update: &Version) -> VersionUpgrade {
    if update.major > base.major {
        return VersionUpgrade::Major;
    }
    if update.major < base.major {
        return VersionUpgrade::None;
    }
    if update.minor > base.minor {
        return VersionUpgrade::Minor;
    }
    if update.minor < base.minor {
        return VersionUpgrade::None;
    }
    if update.patch > base.patch {
        VersionUpgrade::Patch
    } else {
        VersionUpgrade::None
    }
}
