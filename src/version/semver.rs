use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersionError;
use crate::version::upgrade::VersionUpgrade;

/// Version triple carried by a pair list.
///
/// Field order gives the derived ordering: major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse a version string like "1.2.3".
///
/// Pre-release and build metadata are rejected since a pair list version
/// has no place to carry them.
impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = semver::Version::parse(s.trim())?;
        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(VersionError::NotPlain(s.to_string()));
        }
        Ok(parsed.into())
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Self::new(v.major, v.minor, v.patch)
    }
}

impl From<Version> for semver::Version {
    fn from(v: Version) -> Self {
        semver::Version::new(v.major, v.minor, v.patch)
    }
}

/// Compare two versions: major first, then minor, then patch
pub fn version_comparator(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Returns true if `update` is strictly newer than `base`
pub fn is_version_update(base: &Version, update: &Version) -> bool {
    version_comparator(base, update) == Ordering::Less
}

/// Returns the version that follows `base` after applying `bump`
pub fn next_version(base: &Version, bump: VersionUpgrade) -> Version {
    match bump {
        VersionUpgrade::None => *base,
        VersionUpgrade::Patch => Version::new(base.major, base.minor, base.patch + 1),
        VersionUpgrade::Minor => Version::new(base.major, base.minor + 1, 0),
        VersionUpgrade::Major => Version::new(base.major + 1, 0, 0),
    }
}
