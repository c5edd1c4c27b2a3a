//! Version layer for pair lists
//!
//! # Modules
//!
//! - [`semver`]: The version triple and comparator helpers
//! - [`upgrade`]: Bump levels and the bump between two versions
//! - [`bump`]: Minimum bump required by a diff

pub mod bump;
pub mod semver;
pub mod upgrade;

pub use self::bump::min_version_bump;
pub use self::semver::{Version, is_version_update, next_version, version_comparator};
pub use self::upgrade::{VersionUpgrade, get_version_upgrade};
