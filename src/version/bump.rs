//! Minimum version bump required by a pair list diff

use crate::diff::{PairListDiff, diff_pair_lists};
use crate::list::{Pair, Token};
use crate::version::upgrade::VersionUpgrade;

impl PairListDiff {
    /// Classify this diff.
    ///
    /// Removals are breaking, additions are features and attribute changes
    /// are fixes. The first matching rule wins, so a removal alongside an
    /// addition is still `Major`.
    pub fn min_version_bump(&self) -> VersionUpgrade {
        if !self.removed_tokens().is_empty() || !self.removed_pairs().is_empty() {
            return VersionUpgrade::Major;
        }
        if !self.added_tokens().is_empty() || !self.added_pairs().is_empty() {
            return VersionUpgrade::Minor;
        }
        if !self.changed_tokens().is_empty() || !self.changed_pairs().is_empty() {
            return VersionUpgrade::Patch;
        }
        VersionUpgrade::None
    }
}

/// Returns the minimum version bump for going from the base to the updated lists
pub fn min_version_bump(
    base_pairs: &[Pair],
    updated_pairs: &[Pair],
    base_tokens: &[Token],
    updated_tokens: &[Token],
) -> VersionUpgrade {
    diff_pair_lists(base_pairs, updated_pairs, base_tokens, updated_tokens).min_version_bump()
}
