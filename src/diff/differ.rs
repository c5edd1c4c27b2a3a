//! Diff engine comparing a base and an updated pair list

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DiffConfig, DuplicateKeyPolicy};
use crate::diff::entry::{ListEntry, PairField, TokenField};
use crate::error::DiffError;
use crate::list::{Pair, Token};

/// Changed attributes keyed by primary then secondary identity
pub type Changes<P, F> = IndexMap<P, IndexMap<String, Vec<F>>>;

/// `chain_id -> address -> changed attributes`
pub type ChangedTokens = Changes<u64, TokenField>;

/// `base address -> quote address -> changed attributes`
pub type ChangedPairs = Changes<String, PairField>;

/// Differences between a base list and an updated list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairListDiff {
    added_tokens: Vec<Token>,
    removed_tokens: Vec<Token>,
    added_pairs: Vec<Pair>,
    removed_pairs: Vec<Pair>,
    changed_tokens: ChangedTokens,
    changed_pairs: ChangedPairs,
}

impl PairListDiff {
    /// Tokens from the updated list whose key is not in the base list
    pub fn added_tokens(&self) -> &[Token] {
        &self.added_tokens
    }

    /// Tokens from the base list whose key is not in the updated list
    pub fn removed_tokens(&self) -> &[Token] {
        &self.removed_tokens
    }

    /// Pairs from the updated list whose key is not in the base list
    pub fn added_pairs(&self) -> &[Pair] {
        &self.added_pairs
    }

    /// Pairs from the base list whose key is not in the updated list
    pub fn removed_pairs(&self) -> &[Pair] {
        &self.removed_pairs
    }

    pub fn changed_tokens(&self) -> &ChangedTokens {
        &self.changed_tokens
    }

    pub fn changed_pairs(&self) -> &ChangedPairs {
        &self.changed_pairs
    }

    /// Returns true if both lists are equivalent under attribute comparison
    pub fn is_empty(&self) -> bool {
        self.added_tokens.is_empty()
            && self.removed_tokens.is_empty()
            && self.added_pairs.is_empty()
            && self.removed_pairs.is_empty()
            && self.changed_tokens.is_empty()
            && self.changed_pairs.is_empty()
    }
}

/// Diff engine with a configurable duplicate key policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Compute the diff between base and updated lists.
    ///
    /// Fails only when the config rejects duplicate keys and one of the four
    /// inputs holds two entries with the same identity.
    pub fn diff(
        &self,
        base_pairs: &[Pair],
        updated_pairs: &[Pair],
        base_tokens: &[Token],
        updated_tokens: &[Token],
    ) -> Result<PairListDiff, DiffError> {
        if self.config.duplicate_keys == DuplicateKeyPolicy::Reject {
            ensure_unique(base_pairs, "base")?;
            ensure_unique(updated_pairs, "updated")?;
            ensure_unique(base_tokens, "base")?;
            ensure_unique(updated_tokens, "updated")?;
        }

        Ok(diff_pair_lists(
            base_pairs,
            updated_pairs,
            base_tokens,
            updated_tokens,
        ))
    }
}

/// Compute the diff between base and updated lists.
///
/// Entries are matched by identity key, never by position. If a list holds
/// the same key twice, the later entry shadows the earlier one.
pub fn diff_pair_lists(
    base_pairs: &[Pair],
    updated_pairs: &[Pair],
    base_tokens: &[Token],
    updated_tokens: &[Token],
) -> PairListDiff {
    let pairs = diff_entries(base_pairs, updated_pairs);
    let tokens = diff_entries(base_tokens, updated_tokens);

    PairListDiff {
        added_tokens: tokens.added,
        removed_tokens: tokens.removed,
        added_pairs: pairs.added,
        removed_pairs: pairs.removed,
        changed_tokens: tokens.changed,
        changed_pairs: pairs.changed,
    }
}

struct EntryDiff<T: ListEntry> {
    added: Vec<T>,
    removed: Vec<T>,
    changed: Changes<T::Primary, T::Field>,
}

fn diff_entries<'a, T: ListEntry>(base: &'a [T], updated: &'a [T]) -> EntryDiff<T> {
    let mut indexed_base: HashMap<(T::Primary, &'a str), &'a T> =
        HashMap::with_capacity(base.len());
    for entry in base {
        let key = (entry.primary_key(), entry.secondary_key());
        if indexed_base.insert(key, entry).is_some() {
            warn!(
                "Duplicate {} in base list shadows earlier entry: {:?}/{}",
                T::KIND,
                entry.primary_key(),
                entry.secondary_key()
            );
        }
    }

    // Value is the position in `added` for keys missing from base
    let mut seen: HashMap<(T::Primary, &'a str), Option<usize>> =
        HashMap::with_capacity(updated.len());
    let mut added = Vec::new();
    let mut changed: Changes<T::Primary, T::Field> = IndexMap::new();

    for entry in updated {
        let key = (entry.primary_key(), entry.secondary_key());
        let duplicate = seen.get(&key).copied();
        if duplicate.is_some() {
            warn!(
                "Duplicate {} in updated list shadows earlier entry: {:?}/{}",
                T::KIND,
                key.0,
                key.1
            );
        }

        match indexed_base.get(&key) {
            None => match duplicate.flatten() {
                Some(position) => added[position] = entry.clone(),
                None => {
                    seen.insert(key, Some(added.len()));
                    added.push(entry.clone());
                }
            },
            Some(base_entry) => {
                let fields = entry.changed_fields(base_entry);
                if fields.is_empty() {
                    clear_change(&mut changed, &key.0, key.1);
                } else {
                    changed
                        .entry(key.0.clone())
                        .or_default()
                        .insert(key.1.to_string(), fields);
                }
                seen.insert(key, None);
            }
        }
    }

    let removed: Vec<T> = base
        .iter()
        .filter(|entry| !seen.contains_key(&(entry.primary_key(), entry.secondary_key())))
        .cloned()
        .collect();

    debug!(
        "Diffed {} entries: {} added, {} removed, {} changed",
        T::KIND,
        added.len(),
        removed.len(),
        changed.values().map(IndexMap::len).sum::<usize>()
    );

    EntryDiff {
        added,
        removed,
        changed,
    }
}

fn clear_change<P: Eq + Hash, F>(changed: &mut Changes<P, F>, primary: &P, secondary: &str) {
    let Some(inner) = changed.get_mut(primary) else {
        return;
    };
    inner.shift_remove(secondary);
    if inner.is_empty() {
        changed.shift_remove(primary);
    }
}

fn ensure_unique<T: ListEntry>(entries: &[T], list: &'static str) -> Result<(), DiffError> {
    let mut keys = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !keys.insert((entry.primary_key(), entry.secondary_key())) {
            return Err(entry.duplicate_error(list));
        }
    }
    Ok(())
}
