//! Diff engine for pair lists
//!
//! # Modules
//!
//! - [`attribute`]: Attribute values and shallow equality
//! - [`entry`]: Identity keys and comparable fields of tokens and pairs
//! - [`differ`]: Two-pass diff over base and updated lists

pub mod attribute;
pub mod differ;
pub mod entry;

pub use differ::{ChangedPairs, ChangedTokens, Differ, PairListDiff, diff_pair_lists};
pub use entry::{ListEntry, PairField, TokenField};
