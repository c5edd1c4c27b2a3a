//! Registry data model
//! - types.rs: Token, Pair, AdapterType, Extensions
//! - pair_list.rs: PairList snapshot and tag definitions

pub mod pair_list;
pub mod types;

pub use pair_list::{PairList, TagDefinition, Tags};
pub use types::{AdapterType, Extensions, Pair, Token};
