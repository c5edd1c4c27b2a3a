//! Identity keys and comparable attributes of list entries

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::diff::attribute::{AttributeValue, shallow_eq};
use crate::error::DiffError;
use crate::list::{Pair, Token};

/// An entry of a pair list that the diff engine can index and compare
///
/// Identity is the two-level key `(primary_key, secondary_key)`. Identity
/// fields and the price oracle address are never part of [`Self::FIELDS`].
pub trait ListEntry: Clone {
    /// Attribute name reported when a value differs
    type Field: Copy + fmt::Debug + Serialize + 'static;
    /// Outer identity scope (chain id for tokens, base address for pairs)
    type Primary: Clone + Eq + Hash + fmt::Debug + Serialize;

    /// Human readable entry kind, used in logs
    const KIND: &'static str;

    /// All comparable attributes, in reporting order
    const FIELDS: &'static [Self::Field];

    fn primary_key(&self) -> Self::Primary;

    fn secondary_key(&self) -> &str;

    fn attribute(&self, field: Self::Field) -> AttributeValue<'_>;

    /// Error describing this entry as a duplicate within `list`
    fn duplicate_error(&self, list: &'static str) -> DiffError;

    /// Attributes of `self` whose values differ from `base`
    fn changed_fields(&self, base: &Self) -> Vec<Self::Field> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|field| !shallow_eq(&self.attribute(*field), &base.attribute(*field)))
            .collect()
    }
}

/// Comparable attribute of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "decimals")]
    Decimals,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "logoURI")]
    LogoUri,
    #[serde(rename = "tags")]
    Tags,
    #[serde(rename = "extensions")]
    Extensions,
}

impl TokenField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenField::Name => "name",
            TokenField::Decimals => "decimals",
            TokenField::Symbol => "symbol",
            TokenField::LogoUri => "logoURI",
            TokenField::Tags => "tags",
            TokenField::Extensions => "extensions",
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparable attribute of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PairField {
    #[serde(rename = "baseAdapterType")]
    BaseAdapterType,
    #[serde(rename = "quoteAdapterType")]
    QuoteAdapterType,
    #[serde(rename = "decimals")]
    Decimals,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "logoURI")]
    LogoUri,
    #[serde(rename = "tags")]
    Tags,
    #[serde(rename = "extensions")]
    Extensions,
}

impl PairField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairField::BaseAdapterType => "baseAdapterType",
            PairField::QuoteAdapterType => "quoteAdapterType",
            PairField::Decimals => "decimals",
            PairField::Name => "name",
            PairField::LogoUri => "logoURI",
            PairField::Tags => "tags",
            PairField::Extensions => "extensions",
        }
    }
}

impl fmt::Display for PairField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ListEntry for Token {
    type Field = TokenField;
    type Primary = u64;

    const KIND: &'static str = "token";

    const FIELDS: &'static [TokenField] = &[
        TokenField::Name,
        TokenField::Decimals,
        TokenField::Symbol,
        TokenField::LogoUri,
        TokenField::Tags,
        TokenField::Extensions,
    ];

    fn primary_key(&self) -> u64 {
        self.chain_id
    }

    fn secondary_key(&self) -> &str {
        &self.address
    }

    fn attribute(&self, field: TokenField) -> AttributeValue<'_> {
        match field {
            TokenField::Name => self.name.as_str().into(),
            TokenField::Decimals => self.decimals.into(),
            TokenField::Symbol => self.symbol.as_str().into(),
            TokenField::LogoUri => self.logo_uri.as_deref().into(),
            TokenField::Tags => self.tags.as_deref().into(),
            TokenField::Extensions => self.extensions.as_ref().into(),
        }
    }

    fn duplicate_error(&self, list: &'static str) -> DiffError {
        DiffError::DuplicateToken {
            list,
            chain_id: self.chain_id,
            address: self.address.clone(),
        }
    }
}

impl ListEntry for Pair {
    type Field = PairField;
    type Primary = String;

    const KIND: &'static str = "pair";

    const FIELDS: &'static [PairField] = &[
        PairField::BaseAdapterType,
        PairField::QuoteAdapterType,
        PairField::Decimals,
        PairField::Name,
        PairField::LogoUri,
        PairField::Tags,
        PairField::Extensions,
    ];

    fn primary_key(&self) -> String {
        self.base.address.clone()
    }

    fn secondary_key(&self) -> &str {
        &self.quote.address
    }

    fn attribute(&self, field: PairField) -> AttributeValue<'_> {
        match field {
            PairField::BaseAdapterType => self.base_adapter_type.as_str().into(),
            PairField::QuoteAdapterType => self.quote_adapter_type.as_str().into(),
            PairField::Decimals => self.decimals.into(),
            PairField::Name => self.name.as_deref().into(),
            PairField::LogoUri => self.logo_uri.as_deref().into(),
            PairField::Tags => self.tags.as_deref().into(),
            PairField::Extensions => self.extensions.as_ref().into(),
        }
    }

    fn duplicate_error(&self, list: &'static str) -> DiffError {
        DiffError::DuplicatePair {
            list,
            base: self.base.address.clone(),
            quote: self.quote.address.clone(),
        }
    }
}
