//! Common types for registry entries

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Free-form extension data attached to a token or pair.
///
/// Values are scalars or maps of scalars nested at most two levels deep.
pub type Extensions = IndexMap<String, serde_json::Value>;

/// Price adapter backing one side of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterType {
    None,
    Chainlink,
    UniswapV3,
    Custom,
}

impl AdapterType {
    /// Returns the string representation of the adapter type
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterType::None => "None",
            AdapterType::Chainlink => "Chainlink",
            AdapterType::UniswapV3 => "UniswapV3",
            AdapterType::Custom => "Custom",
        }
    }
}

impl std::str::FromStr for AdapterType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(AdapterType::None),
            "Chainlink" => Ok(AdapterType::Chainlink),
            "UniswapV3" => Ok(AdapterType::UniswapV3),
            "Custom" => Ok(AdapterType::Custom),
            _ => Err(()),
        }
    }
}

/// Metadata for a single token, identified by `(chain_id, address)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub name: String,
    pub decimals: u8,
    pub symbol: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    /// Not tracked by the diff engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_oracle_address: Option<String>,
}

/// A market between two tokens, identified by `(base.address, quote.address)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub base: Token,
    pub base_adapter_type: String,
    pub quote: Token,
    pub quote_adapter_type: String,
    pub decimals: u8,
    /// Not tracked by the diff engine
    pub price_oracle_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Pair {
    /// Adapter of the base side, if it names a known adapter
    pub fn base_adapter(&self) -> Option<AdapterType> {
        self.base_adapter_type.parse().ok()
    }

    /// Adapter of the quote side, if it names a known adapter
    pub fn quote_adapter(&self) -> Option<AdapterType> {
        self.quote_adapter_type.parse().ok()
    }
}
