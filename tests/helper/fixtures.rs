//! Token and pair fixtures

use pair_list::{Pair, Token};

pub fn token_a() -> Token {
    Token {
        chain_id: 1,
        address: "0x0a".to_string(),
        name: "token a".to_string(),
        decimals: 18,
        symbol: "abcd".to_string(),
        logo_uri: Some("ipfs://test".to_string()),
        tags: Some(vec!["hello".to_string(), "world".to_string()]),
        extensions: None,
        price_oracle_address: None,
    }
}

pub fn token_a_changed_name_decimals() -> Token {
    Token {
        name: "blah".to_string(),
        decimals: 12,
        ..token_a()
    }
}

pub fn token_a_changed_tags() -> Token {
    Token {
        tags: Some(vec!["hello".to_string(), "worlds".to_string()]),
        ..token_a()
    }
}

pub fn token_b() -> Token {
    Token {
        chain_id: 1,
        address: "0x0b".to_string(),
        name: "token b".to_string(),
        decimals: 9,
        symbol: "defg".to_string(),
        logo_uri: Some("ipfs://blah".to_string()),
        tags: Some(vec!["token".to_string(), "other".to_string()]),
        extensions: None,
        price_oracle_address: None,
    }
}

pub fn pair_of(base: Token, quote: Token) -> Pair {
    Pair {
        price_oracle_address: base.address.clone(),
        base,
        base_adapter_type: "None".to_string(),
        quote,
        quote_adapter_type: "None".to_string(),
        decimals: 18,
        name: None,
        logo_uri: None,
        tags: None,
        extensions: None,
    }
}

/// Pair quoting token A against itself
pub fn pair_a() -> Pair {
    pair_of(token_a(), token_a())
}
