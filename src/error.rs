use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Duplicate token in {list} list: chain {chain_id}, address {address}")]
    DuplicateToken {
        list: &'static str,
        chain_id: u64,
        address: String,
    },

    #[error("Duplicate pair in {list} list: base {base}, quote {quote}")]
    DuplicatePair {
        list: &'static str,
        base: String,
        quote: String,
    },
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid pair list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    Parse(#[from] semver::Error),

    #[error("Pre-release or build metadata not allowed: {0}")]
    NotPlain(String),
}
