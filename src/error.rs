use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors raised by wallet clients and panel operations.
///
/// Everything surfaces to the user as free text, so the messages carry
/// the underlying RPC/signer text verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PanelError {
    #[error("Could not get {0} client from wallet")]
    ClientUnavailable(&'static str),

    #[error("{0}")]
    Rpc(String),

    #[error("Failed to decode contract response: {0}")]
    Abi(String),

    #[error("{0}")]
    Signing(String),

    #[error("Chain {0} is not configured")]
    UnknownNetwork(u64),

    #[error("RPC endpoint reports chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

impl PanelError {
    pub fn rpc(err: impl std::fmt::Display) -> Self {
        PanelError::Rpc(err.to_string())
    }
}

pub type PanelResult<T> = Result<T, PanelError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid { field, reason: reason.into() }
    }
}
