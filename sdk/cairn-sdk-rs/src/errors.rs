//! Error types for the SDK.

use thiserror::Error;

/// SDK result type.
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK errors.
///
/// Node-side failures surface as [`SdkError::Rpc`] with the node's message
/// unchanged; the SDK does not classify them further.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Contract error
    #[error("Contract error: {0}")]
    Contract(String),

    /// WASM installation yielded no deploy hash
    #[error("Problem with installation")]
    InstallationFailed,

    /// A query resolved to something other than a typed value
    #[error("Invalid stored value")]
    InvalidStoredValue,

    /// Type error
    #[error(transparent)]
    Types(#[from] cairn_types::TypesError),

    /// Crypto error
    #[error(transparent)]
    Crypto(#[from] cairn_crypto::CryptoError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}
