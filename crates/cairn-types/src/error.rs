use thiserror::Error;

/// Errors that can occur in type operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    #[error("Invalid digest length: expected 32, got {0}")]
    InvalidDigestLength(usize),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Invalid public key length: expected {expected}, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("Unknown algorithm tag: {0}")]
    UnknownAlgorithmTag(u8),

    #[error("Invalid motes amount: {0}")]
    InvalidMotes(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<hex::FromHexError> for TypesError {
    fn from(e: hex::FromHexError) -> Self {
        TypesError::InvalidHex(e.to_string())
    }
}

impl From<std::num::ParseIntError> for TypesError {
    fn from(e: std::num::ParseIntError) -> Self {
        TypesError::InvalidMotes(e.to_string())
    }
}
