use thiserror::Error;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Signature verification failed")]
    VerificationFailed,

    #[error("Algorithm mismatch: key is {key}, signature is {signature}")]
    AlgorithmMismatch {
        key: &'static str,
        signature: &'static str,
    },

    #[error("Invalid seed length: expected 32, got {0}")]
    InvalidSeedLength(usize),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl From<ed25519_dalek::SignatureError> for CryptoError {
    fn from(_: ed25519_dalek::SignatureError) -> Self {
        CryptoError::InvalidSignature
    }
}

impl From<secp256k1::Error> for CryptoError {
    fn from(e: secp256k1::Error) -> Self {
        match e {
            secp256k1::Error::InvalidPublicKey => CryptoError::InvalidPublicKey,
            secp256k1::Error::InvalidSecretKey => CryptoError::InvalidPrivateKey,
            secp256k1::Error::IncorrectSignature => CryptoError::VerificationFailed,
            _ => CryptoError::InvalidSignature,
        }
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(e.to_string())
    }
}
