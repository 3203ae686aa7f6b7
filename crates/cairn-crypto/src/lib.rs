//! Cairn Crypto - Key management for the CAIRN contract SDK.
//!
//! This crate provides:
//! - Ed25519 key pairs and signatures (deploy signing)
//! - Secp256k1 key pairs and compact ECDSA signatures
//! - An algorithm-tagged [`KeyPair`] that dispatches between them

pub mod ed25519;
pub mod error;
pub mod keypair;
pub mod secp256k1;

pub use error::CryptoError;
pub use keypair::{verify, KeyPair};
