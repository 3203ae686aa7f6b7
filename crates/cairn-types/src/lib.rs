//! Cairn Types - Core type definitions for the CAIRN contract SDK.
//!
//! This crate provides the vocabulary shared by the client and helper
//! layers:
//! - Digests (32-byte, blake3)
//! - Keys (account hashes, contract hashes, urefs)
//! - Public keys and signatures (Ed25519, Secp256k1)
//! - Typed values and runtime arguments
//! - Stored values (contract and account metadata)
//! - Deploys (headers, executable items, approvals)

pub mod args;
pub mod deploy;
pub mod digest;
pub mod error;
pub mod key;
pub mod motes;
pub mod public_key;
pub mod stored_value;
pub mod value;

mod serialization;

pub use args::RuntimeArgs;
pub use deploy::{
    Approval, Deploy, DeployHash, DeployHeader, DeployParams, ExecutableItem, TimeDiff, Timestamp,
    DEFAULT_GAS_PRICE,
};
pub use digest::Digest;
pub use error::TypesError;
pub use key::{AccountHash, ContractHash, Key, Recipient};
pub use motes::Motes;
pub use public_key::{Algorithm, PublicKey, Signature};
pub use stored_value::{Account, Contract, NamedKey, StoredValue};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Account, AccountHash, Algorithm, Approval, Contract, ContractHash, Deploy, DeployHash,
        DeployHeader, DeployParams, Digest, ExecutableItem, Key, Motes, NamedKey, PublicKey,
        Recipient, RuntimeArgs, Signature, StoredValue, TimeDiff, Timestamp, TypesError, Value,
    };
}
