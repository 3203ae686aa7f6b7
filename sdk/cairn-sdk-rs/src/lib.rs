//! CAIRN Rust SDK
//!
//! Helpers for installing smart contracts, querying contract state, and
//! building, signing and submitting deploys on the CAIRN network.
//!
//! # Example
//! ```rust,ignore
//! use cairn_sdk::{contract, Client, ContractCallParams};
//! use cairn_crypto::KeyPair;
//! use cairn_types::{Algorithm, Motes, RuntimeArgs, TimeDiff};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("http://localhost:7777/rpc");
//!     let keypair = KeyPair::generate(Algorithm::Ed25519);
//!
//!     let params = ContractCallParams::new(
//!         "cairn-test",
//!         "hash-0101..0101".parse().unwrap(),
//!         "transfer",
//!         RuntimeArgs::new().with("amount", 100u64),
//!         Motes::new(2_500_000_000),
//!         TimeDiff::from_secs(1800),
//!     );
//!
//!     let deploy_hash = contract::call_contract(&client, &keypair, params)
//!         .await
//!         .unwrap();
//!     println!("deploy: {}", deploy_hash);
//! }
//! ```

pub mod client;
pub mod contract;
pub mod errors;
pub mod types;

pub use client::{Client, NodeClient};
pub use errors::{Result, SdkError};
pub use types::{ContractCallParams, ContractHandle};

/// Re-export the core vocabulary for convenience
pub use cairn_crypto::KeyPair;
pub use cairn_types::{
    Deploy, DeployHash, Digest, Key, Motes, PublicKey, Recipient, RuntimeArgs, Value,
};
