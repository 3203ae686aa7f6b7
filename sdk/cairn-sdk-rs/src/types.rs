//! SDK parameter and result types.

use cairn_types::{ContractHash, Key, Motes, RuntimeArgs, TimeDiff};
use std::collections::BTreeMap;

/// Parameters for calling an entry point on an installed contract.
///
/// Dependencies are hex-encoded deploy hashes; they are decoded when the
/// deploy is built. A fresh `ttl` and dependency set apply per call; reusing
/// them does not make resubmission idempotent, because the deploy timestamp
/// is sampled at build time.
#[derive(Debug, Clone)]
pub struct ContractCallParams {
    /// Chain the deploy is valid on
    pub chain_name: String,
    /// Contract to call
    pub contract_hash: ContractHash,
    /// Entry point name
    pub entry_point: String,
    /// Runtime arguments for the entry point
    pub args: RuntimeArgs,
    /// Payment amount in motes
    pub payment_amount: Motes,
    /// Time-to-live
    pub ttl: TimeDiff,
    /// Hex-encoded hashes of deploys that must be processed first
    pub dependencies: Vec<String>,
}

impl ContractCallParams {
    /// Create call parameters with no dependencies.
    pub fn new(
        chain_name: impl Into<String>,
        contract_hash: ContractHash,
        entry_point: impl Into<String>,
        args: RuntimeArgs,
        payment_amount: Motes,
        ttl: TimeDiff,
    ) -> Self {
        Self {
            chain_name: chain_name.into(),
            contract_hash,
            entry_point: entry_point.into(),
            args,
            payment_amount,
            ttl,
            dependencies: Vec::new(),
        }
    }

    /// Set dependency deploy hashes (hex-encoded).
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Resolved handle for an installed contract: its package hash plus the
/// requested named keys, re-keyed under camel-cased names.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractHandle {
    pub contract_package_hash: ContractHash,
    pub named_keys: BTreeMap<String, Key>,
}

impl ContractHandle {
    /// Look up a named key by its camel-cased name.
    pub fn named_key(&self, name: &str) -> Option<&Key> {
        self.named_keys.get(name)
    }
}
