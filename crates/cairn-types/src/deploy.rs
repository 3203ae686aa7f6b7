use crate::args::RuntimeArgs;
use crate::digest::Digest;
use crate::error::TypesError;
use crate::key::ContractHash;
use crate::motes::Motes;
use crate::public_key::{PublicKey, Signature};
use crate::value::Value;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Hash identifying a deploy on the network.
pub type DeployHash = Digest;

/// Gas price carried by every deploy header. The network currently runs a
/// single price tier.
pub const DEFAULT_GAS_PRICE: u64 = 1;

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn millis(&self) -> u64 {
        self.0
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A duration in milliseconds, used for deploy time-to-live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub struct TimeDiff(u64);

impl TimeDiff {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs * 1000)
    }

    pub const fn millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Parameters shared by every deploy.
#[derive(Clone, Debug, PartialEq)]
pub struct DeployParams {
    /// Account the deploy executes under
    pub account: PublicKey,
    /// Chain the deploy is valid on
    pub chain_name: String,
    /// Gas price; fixed network-wide for now
    pub gas_price: u64,
    /// Time-to-live, counted from the timestamp
    pub ttl: TimeDiff,
    /// Deploys that must be processed before this one
    pub dependencies: Vec<Digest>,
    /// Explicit timestamp; `None` means "now" at make time
    pub timestamp: Option<Timestamp>,
}

impl DeployParams {
    pub fn new(
        account: PublicKey,
        chain_name: impl Into<String>,
        ttl: TimeDiff,
        dependencies: Vec<Digest>,
    ) -> Self {
        Self {
            account,
            chain_name: chain_name.into(),
            gas_price: DEFAULT_GAS_PRICE,
            ttl,
            dependencies,
            timestamp: None,
        }
    }

    /// Pin the timestamp instead of sampling the clock at make time.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// The executable part of a deploy: its session or payment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub enum ExecutableItem {
    /// Raw WASM to install, or the empty standard-payment module
    ModuleBytes {
        #[cfg_attr(feature = "serde", serde(with = "crate::serialization::hex_bytes"))]
        module_bytes: Vec<u8>,
        args: RuntimeArgs,
    },
    /// Call an entry point on an installed contract
    StoredContractByHash {
        hash: ContractHash,
        entry_point: String,
        args: RuntimeArgs,
    },
}

impl ExecutableItem {
    /// The standard payment: an empty module with an `amount` argument.
    pub fn standard_payment(amount: Motes) -> Self {
        ExecutableItem::ModuleBytes {
            module_bytes: Vec::new(),
            args: RuntimeArgs::new().with("amount", Value::U128(amount.value())),
        }
    }

    pub fn args(&self) -> &RuntimeArgs {
        match self {
            ExecutableItem::ModuleBytes { args, .. } => args,
            ExecutableItem::StoredContractByHash { args, .. } => args,
        }
    }
}

/// A (signer, signature) pair authorizing a deploy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Approval {
    pub signer: PublicKey,
    pub signature: Signature,
}

/// Deploy header; its canonical bytes determine the deploy hash.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub struct DeployHeader {
    pub account: PublicKey,
    pub timestamp: Timestamp,
    pub ttl: TimeDiff,
    pub gas_price: u64,
    pub body_hash: Digest,
    pub dependencies: Vec<Digest>,
    pub chain_name: String,
}

/// A transaction: session code plus payment, signed by one or more
/// approvals.
///
/// A deploy submitted to the network must carry at least one approval;
/// [`Deploy::push_approval`] and the key pair's deploy signing are the only
/// places approvals are constructed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deploy {
    pub hash: DeployHash,
    pub header: DeployHeader,
    pub payment: ExecutableItem,
    pub session: ExecutableItem,
    pub approvals: Vec<Approval>,
}

impl Deploy {
    /// Build an unsigned deploy.
    ///
    /// `body_hash = blake3(borsh(payment) || borsh(session))`, and the
    /// deploy hash is the blake3 digest of the borsh-encoded header.
    pub fn make(
        params: DeployParams,
        session: ExecutableItem,
        payment: ExecutableItem,
    ) -> Result<Self, TypesError> {
        let payment_bytes = to_canonical_bytes(&payment)?;
        let session_bytes = to_canonical_bytes(&session)?;
        let body_hash = Digest::compute_multi(&[&payment_bytes, &session_bytes]);

        let header = DeployHeader {
            account: params.account,
            timestamp: params.timestamp.unwrap_or_else(Timestamp::now),
            ttl: params.ttl,
            gas_price: params.gas_price,
            body_hash,
            dependencies: params.dependencies,
            chain_name: params.chain_name,
        };
        let hash = Digest::compute(&to_canonical_bytes(&header)?);

        Ok(Self {
            hash,
            header,
            payment,
            session,
            approvals: Vec::new(),
        })
    }

    /// Append an approval. Does not validate the signature; the node does.
    pub fn push_approval(&mut self, approval: Approval) {
        self.approvals.push(approval);
    }

    pub fn is_signed(&self) -> bool {
        !self.approvals.is_empty()
    }
}

fn to_canonical_bytes<T: borsh::BorshSerialize>(value: &T) -> Result<Vec<u8>, TypesError> {
    borsh::to_vec(value).map_err(|e| TypesError::Serialization(e.to_string()))
}
