use crate::digest::Digest;
use crate::key::{AccountHash, ContractHash, Key};
use crate::value::Value;

/// A human-readable name bound to an on-chain key in contract or account
/// metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedKey {
    pub name: String,
    pub key: Key,
}

impl NamedKey {
    pub fn new(name: impl Into<String>, key: Key) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

/// Contract metadata as stored in global state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    pub contract_package_hash: ContractHash,
    pub contract_wasm_hash: Digest,
    pub named_keys: Vec<NamedKey>,
}

/// Account metadata as stored in global state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    pub account_hash: AccountHash,
    pub named_keys: Vec<NamedKey>,
}

/// What a global-state query can resolve to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoredValue {
    /// A typed value
    Value(Value),
    /// A contract entity
    Contract(Contract),
    /// An account entity
    Account(Account),
}

impl StoredValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            StoredValue::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_contract(&self) -> Option<&Contract> {
        match self {
            StoredValue::Contract(contract) => Some(contract),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_accessors() {
        let value = StoredValue::Value(Value::from(11u64));
        assert!(value.as_value().is_some());
        assert!(value.as_contract().is_none());

        let contract = StoredValue::Contract(Contract {
            contract_package_hash: ContractHash::new(Digest::compute(b"pkg")),
            contract_wasm_hash: Digest::compute(b"wasm"),
            named_keys: vec![NamedKey::new("counter", Key::URef(Digest::compute(b"u")))],
        });
        assert!(contract.as_contract().is_some());
        assert!(contract.as_value().is_none());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_stored_value_serde_roundtrip() {
        let stored = StoredValue::Account(Account {
            account_hash: AccountHash::from_bytes([5u8; 32]),
            named_keys: vec![NamedKey::new(
                "main_purse",
                Key::URef(Digest::compute(b"purse")),
            )],
        });

        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredValue = serde_json::from_str(&json).unwrap();
        assert_eq!(stored, back);
    }
}
