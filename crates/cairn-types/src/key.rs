use crate::digest::Digest;
use crate::error::TypesError;
use crate::public_key::PublicKey;
use std::fmt;
use std::str::FromStr;

/// 32-byte account identifier, derived from a public key.
/// Display format: `account-hash-<hex>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccountHash([u8; 32]);

impl AccountHash {
    pub const LEN: usize = 32;

    /// Display prefix
    pub const PREFIX: &'static str = "account-hash-";

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() != 32 {
            return Err(TypesError::InvalidDigestLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for AccountHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.to_hex())
    }
}

impl fmt::Debug for AccountHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountHash({})", self.to_hex())
    }
}

impl FromStr for AccountHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for AccountHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 32-byte contract identifier.
/// Display format: `hash-<hex>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ContractHash(Digest);

impl ContractHash {
    /// Display prefix
    pub const PREFIX: &'static str = "hash-";

    pub const fn new(digest: Digest) -> Self {
        Self(digest)
    }

    pub const fn value(&self) -> Digest {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for ContractHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.to_hex())
    }
}

impl fmt::Debug for ContractHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractHash({})", self.to_hex())
    }
}

impl FromStr for ContractHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Ok(Self(Digest::from_str(s)?))
    }
}

/// On-chain key, tagged by key space.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub enum Key {
    /// An account, addressed by account hash
    Account(AccountHash),
    /// A contract, addressed by contract hash
    Hash(ContractHash),
    /// An unforgeable reference into contract-local storage
    URef(Digest),
}

impl Key {
    const UREF_PREFIX: &'static str = "uref-";

    /// Formatted string form used on the wire and in named keys.
    pub fn to_formatted_string(&self) -> String {
        match self {
            Key::Account(hash) => hash.to_string(),
            Key::Hash(hash) => hash.to_string(),
            Key::URef(digest) => format!("{}{}", Self::UREF_PREFIX, digest.to_hex()),
        }
    }

    /// Parse a formatted key string. The prefix selects the key space.
    pub fn from_formatted_string(s: &str) -> Result<Self, TypesError> {
        if let Some(rest) = s.strip_prefix(AccountHash::PREFIX) {
            return Ok(Key::Account(rest.parse()?));
        }
        if let Some(rest) = s.strip_prefix(Self::UREF_PREFIX) {
            return Ok(Key::URef(rest.parse()?));
        }
        if let Some(rest) = s.strip_prefix(ContractHash::PREFIX) {
            return Ok(Key::Hash(rest.parse()?));
        }
        Err(TypesError::InvalidKeyFormat(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.to_formatted_string())
    }
}

impl FromStr for Key {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_formatted_string(s)
    }
}

impl From<AccountHash> for Key {
    fn from(hash: AccountHash) -> Self {
        Key::Account(hash)
    }
}

impl From<ContractHash> for Key {
    fn from(hash: ContractHash) -> Self {
        Key::Hash(hash)
    }
}

/// Recipient of a transfer or contract argument: either a public key that
/// still needs resolving to its account hash, or an already-resolved key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recipient {
    PublicKey(PublicKey),
    Key(Key),
}

impl From<PublicKey> for Recipient {
    fn from(key: PublicKey) -> Self {
        Recipient::PublicKey(key)
    }
}

impl From<Key> for Recipient {
    fn from(key: Key) -> Self {
        Recipient::Key(key)
    }
}

impl From<AccountHash> for Recipient {
    fn from(hash: AccountHash) -> Self {
        Recipient::Key(Key::Account(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_hash_display_roundtrip() {
        let hash = AccountHash::from_bytes([0xabu8; 32]);
        let s = hash.to_string();
        assert!(s.starts_with("account-hash-"));

        let parsed: AccountHash = s.parse().unwrap();
        assert_eq!(hash, parsed);

        // Bare hex also accepted
        let parsed: AccountHash = hash.to_hex().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn test_contract_hash_display_roundtrip() {
        let hash = ContractHash::new(Digest::compute(b"contract"));
        let s = hash.to_string();
        assert!(s.starts_with("hash-"));

        let parsed: ContractHash = s.parse().unwrap();
        assert_eq!(hash, parsed);

        let parsed: ContractHash = hash.to_hex().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn test_key_formatted_roundtrip() {
        let keys = [
            Key::Account(AccountHash::from_bytes([1u8; 32])),
            Key::Hash(ContractHash::new(Digest::compute(b"c"))),
            Key::URef(Digest::compute(b"u")),
        ];

        for key in keys {
            let s = key.to_formatted_string();
            let parsed = Key::from_formatted_string(&s).unwrap();
            assert_eq!(key, parsed);
        }
    }

    #[test]
    fn test_key_rejects_unprefixed() {
        let bare = hex::encode([2u8; 32]);
        assert!(Key::from_formatted_string(&bare).is_err());
    }
}
