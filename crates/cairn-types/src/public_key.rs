use crate::error::TypesError;
use crate::key::AccountHash;
use std::fmt;
use std::str::FromStr;

/// Signature algorithm supported by the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Ed25519,
    Secp256k1,
}

impl Algorithm {
    /// One-byte tag used in the hex encoding of keys and signatures.
    pub const fn tag(&self) -> u8 {
        match self {
            Algorithm::Ed25519 => 1,
            Algorithm::Secp256k1 => 2,
        }
    }

    /// Canonical lowercase name, used in account hash derivation.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Ed25519 => "ed25519",
            Algorithm::Secp256k1 => "secp256k1",
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, TypesError> {
        match tag {
            1 => Ok(Algorithm::Ed25519),
            2 => Ok(Algorithm::Secp256k1),
            other => Err(TypesError::UnknownAlgorithmTag(other)),
        }
    }
}

/// Account public key, tagged by algorithm.
///
/// Hex encoding is a one-byte algorithm tag followed by the raw key bytes:
/// `01` + 64 hex chars for Ed25519, `02` + 66 hex chars for Secp256k1
/// (compressed).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; 32]),
    Secp256k1([u8; 33]),
}

impl PublicKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            PublicKey::Ed25519(_) => Algorithm::Ed25519,
            PublicKey::Secp256k1(_) => Algorithm::Secp256k1,
        }
    }

    /// Raw key bytes without the algorithm tag.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(bytes) => bytes,
            PublicKey::Secp256k1(bytes) => bytes,
        }
    }

    /// Build from raw key bytes of a declared algorithm.
    pub fn from_raw_bytes(algorithm: Algorithm, bytes: &[u8]) -> Result<Self, TypesError> {
        match algorithm {
            Algorithm::Ed25519 => {
                let bytes: [u8; 32] =
                    bytes
                        .try_into()
                        .map_err(|_| TypesError::InvalidPublicKeyLength {
                            expected: 32,
                            actual: bytes.len(),
                        })?;
                Ok(PublicKey::Ed25519(bytes))
            }
            Algorithm::Secp256k1 => {
                let bytes: [u8; 33] =
                    bytes
                        .try_into()
                        .map_err(|_| TypesError::InvalidPublicKeyLength {
                            expected: 33,
                            actual: bytes.len(),
                        })?;
                Ok(PublicKey::Secp256k1(bytes))
            }
        }
    }

    /// Derive the on-chain account hash for this key.
    ///
    /// `account_hash = blake3(algorithm_name || 0x00 || key_bytes)`
    pub fn to_account_hash(&self) -> AccountHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.algorithm().name().as_bytes());
        hasher.update(&[0u8]);
        hasher.update(self.as_bytes());
        AccountHash::from_bytes(*hasher.finalize().as_bytes())
    }

    /// Tagged hex encoding.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{}", self.algorithm().tag(), hex::encode(self.as_bytes()))
    }

    /// Parse from tagged hex encoding.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s)?;
        let (tag, rest) = bytes
            .split_first()
            .ok_or_else(|| TypesError::InvalidHex("empty public key".to_string()))?;
        Self::from_raw_bytes(Algorithm::from_tag(*tag)?, rest)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Signature, tagged by algorithm.
///
/// Ed25519 signatures are 64 raw bytes; Secp256k1 signatures use the
/// 64-byte compact ECDSA encoding. The hex form carries the same one-byte
/// algorithm tag as [`PublicKey`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Ed25519([u8; 64]),
    Secp256k1([u8; 64]),
}

impl Signature {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Signature::Ed25519(_) => Algorithm::Ed25519,
            Signature::Secp256k1(_) => Algorithm::Secp256k1,
        }
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        match self {
            Signature::Ed25519(bytes) => bytes,
            Signature::Secp256k1(bytes) => bytes,
        }
    }

    /// Build from raw signature bytes of a declared algorithm.
    ///
    /// This is the join point for externally produced signatures: the
    /// algorithm comes from the signer's public key, not from the bytes.
    pub fn from_raw_bytes(algorithm: Algorithm, bytes: &[u8]) -> Result<Self, TypesError> {
        let bytes: [u8; 64] = bytes
            .try_into()
            .map_err(|_| TypesError::InvalidSignatureLength {
                expected: 64,
                actual: bytes.len(),
            })?;
        match algorithm {
            Algorithm::Ed25519 => Ok(Signature::Ed25519(bytes)),
            Algorithm::Secp256k1 => Ok(Signature::Secp256k1(bytes)),
        }
    }

    /// Tagged hex encoding.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{}", self.algorithm().tag(), hex::encode(self.as_bytes()))
    }

    /// Parse from tagged hex encoding.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s)?;
        let (tag, rest) = bytes
            .split_first()
            .ok_or_else(|| TypesError::InvalidHex("empty signature".to_string()))?;
        Self::from_raw_bytes(Algorithm::from_tag(*tag)?, rest)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Signature({:02x}{}...)",
            self.algorithm().tag(),
            hex::encode(&self.as_bytes()[..8])
        )
    }
}

impl FromStr for Signature {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = PublicKey::Ed25519([7u8; 32]);
        let hex = pk.to_hex();
        assert!(hex.starts_with("01"));
        assert_eq!(hex.len(), 66);
        assert_eq!(PublicKey::from_hex(&hex).unwrap(), pk);

        let pk = PublicKey::Secp256k1([9u8; 33]);
        let hex = pk.to_hex();
        assert!(hex.starts_with("02"));
        assert_eq!(hex.len(), 68);
        assert_eq!(PublicKey::from_hex(&hex).unwrap(), pk);
    }

    #[test]
    fn test_public_key_from_hex_rejects_bad_tag() {
        let hex = format!("05{}", hex::encode([1u8; 32]));
        assert!(matches!(
            PublicKey::from_hex(&hex),
            Err(TypesError::UnknownAlgorithmTag(5))
        ));
    }

    #[test]
    fn test_account_hash_deterministic() {
        let pk = PublicKey::Ed25519([42u8; 32]);
        assert_eq!(pk.to_account_hash(), pk.to_account_hash());

        let other = PublicKey::Ed25519([43u8; 32]);
        assert_ne!(pk.to_account_hash(), other.to_account_hash());
    }

    #[test]
    fn test_account_hash_depends_on_algorithm() {
        // Same leading 32 bytes, different algorithm, different hash.
        let ed = PublicKey::Ed25519([1u8; 32]);
        let secp = PublicKey::Secp256k1([1u8; 33]);
        assert_ne!(ed.to_account_hash(), secp.to_account_hash());
    }

    #[test]
    fn test_signature_tagged_encoding() {
        let ed = Signature::Ed25519([3u8; 64]);
        assert!(ed.to_hex().starts_with("01"));

        let secp = Signature::Secp256k1([3u8; 64]);
        assert!(secp.to_hex().starts_with("02"));

        // Same raw bytes, distinct encodings.
        assert_ne!(ed.to_hex(), secp.to_hex());
        assert_eq!(Signature::from_hex(&secp.to_hex()).unwrap(), secp);
    }

    #[test]
    fn test_signature_from_raw_bytes_length_check() {
        assert!(Signature::from_raw_bytes(Algorithm::Ed25519, &[0u8; 63]).is_err());
        assert!(Signature::from_raw_bytes(Algorithm::Secp256k1, &[0u8; 64]).is_ok());
    }
}
