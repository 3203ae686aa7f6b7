use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// 32-byte digest (blake3).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; 32]);

impl Digest {
    pub const ZERO: Self = Self([0u8; 32]);
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Create from a byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() != 32 {
            return Err(TypesError::InvalidDigestLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Compute blake3 digest of data
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Compute blake3 digest of multiple data slices
    pub fn compute_multi(data: &[&[u8]]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for chunk in data {
            hasher.update(chunk);
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Check if digest is zero
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Convert to hex string without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}

impl FromStr for Digest {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = if s.starts_with("0x") || s.starts_with("0X") {
            &s[2..]
        } else {
            s
        };

        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_compute() {
        let digest = Digest::compute(b"hello world");
        assert!(!digest.is_zero());

        // Deterministic
        let digest2 = Digest::compute(b"hello world");
        assert_eq!(digest, digest2);

        // Different input = different output
        let digest3 = Digest::compute(b"hello world!");
        assert_ne!(digest, digest3);
    }

    #[test]
    fn test_digest_compute_multi() {
        let d1 = Digest::compute_multi(&[b"hello ", b"world"]);
        let d2 = Digest::compute(b"hello world");
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_digest_hex_roundtrip() {
        let digest = Digest::compute(b"test");
        let hex = digest.to_string();
        let parsed: Digest = hex.parse().unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn test_digest_from_slice_invalid() {
        assert!(Digest::from_slice(&[0u8; 16]).is_err());
        assert!(Digest::from_slice(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_digest_from_str_accepts_prefix() {
        let digest = Digest::compute(b"test");
        let prefixed = format!("0x{}", digest.to_hex());
        let parsed: Digest = prefixed.parse().unwrap();
        assert_eq!(digest, parsed);
    }
}
