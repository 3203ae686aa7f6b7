use crate::error::CryptoError;
use crate::{ed25519, secp256k1};
use cairn_types::{Algorithm, Approval, Deploy, PublicKey, Signature};
use std::fmt;
use zeroize::Zeroize;

/// Asymmetric key pair, tagged by algorithm.
///
/// Dispatches to the per-algorithm modules; the variant decides which
/// signature encoding every downstream consumer sees.
pub enum KeyPair {
    Ed25519(ed25519::Keypair),
    Secp256k1(secp256k1::Keypair),
}

impl KeyPair {
    /// Generate a new random key pair for the given algorithm.
    pub fn generate(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Ed25519 => KeyPair::Ed25519(ed25519::Keypair::generate()),
            Algorithm::Secp256k1 => KeyPair::Secp256k1(secp256k1::Keypair::generate()),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(algorithm: Algorithm, seed: &[u8; 32]) -> Result<Self, CryptoError> {
        match algorithm {
            Algorithm::Ed25519 => Ok(KeyPair::Ed25519(ed25519::Keypair::from_seed(seed))),
            Algorithm::Secp256k1 => Ok(KeyPair::Secp256k1(secp256k1::Keypair::from_seed(seed)?)),
        }
    }

    /// Load from a hex-encoded 32-byte seed.
    pub fn from_hex(algorithm: Algorithm, s: &str) -> Result<Self, CryptoError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(s)?;

        let len = bytes.len();
        if len != 32 {
            bytes.zeroize();
            return Err(CryptoError::InvalidSeedLength(len));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        bytes.zeroize();

        let keypair = Self::from_seed(algorithm, &seed);
        seed.zeroize();
        keypair
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyPair::Ed25519(_) => Algorithm::Ed25519,
            KeyPair::Secp256k1(_) => Algorithm::Secp256k1,
        }
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(keypair) => keypair.public_key(),
            KeyPair::Secp256k1(keypair) => keypair.public_key(),
        }
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            KeyPair::Ed25519(keypair) => keypair.sign(message),
            KeyPair::Secp256k1(keypair) => keypair.sign(message),
        }
    }

    /// Sign a deploy: appends an approval over the deploy hash.
    pub fn sign_deploy(&self, deploy: &mut Deploy) {
        let signature = self.sign(deploy.hash.as_bytes());
        deploy.push_approval(Approval {
            signer: self.public_key(),
            signature,
        });
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({})", self.public_key())
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        match self {
            KeyPair::Ed25519(keypair) => KeyPair::Ed25519(keypair.clone()),
            KeyPair::Secp256k1(keypair) => KeyPair::Secp256k1(keypair.clone()),
        }
    }
}

/// Verify a signature against a public key of the same algorithm.
pub fn verify(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), CryptoError> {
    match (public_key, signature) {
        (PublicKey::Ed25519(pk), Signature::Ed25519(sig)) => ed25519::verify(pk, message, sig),
        (PublicKey::Secp256k1(pk), Signature::Secp256k1(sig)) => {
            secp256k1::verify(pk, message, sig)
        }
        _ => Err(CryptoError::AlgorithmMismatch {
            key: public_key.algorithm().name(),
            signature: signature.algorithm().name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_types::{
        DeployParams, Digest, ExecutableItem, Motes, RuntimeArgs, TimeDiff, Timestamp,
    };

    fn make_deploy(account: PublicKey) -> Deploy {
        let params = DeployParams::new(account, "cairn-test", TimeDiff::from_secs(60), vec![])
            .with_timestamp(Timestamp::from_millis(1_700_000_000_000));
        let session = ExecutableItem::ModuleBytes {
            module_bytes: vec![0x00, 0x61, 0x73, 0x6d],
            args: RuntimeArgs::new(),
        };
        Deploy::make(params, session, ExecutableItem::standard_payment(Motes::new(1))).unwrap()
    }

    #[test]
    fn test_sign_and_verify_both_algorithms() {
        for algorithm in [Algorithm::Ed25519, Algorithm::Secp256k1] {
            let keypair = KeyPair::generate(algorithm);
            assert_eq!(keypair.algorithm(), algorithm);
            assert_eq!(keypair.public_key().algorithm(), algorithm);

            let signature = keypair.sign(b"message");
            assert_eq!(signature.algorithm(), algorithm);
            assert!(verify(&keypair.public_key(), b"message", &signature).is_ok());
        }
    }

    #[test]
    fn test_verify_rejects_algorithm_mismatch() {
        let ed = KeyPair::generate(Algorithm::Ed25519);
        let secp = KeyPair::generate(Algorithm::Secp256k1);

        let signature = ed.sign(b"message");
        let result = verify(&secp.public_key(), b"message", &signature);
        assert!(matches!(result, Err(CryptoError::AlgorithmMismatch { .. })));
    }

    #[test]
    fn test_sign_deploy_appends_valid_approval() {
        let keypair = KeyPair::generate(Algorithm::Secp256k1);
        let mut deploy = make_deploy(keypair.public_key());

        keypair.sign_deploy(&mut deploy);

        assert_eq!(deploy.approvals.len(), 1);
        let approval = &deploy.approvals[0];
        assert_eq!(approval.signer, keypair.public_key());
        assert!(verify(&approval.signer, deploy.hash.as_bytes(), &approval.signature).is_ok());
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let seed = [13u8; 32];
        let keypair = KeyPair::from_seed(Algorithm::Ed25519, &seed).unwrap();
        let imported = KeyPair::from_hex(Algorithm::Ed25519, &hex::encode(seed)).unwrap();
        assert_eq!(keypair.public_key(), imported.public_key());
    }

    #[test]
    fn test_from_hex_invalid_length() {
        let result = KeyPair::from_hex(Algorithm::Ed25519, "deadbeef");
        assert!(matches!(result, Err(CryptoError::InvalidSeedLength(4))));
    }

    #[test]
    fn test_make_deploy_uses_digest_hash() {
        let keypair = KeyPair::generate(Algorithm::Ed25519);
        let deploy = make_deploy(keypair.public_key());
        assert_ne!(deploy.hash, Digest::ZERO);
    }
}
