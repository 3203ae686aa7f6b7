use crate::error::CryptoError;
use cairn_types::{PublicKey, Signature};
use ::secp256k1::{ecdsa, Message, SECP256K1};
use rand::rngs::OsRng;

/// Secp256k1 keypair for deploy signing.
///
/// Signatures are ECDSA over the blake3 digest of the message, in 64-byte
/// compact encoding.
pub struct Keypair {
    secret_key: secp256k1::SecretKey,
}

impl Keypair {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let secret_key = secp256k1::SecretKey::new(&mut OsRng);
        Self { secret_key }
    }

    /// Create from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let secret_key = secp256k1::SecretKey::from_slice(seed)?;
        Ok(Self { secret_key })
    }

    /// Get the public key (compressed, 33 bytes)
    pub fn public_key(&self) -> PublicKey {
        let pk = secp256k1::PublicKey::from_secret_key(SECP256K1, &self.secret_key);
        PublicKey::Secp256k1(pk.serialize())
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> Signature {
        let digest = Message::from_digest(*blake3::hash(message).as_bytes());
        let signature = SECP256K1.sign_ecdsa(&digest, &self.secret_key);
        Signature::Secp256k1(signature.serialize_compact())
    }

    /// Export private key bytes (CAUTION: sensitive)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self {
            secret_key: self.secret_key,
        }
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.secret_key.non_secure_erase();
    }
}

/// Verify a secp256k1 signature over a raw message.
pub fn verify(
    public_key: &[u8; 33],
    message: &[u8],
    signature: &[u8; 64],
) -> Result<(), CryptoError> {
    let pk = secp256k1::PublicKey::from_slice(public_key)?;
    let sig = ecdsa::Signature::from_compact(signature)?;
    let digest = Message::from_digest(*blake3::hash(message).as_bytes());
    SECP256K1
        .verify_ecdsa(&digest, &sig, &pk)
        .map_err(|_| CryptoError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypair_from_seed_deterministic() {
        let seed = [9u8; 32];
        let kp1 = Keypair::from_seed(&seed).unwrap();
        let kp2 = Keypair::from_seed(&seed).unwrap();
        assert_eq!(kp1.public_key(), kp2.public_key());
    }

    #[test]
    fn test_from_seed_rejects_invalid_scalar() {
        // Zero is not a valid secp256k1 secret key.
        assert!(Keypair::from_seed(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_sign_and_verify() {
        let keypair = Keypair::generate();
        let message = b"hello cairn";

        let signature = keypair.sign(message);
        let PublicKey::Secp256k1(pk) = keypair.public_key() else {
            panic!("secp256k1 keypair produced a non-secp256k1 key");
        };
        let Signature::Secp256k1(sig) = signature else {
            panic!("secp256k1 keypair produced a non-secp256k1 signature");
        };

        assert!(verify(&pk, message, &sig).is_ok());
        assert!(verify(&pk, b"wrong message", &sig).is_err());
    }

    #[test]
    fn test_signing_is_deterministic() {
        // RFC 6979 nonces: same key and message, same signature.
        let keypair = Keypair::from_seed(&[7u8; 32]).unwrap();
        assert_eq!(keypair.sign(b"m"), keypair.sign(b"m"));
    }
}
